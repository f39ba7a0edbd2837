//! Spherical cap queries through the public API

use geom3d::{GeomError, Point3D, Range, SphericalSurface3D, Surface3D};

#[test]
fn test_range_of_unit_cap() {
    let cap = SphericalSurface3D::new(Point3D::from_coords(0.0, 0.0, 0.0), 1.0, 2.0);
    let range = cap.range().expect("curvature / radius is within [-1, 1]");

    assert_eq!(range.x(), Range::new(-2.0, 2.0));
    assert_eq!(range.y(), Range::new(-2.0, 2.0));
    assert_eq!(range.z(), Range::new(2.0 - 0.5_f64.asin(), 2.0));
}

#[test]
fn test_range_follows_curvature_sign() {
    let center: Point3D<f64> = Point3D::from_coords(0.0, 0.0, 10.0);
    let top = SphericalSurface3D::new(center, 0.25, 1.0).range().unwrap();
    let bottom = SphericalSurface3D::new(center, -0.25, 1.0).range().unwrap();

    // Same extent, opposite poles
    assert!((top.z().delta() - bottom.z().delta()).abs() < 1e-12);
    assert_eq!(top.z().high(), 11.0);
    assert_eq!(bottom.z().low(), 9.0);
    assert!(top.contains(&Point3D::from_coords(0.0, 0.0, 11.0)));
    assert!(!top.contains(&center));
    assert_eq!(top.x(), bottom.x());
}

#[test]
fn test_range_rejects_curvature_beyond_radius() {
    let cap = SphericalSurface3D::new(Point3D::new(), -5.0, 2.0);
    match cap.range() {
        Err(GeomError::Domain(msg)) => assert!(msg.contains("asin")),
        other => panic!("expected a domain error, got {:?}", other),
    }
}

#[test]
fn test_range_rejects_negative_radius() {
    for curvature in [-1.0, 0.0, 1.0] {
        let cap = SphericalSurface3D::new(Point3D::<f64>::new(), curvature, -2.0);
        assert!(matches!(cap.range(), Err(GeomError::Domain(_))));
    }
    let cap = SphericalSurface3D::new(Point3D::<f64>::new(), 1.0, 2.0);
    assert!(cap.range().unwrap().is_valid());
}

#[test]
fn test_unfinished_queries_always_fail() {
    let caps = [
        SphericalSurface3D::new(Point3D::new(), 1.0, 2.0),
        SphericalSurface3D::new(Point3D::from_coords(1.0, -1.0, 0.5), -0.1, 7.0),
    ];
    let points = [
        Point3D::new(),
        Point3D::from_coords(0.0, 0.0, 2.0),
        Point3D::from_coords(100.0, -3.0, 1e-9),
    ];
    for cap in &caps {
        for p in &points {
            assert!(matches!(cap.intersects(p), Err(GeomError::NotImplemented(_))));
            assert!(matches!(cap.local_vector(p), Err(GeomError::NotImplemented(_))));
            assert!(matches!(cap.normal_vector(p), Err(GeomError::NotImplemented(_))));
        }
    }
}

#[test]
fn test_not_implemented_message() {
    let cap = SphericalSurface3D::new(Point3D::<f32>::new(), 1.0, 2.0);
    let err = cap.intersects(&Point3D::new()).unwrap_err();
    assert_eq!(err.to_string(), "Not implemented: SphericalSurface3D::intersects");
}
