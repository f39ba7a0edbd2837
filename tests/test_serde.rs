//! JSON encoding of the value types

use geom3d::{Matrix3D, Point3D, SphericalSurface3D};

#[test]
fn test_matrix_serializes_as_rows() {
    let m = Matrix3D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[1.0,2.0,3.0],[4.0,5.0,6.0],[7.0,8.0,9.0]]");

    let back: Matrix3D<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_matrix_deserialization_validates_fields() {
    // 1e39 overflows f32 to infinity
    let err = serde_json::from_str::<Matrix3D<f32>>("[[1.0,1e39,3.0],[4.0,5.0,6.0],[7.0,8.0,9.0]]")
        .unwrap_err();
    assert!(err.to_string().contains("Invalid matrix: field M12 is not finite"));

    assert!(serde_json::from_str::<Matrix3D<f64>>("[[1.0,2.0,3.0],[4.0,5.0,6.0]]").is_err());
}

#[test]
fn test_surface_serializes_its_fields() {
    let cap = SphericalSurface3D::new(Point3D::from_coords(0.0, 1.0, 2.0), 0.5, 3.0);
    let value = serde_json::to_value(cap).unwrap();
    assert_eq!(value["curvature"], 0.5);
    assert_eq!(value["radius"], 3.0);
    assert_eq!(value["center"]["coord"]["z"], 2.0);

    let back: SphericalSurface3D<f64> = serde_json::from_value(value).unwrap();
    assert_eq!(back, cap);
}
