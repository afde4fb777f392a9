use super::*;
use crate::linalg::Matrix3;

#[test]
fn key_roundtrip_is_stable() {
    let hash = CubicZorder::new(1.0, 0.1, 16.0).unwrap();
    let x = Xform::new(Matrix3::identity(), Vec3::new(2.0, -1.0, 0.5));

    let key = hash.get_key(&x);
    let center = hash.get_center(key);
    let key2 = hash.get_key(&center);

    assert_eq!(key, key2);
}

#[test]
fn parity_bits_are_always_zero() {
    let hash = CubicZorder::new(1.0, 0.1, 16.0).unwrap();
    let x = Xform::new(Matrix3::identity(), Vec3::new(2.0, -1.0, 0.5));

    let key = hash.get_key(&x);
    assert_eq!(key & 0b11, 0);
}

#[test]
fn too_many_cart_cells_is_rejected() {
    let err = CubicZorder::new(0.01, 0.1, 512.0).unwrap_err();
    assert!(matches!(err, ConstructionError::TooManyCartCells { .. }));
}
