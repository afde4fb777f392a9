use super::*;
use crate::linalg::Matrix3;

#[test]
fn key_roundtrip_is_stable() {
    let hash = BccThreeZorder::new(1.0, 0.1, 16.0).unwrap();
    let x = Xform::new(Matrix3::identity(), Vec3::new(2.0, -1.0, 0.5));

    let key = hash.get_key(&x);
    let center = hash.get_center(key);
    let key2 = hash.get_key(&center);

    assert_eq!(key, key2);
}

#[test]
fn cell_id_survives_zorder_packing() {
    let hash = BccThreeZorder::new(1.0, 0.1, 16.0).unwrap();
    let x = Xform::new(Matrix3::identity(), Vec3::new(0.0, 0.0, 0.0));

    let key = hash.get_key(&x);
    assert_eq!(key >> 59, u64::from(hash.ori_map.value_to_params(&x.rotation).0));
}

#[test]
fn too_many_cart_cells_is_rejected() {
    let err = BccThreeZorder::new(0.01, 0.1, 512.0).unwrap_err();
    assert!(matches!(err, ConstructionError::TooManyCartCells { .. }));
}

#[test]
fn too_many_ori_cells_is_rejected() {
    let err = BccThreeZorder::with_ori_nside(1.0, 63, 16.0).unwrap_err();
    assert!(matches!(err, ConstructionError::TooManyOriCells { requested: 63 }));
}
