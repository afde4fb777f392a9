use super::*;
use crate::linalg::Matrix3;

#[test]
fn key_roundtrip_is_stable() {
    let hash = BccThreeFlat::new(1.0, 0.1, 16.0).unwrap();
    let x = Xform::new(Matrix3::identity(), Vec3::new(2.0, -1.0, 0.5));

    let key = hash.get_key(&x);
    let center = hash.get_center(key);
    let key2 = hash.get_key(&center);

    assert_eq!(key, key2);
}

#[test]
fn approx_size_matches_product_formula() {
    let hash = BccThreeFlat::new(1.0, 0.1, 16.0).unwrap();

    // ang_resl = 0.1 is finer than every entry in COVRAD_BT24_BCC3 times its
    // multiplier, so selection saturates at the cap: ori_nside = 62, giving
    // ori_axis_nside = 64. cart_resl = 1.0 / 0.56 = 1.7857..., so cart_nside
    // = (2*16.0 / 1.7857...) as u64 = 17, and the BCC cart grid holds
    // 17^3 * 2 = 9826 points.
    assert_eq!(hash.approx_size(), 63_u64.pow(3) * 2 * 9826 * 24);
}

#[test]
fn approx_nori_is_not_implemented() {
    let hash = BccThreeFlat::new(1.0, 0.1, 16.0).unwrap();
    assert!(hash.approx_nori().is_err());
}

#[test]
fn too_many_cart_cells_is_rejected() {
    let err = BccThreeFlat::new(0.01, 0.1, 512.0).unwrap_err();
    assert!(matches!(err, ConstructionError::TooManyCartCells { .. }));
}
