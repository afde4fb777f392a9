use super::*;
use float_eq::assert_float_eq;

#[test]
fn identity_roundtrip() {
    let q = Quaternion::identity();
    let m = q.to_rotation_matrix();
    let q2 = Quaternion::from_rotation_matrix(&m);

    assert_float_eq!(q2.w, q.w, abs <= 1e-12);
    assert_float_eq!(q2.x, q.x, abs <= 1e-12);
    assert_float_eq!(q2.y, q.y, abs <= 1e-12);
    assert_float_eq!(q2.z, q.z, abs <= 1e-12);
}

#[test]
fn rotation_roundtrip_90deg_z() {
    // 90 degree rotation about Z.
    let q = Quaternion::new(
        std::f64::consts::FRAC_1_SQRT_2,
        0.,
        0.,
        std::f64::consts::FRAC_1_SQRT_2,
    );
    let m = q.to_rotation_matrix();
    let q2 = Quaternion::from_rotation_matrix(&m).to_positive_hemisphere();
    let q = q.to_positive_hemisphere();

    assert_float_eq!(q2.w, q.w, abs <= 1e-9);
    assert_float_eq!(q2.x, q.x, abs <= 1e-9);
    assert_float_eq!(q2.y, q.y, abs <= 1e-9);
    assert_float_eq!(q2.z, q.z, abs <= 1e-9);
}

#[test]
fn conjugate_is_inverse_for_unit_quaternion() {
    let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
    let prod = q * q.conjugate();

    assert_float_eq!(prod.w, 1., abs <= 1e-12);
    assert_float_eq!(prod.x, 0., abs <= 1e-12);
    assert_float_eq!(prod.y, 0., abs <= 1e-12);
    assert_float_eq!(prod.z, 0., abs <= 1e-12);
}

#[test]
fn normalize_produces_unit_norm() {
    let q = Quaternion::new(1., 2., 3., 4.).normalize();

    assert_float_eq!(q.norm_squared(), 1., abs <= 1e-12);
}

#[test]
fn positive_hemisphere_picks_non_negative_w() {
    let q = Quaternion::new(-0.5, 0.5, 0.5, 0.5).to_positive_hemisphere();

    assert!(q.w >= 0.);
}
