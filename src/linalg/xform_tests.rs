use super::*;
use float_eq::assert_float_eq;

#[test]
fn identity_has_zero_angular_distance_to_itself() {
    let x = Xform::identity();

    assert_float_eq!(x.angular_distance(&x), 0., abs <= 1e-9);
}

#[test]
fn quaternion_roundtrip() {
    let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
    let x = Xform::from_quat_translation(q, Vec3::new(1., 2., 3.));
    let q2 = x.quaternion();

    assert_float_eq!(q2.dot(q).abs(), 1., abs <= 1e-9);
}
