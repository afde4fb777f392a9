use super::*;
use float_eq::assert_float_eq;

#[test]
fn distance() {
    let v1 = Vec3::new(0., 0., 0.);
    let v2 = Vec3::new(1., 0., 0.);
    let v3 = Vec3::new(0., 1., 1.);
    let v4 = Vec3::new(1., 1., 1.);

    assert_float_eq!(v1.distance(&v1), 0., abs <= f64::EPSILON);
    assert_float_eq!(v1.distance(&v2), 1., abs <= f64::EPSILON);
    assert_float_eq!(v1.distance(&v3), 2f64.sqrt(), abs <= 1e-12);
    assert_float_eq!(v1.distance(&v4), 3f64.sqrt(), abs <= 1e-12);
}

#[test]
fn get() {
    let v = Vec3::new(1., 2., 3.);
    assert_float_eq!(v.get(0), 1., abs <= f64::EPSILON);
    assert_float_eq!(v.get(1), 2., abs <= f64::EPSILON);
    assert_float_eq!(v.get(2), 3., abs <= f64::EPSILON);
}
