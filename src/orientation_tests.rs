use super::*;
use crate::linalg::Xform;
use float_eq::assert_float_eq;

#[test]
fn cell_centers_are_unit_quaternions() {
    for &c in &CELL_CENTERS {
        assert_float_eq!(c.norm_squared(), 1.0, abs <= 1e-12);
    }
}

#[test]
fn nearest_cell_of_a_center_is_itself() {
    for (id, &c) in CELL_CENTERS.iter().enumerate() {
        assert_eq!(nearest_cell(c), id as u8);
    }
}

#[test]
fn roundtrip_identity_rotation() {
    let chart = TetracontoctachoronMap::new();
    let identity = Matrix3::identity();

    let (cell_id, params) = chart.value_to_params(&identity);
    let rebuilt = chart.params_to_value(params, cell_id);

    for row in 0..3 {
        for col in 0..3 {
            assert_float_eq!(rebuilt.get(row, col), identity.get(row, col), abs <= 1e-9);
        }
    }
}

#[test]
fn roundtrip_arbitrary_rotations() {
    let chart = TetracontoctachoronMap::new();

    let samples = [
        Quaternion::new(0.9, 0.2, 0.1, 0.05).normalize(),
        Quaternion::new(0.1, 0.9, 0.2, 0.05).normalize(),
        Quaternion::new(0.3, 0.3, 0.8, 0.1).normalize(),
        Quaternion::new(0.5, 0.5, 0.5, 0.5).normalize(),
        Quaternion::new(0.6, -0.4, 0.3, -0.6).normalize(),
    ];

    for q in samples {
        let rotation = q.to_rotation_matrix();
        let (cell_id, params) = chart.value_to_params(&rotation);

        for &p in &params {
            assert!((0.0..=1.0).contains(&p), "param {p} out of range");
        }

        let rebuilt = chart.params_to_value(params, cell_id);
        let xform_a = Xform::new(rotation, crate::linalg::Vec3::zero());
        let xform_b = Xform::new(rebuilt, crate::linalg::Vec3::zero());

        assert_float_eq!(xform_a.angular_distance(&xform_b), 0.0, abs <= 1e-6);
    }
}

#[test]
fn params_clamp_out_of_range_input() {
    let chart = TetracontoctachoronMap::new();
    let rotation = chart.params_to_value([-5.0, 10.0, 0.5], 3);
    let (_, params) = chart.value_to_params(&rotation);

    for &p in &params {
        assert!((0.0..=1.0).contains(&p));
    }
}
