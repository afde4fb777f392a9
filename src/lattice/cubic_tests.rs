use super::*;
use float_eq::assert_float_eq;

#[test]
fn size_is_product() {
    let lattice = CubicLattice::new([4u64, 5, 6], [-1., -1., -1.], [1., 1., 1.]);
    assert_eq!(lattice.size(), 4 * 5 * 6);
}

#[test]
fn roundtrip_for_interior_points() {
    let lattice = CubicLattice::new([8u64, 8, 8], [-2., -2., -2.], [2., 2., 2.]);

    for &p in &[[0.1, 0.2, -0.3], [-1.5, 1.9, 0.0], [1.99, -1.99, 1.5]] {
        let idx = lattice.get_indices(&p);
        let center = lattice.get_center(&idx);
        let idx2 = lattice.get_indices(&center);

        assert_eq!(idx, idx2, "index mismatch for {p:?}");
    }
}

#[test]
fn get_center_matches_formula() {
    let lattice = CubicLattice::new([4u64, 4, 4], [0., 0., 0.], [4., 4., 4.]);
    let center = lattice.get_center(&[1, 2, 3]);

    assert_float_eq!(center[0], 1.5, abs <= 1e-12);
    assert_float_eq!(center[1], 2.5, abs <= 1e-12);
    assert_float_eq!(center[2], 3.5, abs <= 1e-12);
}

#[test]
fn out_of_range_points_clamp() {
    let lattice = CubicLattice::new([4u64, 4, 4], [-1., -1., -1.], [1., 1., 1.]);

    let idx_far = lattice.get_indices(&[100., 100., 100.]);
    let idx_edge = lattice.get_indices(&[1.0, 1.0, 1.0]);

    assert_eq!(idx_far, idx_edge);
}
