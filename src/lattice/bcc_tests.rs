use super::*;
use float_eq::assert_float_eq;

#[test]
fn size_is_product_times_two() {
    let lattice = BccLattice::new([4u64, 4, 4], [-1., -1., -1.], [1., 1., 1.]);
    assert_eq!(lattice.size(), 4 * 4 * 4 * 2);
}

#[test]
fn roundtrip_for_interior_points() {
    let lattice = BccLattice::new([8u64, 8, 8], [-2., -2., -2.], [2., 2., 2.]);

    for &p in &[
        [0.1, 0.2, -0.3],
        [-1.5, 1.9, 0.0],
        [1.99, -1.99, 1.5],
        [0.0, 0.0, 0.0],
    ] {
        let (idx, parity) = lattice.get_indices(&p);
        let center = lattice.get_center(&idx, parity);
        let (idx2, parity2) = lattice.get_indices(&center);

        assert_eq!(idx, idx2, "index mismatch for {p:?}");
        assert_eq!(parity, parity2, "parity mismatch for {p:?}");

        // Covering radius bound: the BCC covering radius is
        // (1/2) * sqrt(N/4 + 1) * max(width).
        let n = 3.0;
        let max_width = lattice.width(0).max(lattice.width(1)).max(lattice.width(2));
        let bound = 0.5 * (n / 4. + 1.).sqrt() * max_width;
        let dist = {
            let dx = p[0] - center[0];
            let dy = p[1] - center[1];
            let dz = p[2] - center[2];
            (dx * dx + dy * dy + dz * dz).sqrt()
        };
        assert!(dist <= bound + 1e-9, "{dist} > {bound} for {p:?}");
    }
}

#[test]
fn flat_index_roundtrip() {
    let lattice = BccLattice::new([5u64, 6, 7], [-1., -1., -1.], [1., 1., 1.]);

    for x in 0..5u64 {
        for y in 0..6u64 {
            for z in 0..7u64 {
                for parity in [false, true] {
                    let idx = [x, y, z];
                    let flat = lattice.flat_index(&idx, parity);
                    let (idx2, parity2) = lattice.from_flat(flat);
                    assert_eq!(idx, idx2);
                    assert_eq!(parity, parity2);
                }
            }
        }
    }
}

#[test]
fn point_to_flat_to_point_stable() {
    let lattice = BccLattice::new([10u64, 10, 10], [-5., -5., -5.], [5., 5., 5.]);
    let p = [1.23, -2.34, 3.45];

    let key = lattice.point_to_flat(&p);
    let center = lattice.flat_to_point(key);
    let key2 = lattice.point_to_flat(&center);

    assert_eq!(key, key2);
}

#[test]
fn out_of_range_points_clamp() {
    let lattice = BccLattice::new([4u64, 4, 4], [-1., -1., -1.], [1., 1., 1.]);

    let (idx_far, _) = lattice.get_indices(&[100., 100., 100.]);
    let (idx_edge, _) = lattice.get_indices(&[1.0, 1.0, 1.0]);

    assert_eq!(idx_far, idx_edge);
}

#[test]
fn get_center_matches_formula() {
    let lattice = BccLattice::new([4u64, 4, 4], [0., 0., 0.], [4., 4., 4.]);

    let even = lattice.get_center(&[1, 2, 3], false);
    assert_float_eq!(even[0], 1.5, abs <= 1e-12);
    assert_float_eq!(even[1], 2.5, abs <= 1e-12);
    assert_float_eq!(even[2], 3.5, abs <= 1e-12);

    let odd = lattice.get_center(&[1, 2, 3], true);
    assert_float_eq!(odd[0], 2.0, abs <= 1e-12);
    assert_float_eq!(odd[1], 3.0, abs <= 1e-12);
    assert_float_eq!(odd[2], 4.0, abs <= 1e-12);
}
