//! The 24-cell (tetracontoctachoron) orientation chart.
//!
//! Decomposes SO(3) into 24 congruent charts by folding every rotation's
//! quaternion onto the nearest of the 24 unit quaternions forming the
//! binary tetrahedral group (the vertex set of the 24-cell polytope): the 8
//! "Lipschitz units" `(±1,0,0,0)` and permutations, plus the 16
//! "half-integer units" `(±½,±½,±½,±½)`. Each chart is then parameterized by
//! a local 3-parameter tangent-space coordinate in `[0, 1]³`.

use crate::linalg::{Matrix3, Quaternion};

/// Half-width, in tangent-space units, of a single 24-cell chart.
///
/// Adjacent 24-cell vertices are separated by a geodesic angle whose cosine
/// is `1/sqrt(2)` (a 45 degree arc on the unit hypersphere) for the nearest
/// Lipschitz/half-integer pairs. Projected through `q'.xyz / q'.w`, the
/// resulting Voronoi half-width is `sqrt(2) - 1`, so the full chart spans
/// `2*(sqrt(2) - 1)` in each of the three tangent coordinates.
const CELL_WIDTH: f64 = 2. * (std::f64::consts::SQRT_2 - 1.);

/// The 24 unit quaternions at the centers of the 24-cell's octahedral
/// cells, i.e. the 24 elements of the binary tetrahedral group.
const CELL_CENTERS: [Quaternion; 24] = {
    const H: f64 = 0.5;
    [
        // 8 Lipschitz units.
        Quaternion::new(1., 0., 0., 0.),
        Quaternion::new(-1., 0., 0., 0.),
        Quaternion::new(0., 1., 0., 0.),
        Quaternion::new(0., -1., 0., 0.),
        Quaternion::new(0., 0., 1., 0.),
        Quaternion::new(0., 0., -1., 0.),
        Quaternion::new(0., 0., 0., 1.),
        Quaternion::new(0., 0., 0., -1.),
        // 16 half-integer units (all sign combinations).
        Quaternion::new(H, H, H, H),
        Quaternion::new(H, H, H, -H),
        Quaternion::new(H, H, -H, H),
        Quaternion::new(H, H, -H, -H),
        Quaternion::new(H, -H, H, H),
        Quaternion::new(H, -H, H, -H),
        Quaternion::new(H, -H, -H, H),
        Quaternion::new(H, -H, -H, -H),
        Quaternion::new(-H, H, H, H),
        Quaternion::new(-H, H, H, -H),
        Quaternion::new(-H, H, -H, H),
        Quaternion::new(-H, H, -H, -H),
        Quaternion::new(-H, -H, H, H),
        Quaternion::new(-H, -H, H, -H),
        Quaternion::new(-H, -H, -H, H),
        Quaternion::new(-H, -H, -H, -H),
    ]
};

/// Number of charts the 24-cell decomposes SO(3) into.
pub const CELL_COUNT: usize = 24;

/// Returns the cell center for a given cell id (`0..24`).
#[must_use]
pub fn cell_center(cell_id: u8) -> Quaternion {
    CELL_CENTERS[cell_id as usize]
}

/// Finds the 24-cell chart nearest to `q`, folding the `±q` ambiguity via an
/// absolute-value dot product (equivalent to choosing the nearest of the 48
/// signed directions, i.e. a "half-cell" fold). Ties (not expected to occur
/// for generic input) are broken by keeping the first cell found in
/// iteration order.
#[must_use]
fn nearest_cell(q: Quaternion) -> u8 {
    let mut best_id = 0u8;
    let mut best_dot = -1.0;
    for (id, &center) in CELL_CENTERS.iter().enumerate() {
        let dot = q.dot(center).abs();
        if dot > best_dot {
            best_dot = dot;
            best_id = id as u8;
        }
    }
    best_id
}

/// Decomposes SO(3) into 24 congruent charts and maps rotations to/from a
/// `(cell_id, params)` representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TetracontoctachoronMap;

impl TetracontoctachoronMap {
    /// Initializes the chart map (stateless).
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a rotation to its chart id and local `[0, 1]³` parameters.
    #[must_use]
    pub fn value_to_params(&self, rotation: &Matrix3) -> (u8, [f64; 3]) {
        let q = Quaternion::from_rotation_matrix(rotation);
        let cell_id = nearest_cell(q);
        let center = cell_center(cell_id);

        // q' = cellcen(cell_id)^-1 * q, folded into the positive-w
        // hemisphere. For a unit quaternion, the inverse is the conjugate.
        let q_prime = (center.conjugate() * q).to_positive_hemisphere();

        let params = [
            q_prime.x / q_prime.w / CELL_WIDTH + 0.5,
            q_prime.y / q_prime.w / CELL_WIDTH + 0.5,
            q_prime.z / q_prime.w / CELL_WIDTH + 0.5,
        ];

        (cell_id, params)
    }

    /// Inverse of [`value_to_params`](Self::value_to_params): reconstructs
    /// a rotation from a chart id and local parameters.
    #[must_use]
    pub fn params_to_value(&self, params: [f64; 3], cell_id: u8) -> Matrix3 {
        let clamped = [
            params[0].clamp(0., 1.),
            params[1].clamp(0., 1.),
            params[2].clamp(0., 1.),
        ];
        let p = [
            CELL_WIDTH * (clamped[0] - 0.5),
            CELL_WIDTH * (clamped[1] - 0.5),
            CELL_WIDTH * (clamped[2] - 0.5),
        ];

        let q_double_prime = Quaternion::new(1., p[0], p[1], p[2]).normalize();
        let q = cell_center(cell_id) * q_double_prime;

        q.to_rotation_matrix()
    }
}

#[cfg(test)]
#[path = "./orientation_tests.rs"]
mod tests;
