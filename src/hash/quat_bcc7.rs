use crate::error::{ConstructionError, NotImplementedError};
use crate::lattice::BccLattice;
use crate::linalg::{Quaternion, Vec3, Xform};

use super::tables::{
    cart_div_quat_bcc7, select_ori_nside, CAP_QUAT_BCC7, COVRAD_QUAT_BCC7, MAX_CART_NSIDE,
    MULT_QUAT_BCC7, NORI_QUAT_BCC7,
};

/// `Quat-BCC7`: a single 7D BCC lattice over `(t.x, t.y, t.z, q.w, q.x, q.y,
/// q.z)`, keyed by the lattice's flat (non-Z-order) index.
///
/// The BCC lattice itself absorbs the `q`/`-q` ambiguity: both signs land in
/// the same or a neighboring cell, so no hemisphere folding is needed before
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuatBcc7 {
    ori_axis_nside: u64,
    grid: BccLattice<7>,
}

impl QuatBcc7 {
    /// Builds a hash instance from a target Cartesian and angular
    /// resolution.
    pub fn new(cart_resl: f64, ang_resl: f64, cart_bound: f64) -> Result<Self, ConstructionError> {
        let ori_nside = select_ori_nside(&COVRAD_QUAT_BCC7, MULT_QUAT_BCC7, ang_resl, CAP_QUAT_BCC7);

        let cart_resl = cart_resl / cart_div_quat_bcc7();
        let cart_nside = (2.0 * cart_bound / cart_resl) as u64;
        if cart_nside > MAX_CART_NSIDE {
            return Err(ConstructionError::TooManyCartCells { requested: cart_nside });
        }

        let ori_axis_nside = ori_nside + 2;
        let ori_ub = 1.0 + 2.0 / ori_nside as f64;

        let nside = [cart_nside, cart_nside, cart_nside, ori_axis_nside, ori_axis_nside, ori_axis_nside, ori_axis_nside];
        let ub = [cart_bound, cart_bound, cart_bound, ori_ub, ori_ub, ori_ub, ori_ub];
        let lb = [-cart_bound, -cart_bound, -cart_bound, -ori_ub, -ori_ub, -ori_ub, -ori_ub];

        Ok(Self { ori_axis_nside, grid: BccLattice::new(nside, lb, ub) })
    }

    /// Maps a transform to its 64-bit key.
    #[must_use]
    pub fn get_key(&self, x: &Xform) -> u64 {
        let q = x.quaternion();
        let f7 = [x.translation.x, x.translation.y, x.translation.z, q.w, q.x, q.y, q.z];
        self.grid.point_to_flat(&f7)
    }

    /// Recovers the cell-center transform for a key.
    #[must_use]
    pub fn get_center(&self, key: u64) -> Xform {
        let f7 = self.grid.flat_to_point(key);
        let q = Quaternion::new(f7[3], f7[4], f7[5], f7[6]).normalize();
        Xform::from_quat_translation(q, Vec3::new(f7[0], f7[1], f7[2]))
    }

    /// Total number of distinct keys this instance can produce.
    #[must_use]
    pub fn approx_size(&self) -> u64 {
        self.grid.size()
    }

    /// Approximate count of distinct orientation cells covered by this
    /// instance's `ori_nside`.
    ///
    /// [`NORI_QUAT_BCC7`] only covers 62 entries, but the selection cap
    /// ([`CAP_QUAT_BCC7`]) allows `ori_nside` up to 100; instances built with
    /// a finer `ori_nside` than the table covers report
    /// [`NotImplementedError`] here instead of indexing out of bounds.
    pub fn approx_nori(&self) -> Result<u64, NotImplementedError> {
        NORI_QUAT_BCC7
            .get((self.ori_axis_nside - 2) as usize)
            .copied()
            .ok_or_else(|| NotImplementedError::new("ori_nside exceeds the Quat-BCC7 nori table"))
    }

    /// Angular cell width actually achieved (the 4th lattice axis).
    #[must_use]
    pub fn ang_width(&self) -> f64 {
        self.grid.width(3)
    }
}

#[cfg(test)]
#[path = "./quat_bcc7_tests.rs"]
mod tests;
