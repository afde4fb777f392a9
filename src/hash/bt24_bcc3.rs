use crate::error::{ConstructionError, NotImplementedError};
use crate::lattice::BccLattice;
use crate::linalg::{Vec3, Xform};
use crate::orientation::TetracontoctachoronMap;

use super::tables::{
    select_ori_nside, CAP_BT24, CART_DIV_BT24_BCC3, COVRAD_BT24_BCC3, MAX_CART_NSIDE,
    MULT_BT24_BCC3,
};

/// `bt24-BCC3` (flat, non-Z-order): the 24-cell decomposition folds rotation
/// into `(cell_id, params)`, then two independent 3D BCC lattices quantize
/// `params` and the translation separately. Both flat indices and the cell
/// id are packed into fixed bit fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BccThreeFlat {
    ori_map: TetracontoctachoronMap,
    cart_grid: BccLattice<3>,
    ori_grid: BccLattice<3>,
}

impl BccThreeFlat {
    /// Builds a hash instance from a target Cartesian and angular
    /// resolution.
    pub fn new(cart_resl: f64, ang_resl: f64, cart_bound: f64) -> Result<Self, ConstructionError> {
        let ori_nside = select_ori_nside(&COVRAD_BT24_BCC3, MULT_BT24_BCC3, ang_resl, CAP_BT24);

        let cart_resl = cart_resl / CART_DIV_BT24_BCC3;
        let cart_nside = (2.0 * cart_bound / cart_resl) as u64;
        if cart_nside > MAX_CART_NSIDE {
            return Err(ConstructionError::TooManyCartCells { requested: cart_nside });
        }

        let cart_grid = BccLattice::new(
            [cart_nside, cart_nside, cart_nside],
            [-cart_bound, -cart_bound, -cart_bound],
            [cart_bound, cart_bound, cart_bound],
        );

        let ori_axis_nside = ori_nside + 2;
        let ori_margin = 1.0 / ori_nside as f64;
        let ori_grid = BccLattice::new(
            [ori_axis_nside; 3],
            [-ori_margin; 3],
            [1.0 + ori_margin; 3],
        );

        Ok(Self { ori_map: TetracontoctachoronMap::new(), cart_grid, ori_grid })
    }

    /// Maps a transform to its 64-bit key.
    #[must_use]
    pub fn get_key(&self, x: &Xform) -> u64 {
        let (cell_id, params) = self.ori_map.value_to_params(&x.rotation);
        let cart_flat = self.cart_grid.point_to_flat(&[
            x.translation.x,
            x.translation.y,
            x.translation.z,
        ]);
        let ori_flat = self.ori_grid.point_to_flat(&params);

        (u64::from(cell_id) << 59) | (cart_flat << 18) | ori_flat
    }

    /// Recovers the cell-center transform for a key.
    #[must_use]
    pub fn get_center(&self, key: u64) -> Xform {
        let cell_id = (key >> 59) as u8;
        let cart_flat = (key >> 18) & ((1u64 << 41) - 1);
        let ori_flat = key & ((1u64 << 18) - 1);

        let trans = self.cart_grid.flat_to_point(cart_flat);
        let params = self.ori_grid.flat_to_point(ori_flat);
        let rotation = self.ori_map.params_to_value(params, cell_id);

        Xform::new(rotation, Vec3::new(trans[0], trans[1], trans[2]))
    }

    /// Total number of distinct keys this instance can produce.
    #[must_use]
    pub fn approx_size(&self) -> u64 {
        (self.ori_grid.nside(0) - 1)
            * (self.ori_grid.nside(1) - 1)
            * (self.ori_grid.nside(2) - 1)
            * 2
            * self.cart_grid.size()
            * 24
    }

    /// Unimplemented for this variant: it carries no precomputed
    /// orientation-cell count table.
    pub fn approx_nori(&self) -> Result<u64, NotImplementedError> {
        Err(NotImplementedError::new("bt24-BCC3 has no approx_nori table"))
    }

    /// Angular cell width actually achieved.
    #[must_use]
    pub fn ang_width(&self) -> f64 {
        self.ori_grid.width(0)
    }
}

#[cfg(test)]
#[path = "./bt24_bcc3_tests.rs"]
mod tests;
