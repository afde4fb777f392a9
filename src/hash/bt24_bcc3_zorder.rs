use crate::dilated::{dilate, undilate};
use crate::error::{ConstructionError, NotImplementedError};
use crate::lattice::BccLattice;
use crate::linalg::{Vec3, Xform};
use crate::orientation::TetracontoctachoronMap;

use super::tables::{
    select_ori_nside, CAP_BT24, CART_DIV_BT24_BCC3, COVRAD_BT24_BCC3, MAX_CART_NSIDE,
    MULT_BT24_BCC3,
};

/// `bt24-BCC3-Zorder`: like [`super::BccThreeFlat`], but the two 3D BCC
/// lattices' low-order bits are Morton-interleaved (lanes 0..5: ori X, ori
/// Y, ori Z, cart X, cart Y, cart Z) and the cart high bits are stored in
/// dedicated fields, matching the Z-order layout used by
/// [`super::QuatBcc7Zorder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BccThreeZorder {
    ori_map: TetracontoctachoronMap,
    cart_grid: BccLattice<3>,
    ori_grid: BccLattice<3>,
}

impl BccThreeZorder {
    /// Builds a hash instance from a target Cartesian and angular
    /// resolution.
    pub fn new(cart_resl: f64, ang_resl: f64, cart_bound: f64) -> Result<Self, ConstructionError> {
        let ori_nside = select_ori_nside(&COVRAD_BT24_BCC3, MULT_BT24_BCC3, ang_resl, CAP_BT24);
        Self::with_ori_nside(cart_resl, ori_nside, cart_bound)
    }

    /// Builds a hash instance from an explicit `ori_nside`.
    pub fn with_ori_nside(
        cart_resl: f64,
        ori_nside: u64,
        cart_bound: f64,
    ) -> Result<Self, ConstructionError> {
        let cart_resl = cart_resl / CART_DIV_BT24_BCC3;
        let cart_nside = (2.0 * cart_bound / cart_resl) as u64;
        if cart_nside > MAX_CART_NSIDE {
            return Err(ConstructionError::TooManyCartCells { requested: cart_nside });
        }
        if ori_nside > CAP_BT24 {
            return Err(ConstructionError::TooManyOriCells { requested: ori_nside });
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
        let (ori_idx, ori_odd) = self.ori_grid.get_indices(&params);
        let (cart_idx, cart_odd) = self.cart_grid.get_indices(&[
            x.translation.x,
            x.translation.y,
            x.translation.z,
        ]);

        let mut key = u64::from(cell_id) << 59;
        key |= (cart_idx[0] >> 6) << 52;
        key |= (cart_idx[1] >> 6) << 45;
        key |= (cart_idx[2] >> 6) << 38;

        key >>= 2;
        key |= dilate::<6>(ori_idx[0]);
        key |= dilate::<6>(ori_idx[1]) << 1;
        key |= dilate::<6>(ori_idx[2]) << 2;
        key |= dilate::<6>(cart_idx[0] & 63) << 3;
        key |= dilate::<6>(cart_idx[1] & 63) << 4;
        key |= dilate::<6>(cart_idx[2] & 63) << 5;
        key <<= 2;

        key | u64::from(ori_odd) | (u64::from(cart_odd) << 1)
    }

    /// Recovers the cell-center transform for a key.
    #[must_use]
    pub fn get_center(&self, key: u64) -> Xform {
        let cell_id = (key >> 59) as u8;

        let cart_idx = [
            (((key >> 52) & 127) << 6) | (undilate::<6>(key >> 5) & 63),
            (((key >> 45) & 127) << 6) | (undilate::<6>(key >> 6) & 63),
            (((key >> 38) & 127) << 6) | (undilate::<6>(key >> 7) & 63),
        ];
        let ori_idx = [
            undilate::<6>((key >> 2) & ((1u64 << 36) - 1)) & 63,
            undilate::<6>((key >> 3) & ((1u64 << 36) - 1)) & 63,
            undilate::<6>((key >> 4) & ((1u64 << 36) - 1)) & 63,
        ];

        let ori_odd = key & 1 != 0;
        let cart_odd = key & 2 != 0;

        let trans = self.cart_grid.get_center(&cart_idx, cart_odd);
        let params = self.ori_grid.get_center(&ori_idx, ori_odd);
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
        Err(NotImplementedError::new("bt24-BCC3-Zorder has no approx_nori table"))
    }

    /// Angular cell width actually achieved.
    #[must_use]
    pub fn ang_width(&self) -> f64 {
        self.ori_grid.width(0)
    }
}

#[cfg(test)]
#[path = "./bt24_bcc3_zorder_tests.rs"]
mod tests;
