use crate::error::{ConstructionError, NotImplementedError};
use crate::lattice::BccLattice;
use crate::linalg::{Vec3, Xform};
use crate::orientation::TetracontoctachoronMap;

use super::tables::{
    cart_div_bt24_bcc6, select_ori_nside, CAP_BT24, COVRAD_BT24_BCC3, MAX_CART_NSIDE,
    MULT_BT24_BCC6, NORI_BT24_BCC6,
};

/// `bt24-BCC6`: a single 6D BCC lattice over `(t.x, t.y, t.z, params.x,
/// params.y, params.z)`, with the 24-cell id stored in the top 5 key bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BccSix {
    ori_axis_nside: u64,
    ori_map: TetracontoctachoronMap,
    grid: BccLattice<6>,
}

impl BccSix {
    /// Builds a hash instance from a target Cartesian and angular
    /// resolution.
    pub fn new(cart_resl: f64, ang_resl: f64, cart_bound: f64) -> Result<Self, ConstructionError> {
        let ori_nside = select_ori_nside(&COVRAD_BT24_BCC3, MULT_BT24_BCC6, ang_resl, CAP_BT24);
        Self::with_ori_nside(cart_resl, ori_nside, cart_bound)
    }

    /// Builds a hash instance from an explicit `ori_nside`.
    pub fn with_ori_nside(
        cart_resl: f64,
        ori_nside: u64,
        cart_bound: f64,
    ) -> Result<Self, ConstructionError> {
        let cart_resl = cart_resl / cart_div_bt24_bcc6();
        let cart_nside = (2.0 * cart_bound / cart_resl) as u64;
        if cart_nside > MAX_CART_NSIDE {
            return Err(ConstructionError::TooManyCartCells { requested: cart_nside });
        }
        if ori_nside > CAP_BT24 {
            return Err(ConstructionError::TooManyOriCells { requested: ori_nside });
        }

        let ori_axis_nside = ori_nside + 1;
        let ori_lb = -1.0 / ori_nside as f64;

        let nside = [cart_nside, cart_nside, cart_nside, ori_axis_nside, ori_axis_nside, ori_axis_nside];
        let lb = [-cart_bound, -cart_bound, -cart_bound, ori_lb, ori_lb, ori_lb];
        let ub = [cart_bound, cart_bound, cart_bound, 1.0, 1.0, 1.0];

        Ok(Self {
            ori_axis_nside,
            ori_map: TetracontoctachoronMap::new(),
            grid: BccLattice::new(nside, lb, ub),
        })
    }

    /// Maps a transform to its 64-bit key.
    #[must_use]
    pub fn get_key(&self, x: &Xform) -> u64 {
        let (cell_id, params) = self.ori_map.value_to_params(&x.rotation);
        let params6 = [
            x.translation.x,
            x.translation.y,
            x.translation.z,
            params[0],
            params[1],
            params[2],
        ];

        (u64::from(cell_id) << 59) | self.grid.point_to_flat(&params6)
    }

    /// Recovers the cell-center transform for a key.
    #[must_use]
    pub fn get_center(&self, key: u64) -> Xform {
        let cell_id = (key >> 59) as u8;
        let params6 = self.grid.flat_to_point(key & ((1u64 << 59) - 1));

        let params = [params6[3], params6[4], params6[5]];
        let rotation = self.ori_map.params_to_value(params, cell_id);

        Xform::new(rotation, Vec3::new(params6[0], params6[1], params6[2]))
    }

    /// Total number of distinct keys this instance can produce.
    #[must_use]
    pub fn approx_size(&self) -> u64 {
        self.grid.size() * 24
    }

    /// Approximate count of distinct orientation cells covered by this
    /// instance's `ori_nside`, supplemented from the original source (the
    /// distilled spec documents this table only for the `Quat-BCC7` family).
    ///
    /// The supplemented table only covers `ori_nside` up to
    /// [`super::tables::CAP_BT24_BCC6`]; instances built with a finer
    /// `ori_nside` (the shared selection cap, [`CAP_BT24`], allows up to 62)
    /// report [`NotImplementedError`] here instead of indexing out of
    /// bounds.
    pub fn approx_nori(&self) -> Result<u64, NotImplementedError> {
        NORI_BT24_BCC6
            .get((self.ori_axis_nside - 2) as usize)
            .copied()
            .ok_or_else(|| NotImplementedError::new("ori_nside exceeds the bt24-BCC6 nori table"))
    }

    /// Angular cell width actually achieved (the 4th lattice axis).
    #[must_use]
    pub fn ang_width(&self) -> f64 {
        self.grid.width(3)
    }
}

#[cfg(test)]
#[path = "./bt24_bcc6_tests.rs"]
mod tests;
