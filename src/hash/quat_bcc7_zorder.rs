use crate::dilated::{dilate, undilate};
use crate::error::{ConstructionError, NotImplementedError};
use crate::lattice::BccLattice;
use crate::linalg::{Quaternion, Vec3, Xform};

use super::tables::{
    cart_div_quat_bcc7_zorder, select_ori_nside, CAP_QUAT_BCC7_ZORDER, COVRAD_QUAT_BCC7_ZORDER,
    MAX_CART_NSIDE, MAX_ORI_NSIDE_QUAT_BCC7_ZORDER, MULT_QUAT_BCC7_ZORDER, NORI_QUAT_BCC7,
};

const fn lane_mask(shift: u32) -> u64 {
    let mut mask = 0u64;
    let mut i = 0;
    while i < 6 {
        mask |= 1 << (i * 7 + shift);
        i += 1;
    }
    mask
}

/// Mask covering every key bit occupied by the Cartesian coordinates
/// (the three 7-bit high fields plus the three dilated low-6-bit lanes),
/// complemented: clears cart bits, leaves orientation bits and parity
/// untouched.
const ORI_MASK: u64 = !(0x7Fu64 << 57 | 0x7Fu64 << 50 | 0x7Fu64 << 43
    | lane_mask(1) | lane_mask(2) | lane_mask(3));

/// `Quat-BCC7-Zorder`: the same 7D BCC geometry as [`super::QuatBcc7`], but
/// with the flat index replaced by a Z-order (Morton) interleave of the
/// low-6-bit cart lanes and all four orientation lanes, plus dedicated
/// high-bit fields for the cart coordinates. This layout lets
/// [`cart_shift_key`](Self::cart_shift_key) translate a key's Cartesian
/// part without touching its orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuatBcc7Zorder {
    ori_axis_nside: u64,
    grid: BccLattice<7>,
}

impl QuatBcc7Zorder {
    /// Builds a hash instance from a target Cartesian and angular
    /// resolution.
    pub fn new(cart_resl: f64, ang_resl: f64, cart_bound: f64) -> Result<Self, ConstructionError> {
        let ori_nside = select_ori_nside(
            &COVRAD_QUAT_BCC7_ZORDER,
            MULT_QUAT_BCC7_ZORDER,
            ang_resl,
            CAP_QUAT_BCC7_ZORDER,
        );
        Self::with_ori_nside(cart_resl, ori_nside, cart_bound)
    }

    /// Builds a hash instance from an explicit `ori_nside`.
    pub fn with_ori_nside(
        cart_resl: f64,
        ori_nside: u64,
        cart_bound: f64,
    ) -> Result<Self, ConstructionError> {
        let cart_resl = cart_resl / cart_div_quat_bcc7_zorder();
        let cart_nside = (2.0 * cart_bound / cart_resl) as u64;
        if cart_nside > MAX_CART_NSIDE {
            return Err(ConstructionError::TooManyCartCells { requested: cart_nside });
        }
        if ori_nside > MAX_ORI_NSIDE_QUAT_BCC7_ZORDER {
            return Err(ConstructionError::TooManyOriCells { requested: ori_nside });
        }

        let ori_axis_nside = ori_nside + 1;
        let ori_lb = -1.0 - 2.0 / ori_nside as f64;

        let nside = [
            cart_nside, cart_nside, cart_nside, ori_axis_nside, ori_axis_nside, ori_axis_nside,
            ori_axis_nside,
        ];
        let lb = [-cart_bound, -cart_bound, -cart_bound, ori_lb, ori_lb, ori_lb, ori_lb];
        let ub = [cart_bound, cart_bound, cart_bound, 1.0, 1.0, 1.0, 1.0];

        Ok(Self { ori_axis_nside, grid: BccLattice::new(nside, lb, ub) })
    }

    /// Cell width along the Cartesian axes.
    #[must_use]
    pub fn cart_spacing(&self) -> f64 {
        self.grid.width(0)
    }

    /// Maps a transform to its 64-bit key.
    #[must_use]
    pub fn get_key(&self, x: &Xform) -> u64 {
        let q = x.quaternion();
        let f7 = [x.translation.x, x.translation.y, x.translation.z, q.w, q.x, q.y, q.z];
        let (i7, odd) = self.grid.get_indices(&f7);

        let mut key = u64::from(odd);
        key |= (i7[0] >> 6) << 57;
        key |= (i7[1] >> 6) << 50;
        key |= (i7[2] >> 6) << 43;
        key |= dilate::<7>(i7[0] & 63) << 1;
        key |= dilate::<7>(i7[1] & 63) << 2;
        key |= dilate::<7>(i7[2] & 63) << 3;
        key |= dilate::<7>(i7[3]) << 4;
        key |= dilate::<7>(i7[4]) << 5;
        key |= dilate::<7>(i7[5]) << 6;
        key |= dilate::<7>(i7[6]) << 7;
        key
    }

    /// Recovers the cell-center transform for a key.
    #[must_use]
    pub fn get_center(&self, key: u64) -> Xform {
        let odd = key & 1 != 0;
        let i7 = [
            (undilate::<7>(key >> 1) & 63) | ((key >> 57) & 127) << 6,
            (undilate::<7>(key >> 2) & 63) | ((key >> 50) & 127) << 6,
            (undilate::<7>(key >> 3) & 63) | ((key >> 43) & 127) << 6,
            undilate::<7>(key >> 4) & 63,
            undilate::<7>(key >> 5) & 63,
            undilate::<7>(key >> 6) & 63,
            undilate::<7>(key >> 7) & 63,
        ];

        let f7 = self.grid.get_center(&i7, odd);
        let q = Quaternion::new(f7[3], f7[4], f7[5], f7[6]).normalize();
        Xform::from_quat_translation(q, Vec3::new(f7[0], f7[1], f7[2]))
    }

    /// Returns `key` with its Cartesian part shifted by `(dx, dy, dz)` cart
    /// cells, leaving the orientation part and parity untouched.
    #[must_use]
    pub fn cart_shift_key(&self, key: u64, dx: i64, dy: i64, dz: i64) -> u64 {
        let x = (undilate::<7>(key >> 1) & 63) | ((key >> 57) & 127) << 6;
        let y = (undilate::<7>(key >> 2) & 63) | ((key >> 50) & 127) << 6;
        let z = (undilate::<7>(key >> 3) & 63) | ((key >> 43) & 127) << 6;

        let x = (x as i64 + dx) as u64;
        let y = (y as i64 + dy) as u64;
        let z = (z as i64 + dz) as u64;

        let mut key = key & ORI_MASK;
        key |= (x >> 6) << 57 | dilate::<7>(x & 63) << 1;
        key |= (y >> 6) << 50 | dilate::<7>(y & 63) << 2;
        key |= (z >> 6) << 43 | dilate::<7>(z & 63) << 3;
        key
    }

    /// Total number of distinct keys this instance can produce.
    #[must_use]
    pub fn approx_size(&self) -> u64 {
        self.grid.size()
    }

    /// Approximate count of distinct orientation cells covered by this
    /// instance's `ori_nside`.
    pub fn approx_nori(&self) -> Result<u64, NotImplementedError> {
        Ok(NORI_QUAT_BCC7[(self.ori_axis_nside - 2) as usize])
    }

    /// Angular cell width actually achieved (the 4th lattice axis).
    #[must_use]
    pub fn ang_width(&self) -> f64 {
        self.grid.width(3)
    }
}

#[cfg(test)]
#[path = "./quat_bcc7_zorder_tests.rs"]
mod tests;
