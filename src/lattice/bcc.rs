/// An `N`-dimensional body-centered-cubic lattice over an axis-aligned box.
///
/// The lattice has two interleaved sublattices: the *even* sublattice with
/// integer coordinates, and the *odd* sublattice offset by `½` on every
/// axis. The nearest lattice point to any query is always one of the two
/// candidates (the containing even cell's corner, or its body center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BccLattice<const N: usize> {
    nside: [u64; N],
    lb: [f64; N],
    ub: [f64; N],
    width: [f64; N],
}

impl<const N: usize> BccLattice<N> {
    /// Builds a new lattice with `nside[i]` cells on axis `i`, spanning
    /// `[lb[i], ub[i]]`.
    #[must_use]
    pub fn new(nside: [u64; N], lb: [f64; N], ub: [f64; N]) -> Self {
        let mut width = [0.; N];
        for i in 0..N {
            width[i] = (ub[i] - lb[i]) / nside[i] as f64;
        }
        Self { nside, lb, ub, width }
    }

    /// Cell width on axis `i`.
    #[must_use]
    pub const fn width(&self, axis: usize) -> f64 {
        self.width[axis]
    }

    /// Number of cells on axis `i`.
    #[must_use]
    pub const fn nside(&self, axis: usize) -> u64 {
        self.nside[axis]
    }

    /// Total number of lattice points (both sublattices) in the box.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.nside.iter().product::<u64>() * 2
    }

    /// Finds the nearest lattice point to `point`, returning its index
    /// vector and a parity bit (`false` = even sublattice, `true` = odd).
    ///
    /// Points outside the box clamp to the nearest boundary cell.
    #[must_use]
    pub fn get_indices(&self, point: &[f64; N]) -> ([u64; N], bool) {
        let mut u = [0.; N];
        for i in 0..N {
            let lb_i = self.lb[i];
            let ub_i = self.ub[i];
            let clamped = point[i].clamp(lb_i.min(ub_i), lb_i.max(ub_i));
            u[i] = (clamped - lb_i) / self.width[i] - 0.5;
        }

        let mut even = [0i64; N];
        let mut odd = [0i64; N];
        let mut even_dist = 0.;
        let mut odd_dist = 0.;
        for i in 0..N {
            let e = u[i].round();
            let o = u[i].floor();
            even[i] = e as i64;
            odd[i] = o as i64;
            let de = u[i] - e;
            let doo = u[i] - (o + 0.5);
            even_dist += de * de;
            odd_dist += doo * doo;
        }

        let (chosen, parity) =
            if even_dist <= odd_dist { (even, false) } else { (odd, true) };

        let mut index = [0u64; N];
        for i in 0..N {
            let max = self.nside[i] as i64 - 1;
            index[i] = chosen[i].clamp(0, max.max(0)) as u64;
        }
        (index, parity)
    }

    /// Returns the cell center for a given index vector and parity.
    #[must_use]
    pub fn get_center(&self, index: &[u64; N], parity: bool) -> [f64; N] {
        let mut point = [0.; N];
        let offset = if parity { 1.0 } else { 0.0 };
        for i in 0..N {
            point[i] =
                self.lb[i] + self.width[i] * (index[i] as f64 + 0.5 + 0.5 * offset);
        }
        point
    }

    /// Packs an index vector and parity into a single flat integer, using a
    /// mixed-radix encoding (axis 0 varies fastest, parity is the lowest
    /// bit). This is the invertible bijection used by the flat (non
    /// Z-order) `XformHash` variants to key a BCC lattice directly.
    #[must_use]
    pub fn flat_index(&self, index: &[u64; N], parity: bool) -> u64 {
        let mut flat = u64::from(parity);
        let mut stride = 2u64;
        for i in 0..N {
            flat += index[i] * stride;
            stride *= self.nside[i];
        }
        flat
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    #[must_use]
    pub fn from_flat(&self, flat: u64) -> ([u64; N], bool) {
        let parity = flat & 1 != 0;
        let mut rem = flat >> 1;
        let mut index = [0u64; N];
        for i in 0..N {
            index[i] = rem % self.nside[i];
            rem /= self.nside[i];
        }
        (index, parity)
    }

    /// Maps a point directly to its flat key (`get_indices` then
    /// `flat_index`).
    #[must_use]
    pub fn point_to_flat(&self, point: &[f64; N]) -> u64 {
        let (index, parity) = self.get_indices(point);
        self.flat_index(&index, parity)
    }

    /// Maps a flat key directly to its cell center (`from_flat` then
    /// `get_center`).
    #[must_use]
    pub fn flat_to_point(&self, flat: u64) -> [f64; N] {
        let (index, parity) = self.from_flat(flat);
        self.get_center(&index, parity)
    }
}

#[cfg(test)]
#[path = "./bcc_tests.rs"]
mod tests;
