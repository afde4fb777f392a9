use super::Matrix3;
use std::ops::Mul;

/// Unit quaternion `(w, x, y, z)` representing a 3D rotation.
///
/// `q` and `-q` represent the same rotation (double cover of SO(3)).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    /// Scalar (real) part.
    pub w: f64,
    /// `i` component.
    pub x: f64,
    /// `j` component.
    pub y: f64,
    /// `k` component.
    pub z: f64,
}

impl Quaternion {
    /// Initializes a new quaternion from its four components (not
    /// normalized).
    #[must_use]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1., 0., 0., 0.)
    }

    /// Builds the unit quaternion corresponding to a proper orthonormal
    /// rotation matrix.
    ///
    /// Uses the standard branch-on-trace construction (Shepperd's method) to
    /// stay numerically stable regardless of the rotation angle.
    #[must_use]
    pub fn from_rotation_matrix(m: &Matrix3) -> Self {
        let trace = m.get(0, 0) + m.get(1, 1) + m.get(2, 2);

        if trace > 0. {
            let s = 0.5 / (trace + 1.).sqrt();
            Self::new(
                0.25 / s,
                (m.get(2, 1) - m.get(1, 2)) * s,
                (m.get(0, 2) - m.get(2, 0)) * s,
                (m.get(1, 0) - m.get(0, 1)) * s,
            )
        } else if m.get(0, 0) > m.get(1, 1) && m.get(0, 0) > m.get(2, 2) {
            let s = 2. * (1. + m.get(0, 0) - m.get(1, 1) - m.get(2, 2)).sqrt();
            Self::new(
                (m.get(2, 1) - m.get(1, 2)) / s,
                0.25 * s,
                (m.get(0, 1) + m.get(1, 0)) / s,
                (m.get(0, 2) + m.get(2, 0)) / s,
            )
        } else if m.get(1, 1) > m.get(2, 2) {
            let s = 2. * (1. + m.get(1, 1) - m.get(0, 0) - m.get(2, 2)).sqrt();
            Self::new(
                (m.get(0, 2) - m.get(2, 0)) / s,
                (m.get(0, 1) + m.get(1, 0)) / s,
                0.25 * s,
                (m.get(1, 2) + m.get(2, 1)) / s,
            )
        } else {
            let s = 2. * (1. + m.get(2, 2) - m.get(0, 0) - m.get(1, 1)).sqrt();
            Self::new(
                (m.get(1, 0) - m.get(0, 1)) / s,
                (m.get(0, 2) + m.get(2, 0)) / s,
                (m.get(1, 2) + m.get(2, 1)) / s,
                0.25 * s,
            )
        }
    }

    /// Converts this quaternion (assumed unit-norm) to a rotation matrix.
    #[must_use]
    pub fn to_rotation_matrix(self) -> Matrix3 {
        let Self { w, x, y, z } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix3::new([
            [1. - 2. * (yy + zz), 2. * (xy - wz), 2. * (xz + wy)],
            [2. * (xy + wz), 1. - 2. * (xx + zz), 2. * (yz - wx)],
            [2. * (xz - wy), 2. * (yz + wx), 1. - 2. * (xx + yy)],
        ])
    }

    /// Squared norm of this quaternion.
    #[must_use]
    pub fn norm_squared(self) -> f64 {
        self.w.mul_add(
            self.w,
            self.x.mul_add(self.x, self.y.mul_add(self.y, self.z * self.z)),
        )
    }

    /// Returns this quaternion scaled to unit norm.
    #[must_use]
    pub fn normalize(self) -> Self {
        let inv_norm = 1. / self.norm_squared().sqrt();
        Self::new(
            self.w * inv_norm,
            self.x * inv_norm,
            self.y * inv_norm,
            self.z * inv_norm,
        )
    }

    /// Conjugate of this quaternion. For a unit quaternion this is also its
    /// inverse.
    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Dot product between two quaternions, treated as 4-vectors.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.w.mul_add(
            other.w,
            self.x.mul_add(
                other.x,
                self.y.mul_add(other.y, self.z * other.z),
            ),
        )
    }

    /// Folds this quaternion into the positive-`w` hemisphere: `q` and `-q`
    /// represent the same rotation, this picks the unique representative
    /// with `w >= 0`.
    #[must_use]
    pub const fn to_positive_hemisphere(self) -> Self {
        if self.w < 0. {
            Self::new(-self.w, -self.x, -self.y, -self.z)
        } else {
            self
        }
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product: composes two rotations (`self` applied after
    /// `rhs`).
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w
                - self.x * rhs.x
                - self.y * rhs.y
                - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z
                - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z
                + self.y * rhs.w
                + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x
                + self.z * rhs.w,
        )
    }
}

#[cfg(test)]
#[path = "./quaternion_tests.rs"]
mod tests;
