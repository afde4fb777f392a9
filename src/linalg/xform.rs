use super::{Matrix3, Quaternion, Vec3};

/// A rigid transform in SE(3): a proper orthonormal rotation composed with a
/// 3D translation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xform {
    /// The rotational part.
    pub rotation: Matrix3,
    /// The translational part.
    pub translation: Vec3,
}

impl Xform {
    /// Initializes a new transform from a rotation matrix and a translation.
    #[must_use]
    pub const fn new(rotation: Matrix3, translation: Vec3) -> Self {
        Self { rotation, translation }
    }

    /// The identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(Matrix3::identity(), Vec3::zero())
    }

    /// Builds a transform from a unit quaternion and a translation.
    #[must_use]
    pub fn from_quat_translation(q: Quaternion, translation: Vec3) -> Self {
        Self::new(q.to_rotation_matrix(), translation)
    }

    /// The unit quaternion representing this transform's rotation.
    #[must_use]
    pub fn quaternion(&self) -> Quaternion {
        Quaternion::from_rotation_matrix(&self.rotation)
    }

    /// Angular distance, in radians, between the rotations of two
    /// transforms, via the quaternion metric `2*acos(|q1 . q2|)`.
    #[must_use]
    pub fn angular_distance(&self, other: &Self) -> f64 {
        let dot = self.quaternion().dot(other.quaternion()).abs().min(1.);

        2. * dot.acos()
    }
}

#[cfg(test)]
#[path = "./xform_tests.rs"]
mod tests;
