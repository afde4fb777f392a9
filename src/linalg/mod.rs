//! Minimal rotation/translation arithmetic.
//!
//! `spec.md` treats matrix/quaternion arithmetic as an external collaborator
//! ("assumed available"). Rather than pulling in a general-purpose linear
//! algebra crate for the handful of operations the hash variants need, this
//! module hand-rolls them, the way `h3o` hand-rolls its own `Vec2d`/`Vec3d`
//! rather than depending on one.

mod matrix3;
mod quaternion;
mod vec3;
mod xform;

pub use matrix3::Matrix3;
pub use quaternion::Quaternion;
pub use vec3::Vec3;
pub use xform::Xform;
