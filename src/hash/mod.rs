//! The seven `XformHash` variants: compositions of a lattice (or pair of
//! lattices) and, where applicable, the 24-cell orientation chart, exposing
//! `get_key` / `get_center` / `approx_size` / `approx_nori` / `ang_width`.
//!
//! The variants are siblings sharing geometry primitives, not a hierarchy;
//! each is free-standing with its own constructor and resolution constants.

mod bt24_bcc3;
mod bt24_bcc3_zorder;
mod bt24_bcc6;
mod bt24_cubic_zorder;
mod quat_bcc7;
mod quat_bcc7_zorder;
mod quatgrid_cubic;
mod tables;

pub use bt24_bcc3::BccThreeFlat;
pub use bt24_bcc3_zorder::BccThreeZorder;
pub use bt24_bcc6::BccSix;
pub use bt24_cubic_zorder::CubicZorder;
pub use quat_bcc7::QuatBcc7;
pub use quat_bcc7_zorder::QuatBcc7Zorder;
pub use quatgrid_cubic::QuatgridCubic;
