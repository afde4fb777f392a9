//! `xform-hash` error types.

mod construction;
mod not_implemented;

pub use construction::ConstructionError;
pub use not_implemented::NotImplementedError;
