//! Axis-aligned lattices used to quantize real-valued coordinates.

mod bcc;
mod cubic;

pub use bcc::BccLattice;
pub use cubic::CubicLattice;
