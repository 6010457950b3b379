//! Positional action labels.
//!
//! Labels are never stored alongside the matrix. They are recomputed from
//! an index, an axis, and the axis sizes, so encode and decode stay in sync
//! as long as both sides agree on the sizes.
mod axis;
mod label;
mod outcome;
mod shape;

pub use axis::*;
pub use label::*;
pub use outcome::*;
pub use shape::*;
