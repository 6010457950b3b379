//! Strategic dominance and iterated elimination.
//!
//! Elimination never reshapes the matrix. Removed actions are tracked as an
//! ordered set of labels and turned into a live/dead [`Mask`] for each scan,
//! so a label means the same cell in every round.
mod elimination;
mod eliminated;
mod mask;
mod relation;
mod scan;

pub use elimination::*;
pub use eliminated::*;
pub use mask::*;
pub use relation::*;
pub use scan::*;
