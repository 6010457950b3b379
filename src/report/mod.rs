//! Structured results of every analysis, kept apart from their rendering.
mod report;

pub use report::*;
