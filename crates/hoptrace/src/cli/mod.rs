//! CLI command implementations.

pub mod count;
pub mod shortest;
pub mod stats;
pub mod weight;
