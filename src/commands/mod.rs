//! Command implementations

pub mod inspect;
pub mod solve;

pub use inspect::{GraphListing, WordListing, list_graph, list_words};
pub use solve::{SolveConfig, SolveSummary, StopReason, run_solve};
