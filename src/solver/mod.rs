//! Letter Boxed solving algorithms
//!
//! Candidate discovery, the adjacency graph, the chain search, and the worker
//! pool that runs it.

mod cancel;
mod engine;
pub mod graph;
pub mod pool;
pub mod search;
pub mod walker;

pub use cancel::CancelToken;
pub use crossbeam_channel::RecvTimeoutError;
pub use engine::Solver;
pub use graph::{AdjacencyGraph, Candidate};
pub use pool::{OUTPUT_CAPACITY, PoolError, PoolReport, SolutionStream, SolverPool};
pub use search::{ChainSearcher, SearchState, SearchStats};
pub use walker::PuzzleWalker;
