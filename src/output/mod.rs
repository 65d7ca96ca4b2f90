//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_graph, print_solution, print_solve_summary, print_wordlists, print_words,
};
