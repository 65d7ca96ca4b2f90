//! Letter Boxed Solver
//!
//! Finds chains of dictionary words that use every letter of a Letter Boxed
//! puzzle. Each word is spelled by hopping between the box's four sides, and
//! each word starts with the letter that ended the one before.
//!
//! # Quick Start
//!
//! ```rust
//! use letterboxed::core::LetterBox;
//! use letterboxed::solver::Solver;
//! use letterboxed::wordlists::SOLUTIONS;
//!
//! let solver = Solver::new(SOLUTIONS);
//! let letter_box = LetterBox::parse(&["rul-eya-gdh-opb"]).unwrap().with_max_chain(3);
//!
//! for solution in solver.solve(&letter_box).unwrap() {
//!     println!("{solution}");
//! }
//! ```

// Core domain types
pub mod core;

// Search pipeline
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
