//! Core domain types for Letter Boxed
//!
//! This module contains the fundamental domain types. Everything here is pure,
//! infallible once constructed, and safe to share between threads.

mod letter_box;
mod mask;
mod solution;
mod trie;

pub use letter_box::{BoxError, DEFAULT_MAX_CHAIN, DEFAULT_MIN_LENGTH, LetterBox, SIDES};
pub use mask::{Alphabet, LetterMask};
pub use solution::Solution;
pub use trie::Trie;
