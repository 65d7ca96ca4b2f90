//! A finished word chain

use std::fmt;

/// A chain of words covering every letter of a box
///
/// Consecutive words share a letter: each word starts with the last letter of
/// the word before it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Solution {
    words: Vec<String>,
}

impl Solution {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// The words in chain order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the chain
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total letters typed across the chain
    #[must_use]
    pub fn letters(&self) -> usize {
        self.words.iter().map(String::len).sum()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

impl From<Vec<String>> for Solution {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}
