//! Candidate words indexed by first letter
//!
//! The chain search asks one question over and over: which words can follow a
//! word ending in letter L? Bucketing candidates by first letter answers it
//! with a single lookup.

use crate::core::{Alphabet, LetterMask};
use rustc_hash::FxHashMap;

/// A candidate word with its precomputed letter mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    text: String,
    mask: LetterMask,
    first: u8,
    last: u8,
}

impl Candidate {
    /// Returns `None` for the empty word
    #[must_use]
    pub fn new(text: String, alphabet: &Alphabet) -> Option<Self> {
        let (&first, &last) = (text.as_bytes().first()?, text.as_bytes().last()?);
        let mask = alphabet.mask_of(&text);
        Some(Self {
            text,
            mask,
            first,
            last,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn mask(&self) -> LetterMask {
        self.mask
    }

    #[inline]
    #[must_use]
    pub const fn first(&self) -> u8 {
        self.first
    }

    #[inline]
    #[must_use]
    pub const fn last(&self) -> u8 {
        self.last
    }
}

/// Candidate words bucketed by first letter
///
/// Buckets hold indexes into the candidate list, which keep search states
/// small and cheap to copy.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    candidates: Vec<Candidate>,
    buckets: FxHashMap<u8, Vec<usize>>,
}

impl AdjacencyGraph {
    /// Build the graph from walker output
    ///
    /// Empty strings are skipped.
    ///
    /// # Examples
    /// ```
    /// use letterboxed::core::Alphabet;
    /// use letterboxed::solver::AdjacencyGraph;
    ///
    /// let alphabet = Alphabet::new(b"abcdefghijklmnopqrstuvwxyz");
    /// let words = vec!["yoga".to_string(), "yodel".to_string(), "abhor".to_string()];
    /// let graph = AdjacencyGraph::new(words, &alphabet);
    ///
    /// assert_eq!(graph.following(b'y').len(), 2);
    /// assert!(graph.following(b'z').is_empty());
    /// ```
    #[must_use]
    pub fn new(words: Vec<String>, alphabet: &Alphabet) -> Self {
        let candidates: Vec<Candidate> = words
            .into_iter()
            .filter_map(|word| Candidate::new(word, alphabet))
            .collect();

        let mut buckets: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (index, candidate) in candidates.iter().enumerate() {
            buckets.entry(candidate.first).or_default().push(index);
        }

        Self {
            candidates,
            buckets,
        }
    }

    /// All candidates, in walker order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Candidate at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of range
    #[inline]
    #[must_use]
    pub fn candidate(&self, index: usize) -> &Candidate {
        &self.candidates[index]
    }

    /// Indexes of the candidates starting with `letter`
    #[inline]
    #[must_use]
    pub fn following(&self, letter: u8) -> &[usize] {
        self.buckets
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Candidates that start with `first` and end with `last`
    pub fn between(&self, first: u8, last: u8) -> impl Iterator<Item = &Candidate> {
        self.following(first)
            .iter()
            .map(|&index| &self.candidates[index])
            .filter(move |candidate| candidate.last == last)
    }

    /// Buckets in letter order, each with its words
    #[must_use]
    pub fn buckets(&self) -> Vec<(u8, Vec<&str>)> {
        let mut buckets: Vec<(u8, Vec<&str>)> = self
            .buckets
            .iter()
            .map(|(&letter, indexes)| {
                let words = indexes
                    .iter()
                    .map(|&index| self.candidates[index].text())
                    .collect();
                (letter, words)
            })
            .collect();
        buckets.sort_unstable_by_key(|&(letter, _)| letter);
        buckets
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
