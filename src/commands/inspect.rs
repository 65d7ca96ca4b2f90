//! Candidate inspection commands
//!
//! Lists the words a box can spell and how they link up, without searching
//! for chains.

use crate::core::LetterBox;
use crate::solver::Solver;
use std::collections::{BTreeMap, BTreeSet};

/// Spellable words for a box
#[derive(Debug, Clone)]
pub struct WordListing {
    pub letter_box: String,
    /// Sorted alphabetically
    pub words: Vec<String>,
}

impl WordListing {
    /// Longest candidate, ties broken alphabetically
    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words
            .iter()
            .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| b.cmp(a)))
            .map(String::as_str)
    }
}

/// Words grouped by the letters they join
#[derive(Debug, Clone)]
pub struct GraphListing {
    pub letter_box: String,
    pub candidates: usize,
    /// First letter, then last letter, then the sorted words joining them
    pub links: BTreeMap<char, BTreeMap<char, Vec<String>>>,
}

impl GraphListing {
    /// Words starting with `first` and ending with `last`
    #[must_use]
    pub fn between(&self, first: char, last: char) -> &[String] {
        self.links
            .get(&first)
            .and_then(|ends| ends.get(&last))
            .map_or(&[], Vec::as_slice)
    }
}

/// Every candidate word for a box
#[must_use]
pub fn list_words(solver: &Solver, letter_box: &LetterBox) -> WordListing {
    let mut words = solver.candidates(letter_box);
    words.sort_unstable();
    WordListing {
        letter_box: letter_box.to_string(),
        words,
    }
}

/// Candidate words grouped by first and last letter
#[must_use]
pub fn list_graph(solver: &Solver, letter_box: &LetterBox) -> GraphListing {
    let graph = solver.graph(letter_box);
    let mut links: BTreeMap<char, BTreeMap<char, Vec<String>>> = BTreeMap::new();

    for (first, words) in graph.buckets() {
        let lasts: BTreeSet<u8> = words
            .iter()
            .filter_map(|word| word.as_bytes().last().copied())
            .collect();
        let ends = links.entry(char::from(first)).or_default();
        for last in lasts {
            let mut joining: Vec<String> = graph
                .between(first, last)
                .map(|candidate| candidate.text().to_string())
                .collect();
            joining.sort_unstable();
            ends.insert(char::from(last), joining);
        }
    }

    GraphListing {
        letter_box: letter_box.to_string(),
        candidates: graph.len(),
        links,
    }
}
