//! Bitmask-pruned chain search
//!
//! Explores chains from one starting word with an explicit stack of states.
//! A chain is accepted as soon as it covers every box letter and is never
//! extended past that point. A candidate that adds no new letter is never
//! pushed, so coverage strictly grows along every explored edge and the search
//! always terminates.

use super::cancel::CancelToken;
use super::graph::AdjacencyGraph;
use crate::core::{Alphabet, LetterBox, LetterMask, Solution};
use std::ops::ControlFlow;

/// One pending branch of the search
///
/// States are never modified after creation; extending a chain produces a new
/// state with its own copy of the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    chain: Vec<usize>,
    mask: LetterMask,
    last: u8,
}

impl SearchState {
    /// State for a chain holding only the candidate at `start`
    #[must_use]
    pub fn start(graph: &AdjacencyGraph, start: usize) -> Self {
        let candidate = graph.candidate(start);
        Self {
            chain: vec![start],
            mask: candidate.mask(),
            last: candidate.last(),
        }
    }

    /// New state with `next` appended
    #[must_use]
    pub fn extend(&self, graph: &AdjacencyGraph, next: usize, mask: LetterMask) -> Self {
        let mut chain = Vec::with_capacity(self.chain.len() + 1);
        chain.extend_from_slice(&self.chain);
        chain.push(next);
        Self {
            chain,
            mask,
            last: graph.candidate(next).last(),
        }
    }

    /// Candidate indexes in chain order
    #[inline]
    #[must_use]
    pub fn chain(&self) -> &[usize] {
        &self.chain
    }

    #[inline]
    #[must_use]
    pub const fn mask(&self) -> LetterMask {
        self.mask
    }

    /// Last letter of the most recent word
    #[inline]
    #[must_use]
    pub const fn last(&self) -> u8 {
        self.last
    }
}

/// Counters from one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the stack
    pub explored: usize,
    /// Candidates skipped because they added no new letter
    pub pruned: usize,
    /// Chains dropped for exceeding the chain length bound
    pub too_long: usize,
    /// Solutions emitted
    pub solutions: usize,
    /// Whether the search stopped before the stack was empty
    pub interrupted: bool,
}

impl SearchStats {
    /// Accumulate another search's counters
    pub fn merge(&mut self, other: &Self) {
        self.explored += other.explored;
        self.pruned += other.pruned;
        self.too_long += other.too_long;
        self.solutions += other.solutions;
        self.interrupted |= other.interrupted;
    }
}

/// Finds every covering chain that begins with a given word
pub struct ChainSearcher<'a> {
    graph: &'a AdjacencyGraph,
    alphabet: &'a Alphabet,
    max_chain: usize,
    cancel: Option<&'a CancelToken>,
}

impl<'a> ChainSearcher<'a> {
    #[must_use]
    pub const fn new(graph: &'a AdjacencyGraph, letter_box: &'a LetterBox) -> Self {
        Self {
            graph,
            alphabet: letter_box.alphabet(),
            max_chain: letter_box.max_chain(),
            cancel: None,
        }
    }

    /// Stop early once `cancel` is triggered
    #[must_use]
    pub fn with_cancel(mut self, cancel: &'a CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Search from the candidate at `start`, handing each solution to `emit`
    ///
    /// Returning `ControlFlow::Break` from `emit` ends the search early, as
    /// does a triggered cancel token. Either way the returned stats are marked
    /// interrupted.
    pub fn search<F>(&self, start: usize, mut emit: F) -> SearchStats
    where
        F: FnMut(Solution) -> ControlFlow<()>,
    {
        let mut stats = SearchStats::default();
        let mut stack = vec![SearchState::start(self.graph, start)];

        while let Some(state) = stack.pop() {
            if self.cancel.is_some_and(CancelToken::is_cancelled) {
                stats.interrupted = true;
                break;
            }
            stats.explored += 1;

            if state.chain.len() > self.max_chain {
                stats.too_long += 1;
                continue;
            }

            if self.alphabet.is_complete(state.mask) {
                stats.solutions += 1;
                if emit(self.solution(&state)).is_break() {
                    stats.interrupted = true;
                    break;
                }
                continue;
            }

            for &next in self.graph.following(state.last) {
                let mask = state.mask | self.graph.candidate(next).mask();
                if mask.count() == state.mask.count() {
                    stats.pruned += 1;
                    continue;
                }
                stack.push(state.extend(self.graph, next, mask));
            }
        }

        stats
    }

    /// Collect every solution starting at `start`
    #[must_use]
    pub fn solutions(&self, start: usize) -> Vec<Solution> {
        let mut found = Vec::new();
        self.search(start, |solution| {
            found.push(solution);
            ControlFlow::Continue(())
        });
        found
    }

    fn solution(&self, state: &SearchState) -> Solution {
        Solution::new(
            state
                .chain
                .iter()
                .map(|&index| self.graph.candidate(index).text().to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Trie;
    use crate::solver::PuzzleWalker;

    fn setup(sides: &str, max_chain: usize, dictionary: &[&str]) -> (LetterBox, AdjacencyGraph) {
        let letter_box = LetterBox::parse(&[sides])
            .unwrap()
            .with_max_chain(max_chain);
        let trie: Trie = dictionary.iter().collect();
        let words = PuzzleWalker::new(&letter_box, &trie).words();
        let graph = AdjacencyGraph::new(words, letter_box.alphabet());
        (letter_box, graph)
    }

    fn index_of(graph: &AdjacencyGraph, word: &str) -> usize {
        graph
            .candidates()
            .iter()
            .position(|c| c.text() == word)
            .unwrap()
    }

    fn words(solutions: &[Solution]) -> Vec<Vec<&str>> {
        solutions
            .iter()
            .map(|s| s.words().iter().map(String::as_str).collect())
            .collect()
    }

    const DICTIONARY: &[&str] = &["upholder", "rebuy", "yoga", "rehab", "barely", "abhor"];

    #[test]
    fn finds_three_word_chain() {
        let (letter_box, graph) = setup("rul-eya-gdh-opb", 3, DICTIONARY);
        let searcher = ChainSearcher::new(&graph, &letter_box);
        let found = searcher.solutions(index_of(&graph, "upholder"));
        assert_eq!(words(&found), [["upholder", "rebuy", "yoga"]]);
    }

    #[test]
    fn chain_bound_limits_solutions() {
        let (letter_box, graph) = setup("rul-eya-gdh-opb", 2, DICTIONARY);
        let searcher = ChainSearcher::new(&graph, &letter_box);
        assert!(searcher.solutions(index_of(&graph, "upholder")).is_empty());

        let (letter_box, graph) = setup("rul-eya-gdh-opb", 4, DICTIONARY);
        let searcher = ChainSearcher::new(&graph, &letter_box);
        let solutions = searcher.solutions(index_of(&graph, "upholder"));
        let mut found = words(&solutions);
        found.sort();
        assert_eq!(
            found,
            [
                vec!["upholder", "rebuy", "yoga"],
                vec!["upholder", "rehab", "barely", "yoga"],
            ]
        );
    }

    #[test]
    fn pangram_is_a_one_word_solution() {
        let (letter_box, graph) = setup("abc-def-ghi-jkl", 1, &["adgjbehkcfil", "adg"]);
        let searcher = ChainSearcher::new(&graph, &letter_box);
        let found = searcher.solutions(index_of(&graph, "adgjbehkcfil"));
        assert_eq!(words(&found), [["adgjbehkcfil"]]);
        assert!(searcher.solutions(index_of(&graph, "adg")).is_empty());
    }

    #[test]
    fn covered_chains_are_not_extended() {
        // "adgjbehkcfil" ends in l and "lad" follows it, but the pangram alone
        // already covers the box
        let (letter_box, graph) = setup("abc-def-ghi-jkl", 3, &["adgjbehkcfil", "lad"]);
        let searcher = ChainSearcher::new(&graph, &letter_box);
        let found = searcher.solutions(index_of(&graph, "adgjbehkcfil"));
        assert_eq!(words(&found), [["adgjbehkcfil"]]);
    }

    #[test]
    fn no_progress_words_are_pruned() {
        // "ago" only repeats letters of "yoga", so it never follows it
        let (letter_box, graph) = setup("rul-eya-gdh-opb", 6, &["yoga", "ago", "abhor"]);
        let searcher = ChainSearcher::new(&graph, &letter_box);
        let stats = searcher.search(index_of(&graph, "yoga"), |_| ControlFlow::Continue(()));
        assert_eq!(stats.pruned, 1);
        assert_eq!(stats.explored, 2);
        assert_eq!(stats.solutions, 0);
        assert!(!stats.interrupted);
    }

    #[test]
    fn explored_states_are_bounded() {
        let (letter_box, graph) = setup("rul-eya-gdh-opb", 12, crate::wordlists::SOLUTIONS);
        let searcher = ChainSearcher::new(&graph, &letter_box);
        let bound = graph.len() << letter_box.letter_count();
        for start in 0..graph.len() {
            let stats = searcher.search(start, |_| ControlFlow::Continue(()));
            assert!(stats.explored <= bound);
        }
    }

    #[test]
    fn solutions_satisfy_invariants() {
        let (letter_box, graph) = setup("rul-eya-gdh-opb", 4, crate::wordlists::SOLUTIONS);
        let searcher = ChainSearcher::new(&graph, &letter_box);
        let alphabet = letter_box.alphabet();
        for start in 0..graph.len() {
            for solution in searcher.solutions(start) {
                assert!(solution.len() <= 4);
                assert_eq!(solution.words()[0], graph.candidate(start).text());

                let mask = solution
                    .words()
                    .iter()
                    .fold(LetterMask::EMPTY, |mask, word| mask | alphabet.mask_of(word));
                assert_eq!(mask, alphabet.full());

                for pair in solution.words().windows(2) {
                    assert_eq!(pair[0].as_bytes().last(), pair[1].as_bytes().first());
                }
            }
        }
    }

    #[test]
    fn every_step_adds_a_letter() {
        let (letter_box, graph) = setup("rul-eya-gdh-opb", 4, crate::wordlists::SOLUTIONS);
        let searcher = ChainSearcher::new(&graph, &letter_box);
        let alphabet = letter_box.alphabet();
        for start in 0..graph.len() {
            for solution in searcher.solutions(start) {
                let mut mask = LetterMask::EMPTY;
                for word in solution.words() {
                    let next = mask | alphabet.mask_of(word);
                    assert!(next.count() > mask.count(), "{word} adds nothing in {solution}");
                    mask = next;
                }
            }
        }
    }

    #[test]
    fn emit_break_stops_search() {
        let (letter_box, graph) = setup("rul-eya-gdh-opb", 4, DICTIONARY);
        let searcher = ChainSearcher::new(&graph, &letter_box);
        let mut seen = 0;
        let stats = searcher.search(index_of(&graph, "upholder"), |_| {
            seen += 1;
            ControlFlow::Break(())
        });
        assert_eq!(seen, 1);
        assert!(stats.interrupted);
    }

    #[test]
    fn cancelled_search_explores_nothing() {
        let (letter_box, graph) = setup("rul-eya-gdh-opb", 4, DICTIONARY);
        let cancel = CancelToken::new();
        cancel.cancel();
        let searcher = ChainSearcher::new(&graph, &letter_box).with_cancel(&cancel);
        let stats = searcher.search(index_of(&graph, "upholder"), |_| ControlFlow::Continue(()));
        assert_eq!(stats.explored, 0);
        assert!(stats.interrupted);
    }

    #[test]
    fn stats_merge() {
        let mut total = SearchStats::default();
        total.merge(&SearchStats {
            explored: 3,
            pruned: 2,
            too_long: 1,
            solutions: 1,
            interrupted: false,
        });
        total.merge(&SearchStats {
            explored: 1,
            interrupted: true,
            ..SearchStats::default()
        });
        assert_eq!(total.explored, 4);
        assert_eq!(total.solutions, 1);
        assert!(total.interrupted);
    }

    #[test]
    fn extend_copies_the_chain() {
        let (_, graph) = setup("rul-eya-gdh-opb", 4, DICTIONARY);
        let start = SearchState::start(&graph, index_of(&graph, "upholder"));
        let rebuy = index_of(&graph, "rebuy");
        let next = start.extend(&graph, rebuy, start.mask() | graph.candidate(rebuy).mask());
        assert_eq!(start.chain().len(), 1);
        assert_eq!(next.chain().len(), 2);
        assert_eq!(next.last(), b'y');
    }
}
