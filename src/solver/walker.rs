//! Candidate word discovery
//!
//! Walks the dictionary trie and the box together: every step appends a letter
//! from a side other than the one just used, and a branch is abandoned as soon
//! as the trie has no node for the extended prefix.

use crate::core::{LetterBox, Trie};
use log::warn;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

/// Enumerates the dictionary words a box can spell
pub struct PuzzleWalker<'a> {
    letter_box: &'a LetterBox,
    trie: &'a Trie,
}

impl<'a> PuzzleWalker<'a> {
    #[must_use]
    pub const fn new(letter_box: &'a LetterBox, trie: &'a Trie) -> Self {
        Self { letter_box, trie }
    }

    /// Every spellable word at least as long as the box minimum
    ///
    /// Starting positions are walked in parallel on at most the box's
    /// concurrency degree of threads; results are concatenated in side and
    /// letter order.
    ///
    /// # Examples
    /// ```
    /// use letterboxed::core::{LetterBox, Trie};
    /// use letterboxed::solver::PuzzleWalker;
    ///
    /// let letter_box = LetterBox::parse(&["rul-eya-gdh-opb"]).unwrap();
    /// let trie: Trie = ["yoga", "rugby", "upholder"].into_iter().collect();
    ///
    /// let mut words = PuzzleWalker::new(&letter_box, &trie).words();
    /// words.sort();
    /// assert_eq!(words, ["upholder", "yoga"]);
    /// ```
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let threads = self.letter_box.concurrency();
        if threads == rayon::current_num_threads() {
            return self.walk();
        }
        match ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(|| self.walk()),
            Err(err) => {
                warn!("falling back to the global thread pool: {err}");
                self.walk()
            }
        }
    }

    fn walk(&self) -> Vec<String> {
        let starts: Vec<(usize, u8)> = self
            .letter_box
            .sides()
            .iter()
            .enumerate()
            .flat_map(|(side, letters)| letters.iter().map(move |&letter| (side, letter)))
            .collect();

        starts
            .par_iter()
            .flat_map_iter(|&(side, letter)| self.words_from(side, letter))
            .collect()
    }

    /// Spellable words starting with `letter`, which sits on `side`
    #[must_use]
    pub fn words_from(&self, side: usize, letter: u8) -> Vec<String> {
        let mut found = Vec::new();
        if let Some(node) = self.trie.child(letter) {
            let mut prefix = vec![letter];
            self.extend(node, &mut prefix, side, &mut found);
        }
        found
    }

    fn extend(&self, node: &Trie, prefix: &mut Vec<u8>, side: usize, found: &mut Vec<String>) {
        for (next_side, letters) in self.letter_box.sides().iter().enumerate() {
            if next_side == side {
                continue;
            }
            for &letter in letters {
                let Some(child) = node.child(letter) else {
                    continue;
                };
                prefix.push(letter);
                if child.is_word() && prefix.len() >= self.letter_box.min_length() {
                    found.push(prefix.iter().copied().map(char::from).collect());
                }
                if child.is_prefix() {
                    self.extend(child, prefix, next_side, found);
                }
                prefix.pop();
            }
        }
    }
}
