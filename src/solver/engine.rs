//! Main Letter Boxed solver interface

use super::cancel::CancelToken;
use super::graph::AdjacencyGraph;
use super::pool::{PoolError, SolutionStream, SolverPool};
use super::walker::PuzzleWalker;
use crate::core::{LetterBox, Solution, Trie};
use log::debug;

/// Main Letter Boxed solver
///
/// Owns the dictionary trie; each call builds the candidate graph for one box
/// and hands it to a fresh worker pool.
pub struct Solver {
    trie: Trie,
}

impl Solver {
    /// Create a solver over a dictionary
    ///
    /// # Examples
    /// ```
    /// use letterboxed::core::LetterBox;
    /// use letterboxed::solver::Solver;
    ///
    /// let solver = Solver::new(["upholder", "rebuy", "yoga"]);
    /// let letter_box = LetterBox::parse(&["rul-eya-gdh-opb"]).unwrap().with_max_chain(3);
    ///
    /// let solutions = solver.solutions(&letter_box).unwrap();
    /// assert_eq!(solutions.len(), 1);
    /// assert_eq!(solutions[0].to_string(), "upholder rebuy yoga");
    /// ```
    pub fn new<I, S>(dictionary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_trie(dictionary.into_iter().collect())
    }

    #[must_use]
    pub const fn from_trie(trie: Trie) -> Self {
        Self { trie }
    }

    #[inline]
    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Dictionary words the box can spell
    #[must_use]
    pub fn candidates(&self, letter_box: &LetterBox) -> Vec<String> {
        PuzzleWalker::new(letter_box, &self.trie).words()
    }

    /// Candidate words indexed by first letter
    #[must_use]
    pub fn graph(&self, letter_box: &LetterBox) -> AdjacencyGraph {
        let graph = AdjacencyGraph::new(self.candidates(letter_box), letter_box.alphabet());
        debug!("{} candidate words for {letter_box}", graph.len());
        graph
    }

    /// Start searching and stream solutions as they are found
    ///
    /// # Errors
    /// Returns `PoolError::Spawn` if the worker pool cannot be started.
    pub fn solve(&self, letter_box: &LetterBox) -> Result<SolutionStream, PoolError> {
        self.solve_with_cancel(letter_box, CancelToken::new())
    }

    /// Like [`Solver::solve`], stopping early once `cancel` is triggered
    ///
    /// # Errors
    /// Returns `PoolError::Spawn` if the worker pool cannot be started.
    pub fn solve_with_cancel(
        &self,
        letter_box: &LetterBox,
        cancel: CancelToken,
    ) -> Result<SolutionStream, PoolError> {
        SolverPool::new(self.graph(letter_box), letter_box.clone())
            .with_cancel(cancel)
            .spawn()
    }

    /// Run a search to completion and collect every solution
    ///
    /// # Errors
    /// Returns `PoolError` if the pool cannot start or a worker fails.
    pub fn solutions(&self, letter_box: &LetterBox) -> Result<Vec<Solution>, PoolError> {
        let mut stream = self.solve(letter_box)?;
        let found = stream.by_ref().collect();
        stream.finish()?;
        Ok(found)
    }
}
