//! Solve command
//!
//! Streams solutions for a box, stopping early on a solution limit, a timeout
//! or cancellation, and summarises the run.

use crate::core::{LetterBox, Solution};
use crate::solver::{CancelToken, PoolError, PoolReport, RecvTimeoutError, Solver, SolverPool};
use log::info;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a solve run
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    /// Stop after this many solutions
    pub limit: Option<usize>,
    /// Stop once this much time has passed
    pub timeout: Option<Duration>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: None,
            timeout: None,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Why a run ended before the search space was exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Limit,
    Timeout,
    Cancelled,
}

/// Result of a solve run
#[derive(Debug, Clone)]
pub struct SolveSummary {
    pub letter_box: String,
    pub candidates: usize,
    pub solutions: usize,
    /// Solution counts keyed by number of words
    pub by_length: BTreeMap<usize, usize>,
    /// Fewest letters typed by any solution found
    pub shortest: Option<Solution>,
    pub duration: Duration,
    pub stopped: Option<StopReason>,
    pub report: PoolReport,
}

impl SolveSummary {
    /// Whether every solution was found
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.stopped.is_none()
    }
}

/// Solve a box, handing each solution to `on_solution` as it arrives
///
/// # Errors
///
/// Returns `PoolError` if the worker pool cannot be started or any of its
/// workers fail.
pub fn run_solve<F>(
    solver: &Solver,
    letter_box: &LetterBox,
    config: SolveConfig,
    cancel: &CancelToken,
    mut on_solution: F,
) -> Result<SolveSummary, PoolError>
where
    F: FnMut(&Solution),
{
    let start = Instant::now();
    let deadline = config.timeout.map(|timeout| start + timeout);

    let graph = solver.graph(letter_box);
    let candidates = graph.len();
    let mut stream = SolverPool::new(graph, letter_box.clone())
        .with_cancel(cancel.clone())
        .spawn()?;

    let mut solutions = 0;
    let mut by_length: BTreeMap<usize, usize> = BTreeMap::new();
    let mut shortest: Option<Solution> = None;
    let mut stopped = None;

    loop {
        if config.limit.is_some_and(|limit| solutions >= limit) {
            stopped = Some(StopReason::Limit);
            break;
        }
        // recv_deadline still returns buffered solutions once the deadline has passed
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            stopped = Some(StopReason::Timeout);
            break;
        }

        let next = match deadline {
            Some(deadline) => stream.recv_deadline(deadline),
            None => stream.next().ok_or(RecvTimeoutError::Disconnected),
        };
        let solution = match next {
            Ok(solution) => solution,
            Err(RecvTimeoutError::Timeout) => {
                stopped = Some(StopReason::Timeout);
                break;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };

        solutions += 1;
        *by_length.entry(solution.len()).or_insert(0) += 1;
        on_solution(&solution);
        if shortest
            .as_ref()
            .is_none_or(|best| solution.letters() < best.letters())
        {
            shortest = Some(solution);
        }
    }

    if stopped.is_some() {
        stream.cancel();
    }
    let report = stream.finish()?;
    if stopped.is_none() && report.cancelled {
        stopped = Some(StopReason::Cancelled);
    }

    let duration = start.elapsed();
    info!("{solutions} solutions for {letter_box} in {duration:.2?}");

    Ok(SolveSummary {
        letter_box: letter_box.to_string(),
        candidates,
        solutions,
        by_length,
        shortest,
        duration,
        stopped,
        report,
    })
}
