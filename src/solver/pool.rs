//! Worker pool that streams solutions
//!
//! A supervisor thread seeds a queue with every candidate index and closes it,
//! then runs a fixed number of scoped workers. Each worker takes starting
//! words off the queue and forwards every solution it finds into a bounded
//! output channel. The output channel closes once every worker has been
//! joined, which ends the consumer's iteration.

use super::cancel::CancelToken;
use super::graph::AdjacencyGraph;
use super::search::{ChainSearcher, SearchStats};
use crate::core::{LetterBox, Solution};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded, unbounded};
use log::{debug, error, info};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use std::{fmt, io};

/// Default number of solutions buffered before workers block
pub const OUTPUT_CAPACITY: usize = 1024;

/// Summary of a finished pool run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolReport {
    /// Workers requested
    pub workers: usize,
    /// Workers that panicked or could not be started
    pub failed: usize,
    /// Starting words taken off the queue
    pub started: usize,
    /// Search counters summed over every worker
    pub search: SearchStats,
    /// Whether the run was cancelled
    pub cancelled: bool,
}

/// Error type for pool failures
#[derive(Debug)]
pub enum PoolError {
    Spawn(io::Error),
    WorkersFailed { failed: usize, report: PoolReport },
    SupervisorPanicked,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(err) => write!(f, "failed to start solver pool: {err}"),
            Self::WorkersFailed { failed, report } => write!(
                f,
                "{failed} of {} workers failed, results are incomplete",
                report.workers
            ),
            Self::SupervisorPanicked => write!(f, "solver pool supervisor panicked"),
        }
    }
}

impl std::error::Error for PoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct WorkerReport {
    started: usize,
    search: SearchStats,
}

/// Fixed-size pool running one chain search per candidate word
pub struct SolverPool {
    graph: Arc<AdjacencyGraph>,
    letter_box: Arc<LetterBox>,
    workers: usize,
    capacity: usize,
    cancel: CancelToken,
    #[cfg(test)]
    panic_on: Option<usize>,
}

impl SolverPool {
    /// Pool sized by the box's concurrency degree
    #[must_use]
    pub fn new(graph: AdjacencyGraph, letter_box: LetterBox) -> Self {
        Self {
            workers: letter_box.concurrency(),
            graph: Arc::new(graph),
            letter_box: Arc::new(letter_box),
            capacity: OUTPUT_CAPACITY,
            cancel: CancelToken::new(),
            #[cfg(test)]
            panic_on: None,
        }
    }

    /// Set how many solutions may wait in the output channel
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Use an externally owned cancel token
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Make the worker that takes `start` panic
    #[cfg(test)]
    fn with_panic_on(mut self, start: usize) -> Self {
        self.panic_on = Some(start);
        self
    }

    /// Start the pool and return the consumer end of the output channel
    ///
    /// # Errors
    /// Returns `PoolError::Spawn` if the supervisor thread cannot be started.
    pub fn spawn(self) -> Result<SolutionStream, PoolError> {
        let (output, receiver) = bounded(self.capacity);
        let cancel = self.cancel.clone();
        let supervisor = thread::Builder::new()
            .name("letterboxed-pool".to_string())
            .spawn(move || self.supervise(output))
            .map_err(PoolError::Spawn)?;

        Ok(SolutionStream {
            receiver,
            supervisor,
            cancel,
        })
    }

    fn supervise(self, output: Sender<Solution>) -> PoolReport {
        let start_time = Instant::now();

        let (queue, input) = unbounded();
        for start in 0..self.graph.len() {
            if queue.send(start).is_err() {
                break;
            }
        }
        drop(queue);

        info!(
            "searching {} starting words with {} workers",
            self.graph.len(),
            self.workers
        );

        let mut report = PoolReport {
            workers: self.workers,
            ..PoolReport::default()
        };

        let pool = &self;
        thread::scope(|scope| {
            let handles: Vec<_> = (0..pool.workers)
                .map(|id| {
                    let input = input.clone();
                    let output = output.clone();
                    thread::Builder::new()
                        .name(format!("letterboxed-worker-{id}"))
                        .spawn_scoped(scope, move || pool.work(id, &input, &output))
                })
                .collect();

            for (id, handle) in handles.into_iter().enumerate() {
                match handle.map(thread::ScopedJoinHandle::join) {
                    Ok(Ok(worker)) => {
                        report.started += worker.started;
                        report.search.merge(&worker.search);
                    }
                    Ok(Err(_)) => {
                        error!("worker {id} panicked");
                        report.failed += 1;
                    }
                    Err(err) => {
                        error!("worker {id} could not be started: {err}");
                        report.failed += 1;
                    }
                }
            }
        });

        // Consumers see the end of the stream once this last sender is gone
        drop(output);

        report.cancelled = self.cancel.is_cancelled();
        info!(
            "searched {} starting words, {} solutions, {} states in {:.2?}",
            report.started,
            report.search.solutions,
            report.search.explored,
            start_time.elapsed()
        );
        report
    }

    fn work(&self, id: usize, input: &Receiver<usize>, output: &Sender<Solution>) -> WorkerReport {
        let searcher = ChainSearcher::new(&self.graph, &self.letter_box).with_cancel(&self.cancel);
        let mut report = WorkerReport::default();
        debug!("worker {id}: started");

        while let Ok(start) = input.recv() {
            if self.cancel.is_cancelled() {
                break;
            }
            report.started += 1;
            #[cfg(test)]
            assert_ne!(self.panic_on, Some(start), "worker {id}: injected failure");

            let stats = searcher.search(start, |solution| {
                if output.send(solution).is_ok() {
                    ControlFlow::Continue(())
                } else {
                    ControlFlow::Break(())
                }
            });
            report.search.merge(&stats);

            if stats.interrupted {
                break;
            }
        }

        debug!(
            "worker {id}: exiting after {} starting words, {} solutions",
            report.started, report.search.solutions
        );
        report
    }
}

/// Consumer end of a running pool
///
/// Iterating yields solutions as workers find them, in no particular order,
/// and ends once every worker has finished.
pub struct SolutionStream {
    receiver: Receiver<Solution>,
    supervisor: JoinHandle<PoolReport>,
    cancel: CancelToken,
}

impl SolutionStream {
    /// Ask the workers to stop
    ///
    /// Solutions already buffered remain available.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the next solution until `deadline`
    ///
    /// # Errors
    /// Returns `RecvTimeoutError::Timeout` if the deadline passes first, or
    /// `RecvTimeoutError::Disconnected` once the stream has ended.
    pub fn recv_deadline(&self, deadline: Instant) -> Result<Solution, RecvTimeoutError> {
        self.receiver.recv_deadline(deadline)
    }

    /// Wait for the pool to shut down
    ///
    /// Solutions not yet received are discarded; workers still searching
    /// stop at their next send.
    ///
    /// # Errors
    /// Returns `PoolError::WorkersFailed` if any worker panicked or could not
    /// be started, or `PoolError::SupervisorPanicked` if the pool itself died.
    pub fn finish(self) -> Result<PoolReport, PoolError> {
        let Self {
            receiver,
            supervisor,
            ..
        } = self;
        drop(receiver);

        let report = supervisor
            .join()
            .map_err(|_| PoolError::SupervisorPanicked)?;
        if report.failed > 0 {
            return Err(PoolError::WorkersFailed {
                failed: report.failed,
                report,
            });
        }
        Ok(report)
    }
}

impl Iterator for SolutionStream {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        self.receiver.recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Trie;
    use crate::solver::PuzzleWalker;
    use std::collections::BTreeSet;
    use std::time::Duration;

    fn pool(sides: &str, max_chain: usize, workers: usize, dictionary: &[&str]) -> SolverPool {
        let letter_box = LetterBox::parse(&[sides])
            .unwrap()
            .with_max_chain(max_chain)
            .with_concurrency(workers);
        let trie: Trie = dictionary.iter().collect();
        let words = PuzzleWalker::new(&letter_box, &trie).words();
        let graph = AdjacencyGraph::new(words, letter_box.alphabet());
        SolverPool::new(graph, letter_box)
    }

    fn run(pool: SolverPool) -> (BTreeSet<Solution>, usize, PoolReport) {
        let mut stream = pool.spawn().unwrap();
        let found: Vec<Solution> = stream.by_ref().collect();
        let report = stream.finish().unwrap();
        let count = found.len();
        (found.into_iter().collect(), count, report)
    }

    #[test]
    fn empty_dictionary_closes_promptly() {
        let (found, count, report) = run(pool("rul-eya-gdh-opb", 4, 4, &[]));
        assert!(found.is_empty());
        assert_eq!(count, 0);
        assert_eq!(report.started, 0);
        assert_eq!(report.workers, 4);
        assert_eq!(report.failed, 0);
    }

    #[test]
    fn streams_every_solution() {
        let (found, count, report) =
            run(pool("rul-eya-gdh-opb", 4, 2, crate::wordlists::SOLUTIONS));
        assert_eq!(count, 3);
        assert_eq!(found.len(), 3);
        assert_eq!(report.started, 37);
        assert_eq!(report.search.solutions, 3);
        assert!(!report.cancelled);
        assert!(found.contains(&Solution::from(vec![
            "upholder".to_string(),
            "rebuy".to_string(),
            "yoga".to_string(),
        ])));
    }

    #[test]
    fn concurrency_does_not_change_the_set() {
        let (single, _, _) = run(pool("rul-eya-gdh-opb", 4, 1, crate::wordlists::SOLUTIONS));
        let (many, count, _) = run(pool("rul-eya-gdh-opb", 4, 8, crate::wordlists::SOLUTIONS));
        assert_eq!(single, many);
        assert_eq!(count, many.len());
    }

    #[test]
    fn tiny_buffer_applies_backpressure() {
        let pool = pool("rul-eya-gdh-opb", 4, 4, crate::wordlists::SOLUTIONS).with_capacity(1);
        let (found, count, _) = run(pool);
        assert_eq!(found.len(), 3);
        assert_eq!(count, 3);
    }

    #[test]
    fn cancelled_before_start_finds_nothing() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let pool = pool("rul-eya-gdh-opb", 4, 4, crate::wordlists::SOLUTIONS).with_cancel(cancel);
        let (found, _, report) = run(pool);
        assert!(found.is_empty());
        assert!(report.cancelled);
        assert_eq!(report.started, 0);
    }

    #[test]
    fn finishing_early_stops_workers() {
        let mut stream = pool("rul-eya-gdh-opb", 4, 2, crate::wordlists::SOLUTIONS)
            .with_capacity(1)
            .spawn()
            .unwrap();
        assert!(stream.next().is_some());
        let report = stream.finish().unwrap();
        assert_eq!(report.failed, 0);
    }

    #[test]
    fn recv_deadline_reports_disconnect() {
        let stream = pool("rul-eya-gdh-opb", 4, 2, &[]).spawn().unwrap();
        let deadline = Instant::now() + Duration::from_secs(10);
        assert_eq!(
            stream.recv_deadline(deadline),
            Err(RecvTimeoutError::Disconnected)
        );
        stream.finish().unwrap();
    }

    fn index_of(pool: &SolverPool, word: &str) -> usize {
        pool.graph
            .candidates()
            .iter()
            .position(|c| c.text() == word)
            .unwrap()
    }

    #[test]
    fn panicked_worker_is_reported() {
        let pool = pool("rul-eya-gdh-opb", 4, 2, crate::wordlists::SOLUTIONS);
        let upholder = index_of(&pool, "upholder");
        let mut stream = pool.with_panic_on(upholder).spawn().unwrap();
        let found: BTreeSet<Solution> = stream.by_ref().collect();

        // The surviving worker drains the queue, so only upholder chains are lost
        let expected: Vec<&str> = vec!["gaudy", "yoga", "abhor", "repel"];
        assert_eq!(found.len(), 1);
        assert!(found.iter().all(|s| s.words() == expected.as_slice()));

        match stream.finish() {
            Err(PoolError::WorkersFailed { failed, report }) => {
                assert_eq!(failed, 1);
                assert_eq!(report.failed, 1);
                assert_eq!(report.workers, 2);
                assert!(!report.cancelled);
            }
            other => panic!("expected WorkersFailed, got {other:?}"),
        }
    }

    #[test]
    fn every_worker_failing_still_closes_the_stream() {
        let pool = pool("rul-eya-gdh-opb", 4, 1, crate::wordlists::SOLUTIONS);
        let upholder = index_of(&pool, "upholder");
        let mut stream = pool.with_panic_on(upholder).spawn().unwrap();
        // Ends instead of hanging even though the only worker died mid-queue
        let _: Vec<Solution> = stream.by_ref().collect();
        assert!(matches!(
            stream.finish(),
            Err(PoolError::WorkersFailed { failed: 1, .. })
        ));
    }

    #[test]
    fn error_messages() {
        let report = PoolReport {
            workers: 4,
            failed: 1,
            ..PoolReport::default()
        };
        let err = PoolError::WorkersFailed { failed: 1, report };
        assert_eq!(
            err.to_string(),
            "1 of 4 workers failed, results are incomplete"
        );
        assert_eq!(
            PoolError::SupervisorPanicked.to_string(),
            "solver pool supervisor panicked"
        );
    }
}
