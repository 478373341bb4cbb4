//! Search orchestrator and worker pool management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Sender};

use crate::error::Error;
use crate::matcher::PatternRegistry;

use super::calibrate::{self, Calibration};
use super::trial::{Match, SearchStats, TrialWorker, WorkerEvent};

/// Search options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Maximum number of trials in flight (worker thread count)
    pub parallelism: usize,
    /// Case sensitive matching
    pub case_sensitive: bool,
}

/// Lifecycle of a search run. `Completed` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Constructed, not yet running
    Idle,
    /// Trial workers are dispatching
    Running,
    /// Every registered quota reached 0
    Completed,
    /// Stopped before completion (cancellation or fatal error)
    Aborted,
}

/// Orchestrates a bounded pool of trial workers over a shared registry.
///
/// Register search targets first, then call [`run`] or [`collect_all`]
/// once; both block until the pool drains. The worker count is the
/// admission gate: each worker runs one trial at a time, so at most
/// `parallelism` trials are ever in flight.
///
/// [`run`]: Self::run
/// [`collect_all`]: Self::collect_all
pub struct Cruncher {
    parallelism: usize,
    registry: Arc<PatternRegistry>,
    stop: Arc<AtomicBool>,
    stats: Arc<SearchStats>,
    state: State,
}

impl Cruncher {
    /// Creates a new cruncher.
    pub fn new(options: Options) -> Result<Self, Error> {
        if options.parallelism == 0 {
            return Err(Error::Config("parallelism must be at least 1".into()));
        }

        Ok(Self {
            parallelism: options.parallelism,
            registry: Arc::new(PatternRegistry::new(options.case_sensitive)),
            stop: Arc::new(AtomicBool::new(false)),
            stats: Arc::new(SearchStats::new()),
            state: State::Idle,
        })
    }

    /// Registers a literal prefix search with a result quota.
    ///
    /// Startup-time only: call before [`run`](Self::run).
    pub fn register_literal(&self, text: &str, quota: usize) -> Result<(), Error> {
        self.registry.register_literal(text, quota)
    }

    /// Registers a regular-expression search with a result quota.
    ///
    /// Startup-time only: call before [`run`](Self::run).
    pub fn register_regex(&self, source: &str, quota: usize) -> Result<(), Error> {
        self.registry.register_regex(source, quota)
    }

    /// Measures steady-state trial throughput with a timed dry-run burst
    /// at the configured parallelism. One-shot; call before the search.
    pub fn calibrate(&self) -> Result<Calibration, Error> {
        calibrate::run(&self.registry, self.parallelism, calibrate::DEFAULT_WINDOW)
    }

    /// Runs the search, invoking `on_match` for every found keypair, and
    /// blocks until completion or abort.
    ///
    /// Dispatch stops as soon as a trial's pass reports all quotas
    /// exhausted or the abort handle is raised; in-flight trials finish
    /// naturally. Entropy failure inside any trial unwinds the run.
    pub fn run(&mut self, mut on_match: impl FnMut(Match)) -> Result<(), Error> {
        if self.state != State::Idle {
            return Err(Error::Config("search has already run".into()));
        }
        self.state = State::Running;

        let (event_tx, event_rx) = bounded(100);
        let handles = self.spawn_workers(event_tx);

        let mut fatal = None;
        for event in event_rx.iter() {
            match event {
                WorkerEvent::Found(result) => on_match(result),
                WorkerEvent::Fatal(e) => {
                    self.stop.store(true, Ordering::Relaxed);
                    fatal.get_or_insert(e);
                }
            }
        }

        for handle in handles {
            let _ = handle.join();
        }

        if let Some(e) = fatal {
            self.state = State::Aborted;
            return Err(e);
        }

        self.state = if self.registry.is_complete() {
            State::Completed
        } else {
            State::Aborted
        };
        Ok(())
    }

    /// Runs the search to completion and returns every match in emission
    /// order. This can take some time.
    pub fn collect_all(&mut self) -> Result<Vec<Match>, Error> {
        let mut matches = Vec::new();
        self.run(|result| matches.push(result))?;
        Ok(matches)
    }

    /// Spawns the trial workers. The channel disconnects once every worker
    /// has exited and dropped its sender, which ends the drain loop.
    fn spawn_workers(&self, event_tx: Sender<WorkerEvent>) -> Vec<JoinHandle<()>> {
        (0..self.parallelism)
            .map(|id| {
                let worker = TrialWorker::new(
                    self.registry.clone(),
                    event_tx.clone(),
                    self.stop.clone(),
                    self.stats.clone(),
                );

                thread::Builder::new()
                    .name(format!("vanity-worker-{}", id))
                    .spawn(move || worker.run())
                    .expect("Failed to spawn worker thread")
            })
            .collect()
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the configured parallelism bound.
    pub fn parallelism(&self) -> usize {
        self.parallelism
    }

    /// Returns a read handle to the pattern registry.
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Returns the total trials performed so far.
    pub fn total_trials(&self) -> u64 {
        self.stats.total_trials()
    }

    /// Returns the total matches emitted so far.
    pub fn total_matches(&self) -> u64 {
        self.stats.total_matches()
    }

    /// Returns a flag that stops dispatch when set (e.g. from a signal
    /// handler or timeout timer). In-flight trials still drain.
    pub fn abort_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }
}
