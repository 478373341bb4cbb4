//! Trial worker: repeated generate-and-test cycles on one thread.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::crypto::Keypair;
use crate::error::Error;
use crate::matcher::PatternRegistry;

/// A found keypair, rendered as base64 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The secret key (standard base64)
    pub private: String,
    /// The public key (standard base64, original casing)
    pub public: String,
}

/// Events a trial worker reports back to the orchestrator.
pub(super) enum WorkerEvent {
    /// A pattern matched; one event per consumed quota.
    Found(Match),
    /// The worker hit an unrecoverable error; the run must unwind.
    Fatal(Error),
}

/// Shared counters across all trial workers.
#[derive(Debug, Default)]
pub struct SearchStats {
    /// Total trials performed
    pub trials: AtomicU64,
    /// Total matches emitted
    pub matches: AtomicU64,
}

impl SearchStats {
    /// Creates zeroed stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total trials performed.
    pub fn total_trials(&self) -> u64 {
        self.trials.load(Ordering::Relaxed)
    }

    /// Returns the total matches emitted.
    pub fn total_matches(&self) -> u64 {
        self.matches.load(Ordering::Relaxed)
    }
}

/// A worker thread that runs one trial at a time.
///
/// With `P` workers in the pool, at most `P` trials are ever in flight;
/// each loop iteration is one full trial, so a stop request lets the
/// current trial finish naturally rather than interrupting key generation.
pub(super) struct TrialWorker {
    registry: Arc<PatternRegistry>,
    events: Sender<WorkerEvent>,
    stop: Arc<AtomicBool>,
    stats: Arc<SearchStats>,
}

impl TrialWorker {
    pub(super) fn new(
        registry: Arc<PatternRegistry>,
        events: Sender<WorkerEvent>,
        stop: Arc<AtomicBool>,
        stats: Arc<SearchStats>,
    ) -> Self {
        Self {
            registry,
            events,
            stop,
            stats,
        }
    }

    /// Runs the trial loop until the stop flag is set, the registry reports
    /// completion, or entropy acquisition fails.
    pub(super) fn run(&self) {
        loop {
            if self.stop.load(Ordering::Relaxed) {
                break;
            }

            let keypair = match Keypair::generate() {
                Ok(keypair) => keypair,
                Err(e) => {
                    // Systemic fault, not transient: unwind the whole run
                    self.stop.store(true, Ordering::Relaxed);
                    let _ = self.events.send(WorkerEvent::Fatal(e));
                    break;
                }
            };
            self.stats.trials.fetch_add(1, Ordering::Relaxed);

            let public = keypair.public().to_base64();
            let report = self.registry.check_and_consume(&public);

            for _ in 0..report.hits {
                self.stats.matches.fetch_add(1, Ordering::Relaxed);
                let result = Match {
                    private: keypair.secret_base64(),
                    public: public.clone(),
                };
                // Ignore send failure: the orchestrator is already gone
                let _ = self.events.send(WorkerEvent::Found(result));
            }

            if report.completed {
                self.stop.store(true, Ordering::Relaxed);
                break;
            }
        }
    }
}
