//! One-shot search speed calibration.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::crypto::Keypair;
use crate::error::Error;
use crate::matcher::PatternRegistry;

/// Wall-clock window for the dry-run burst.
pub(super) const DEFAULT_WINDOW: Duration = Duration::from_secs(2);

/// Trials between deadline checks.
const DEADLINE_STRIDE: u64 = 64;

/// Measured steady-state search speed.
#[derive(Debug, Clone, Copy)]
pub struct Calibration {
    /// Completed trials per second across all workers
    pub trials_per_second: u64,
    /// Average wall-clock latency of one trial
    pub per_trial: Duration,
}

/// Runs dry-run trials at full parallelism for the given window and
/// measures throughput.
///
/// Each trial is a full key generation plus a read-only registry scan, so
/// the cost profile matches the real search; quotas are never touched.
pub(super) fn run(
    registry: &PatternRegistry,
    parallelism: usize,
    window: Duration,
) -> Result<Calibration, Error> {
    let total = AtomicU64::new(0);
    let start = Instant::now();
    let deadline = start + window;

    thread::scope(|scope| -> Result<(), Error> {
        let workers: Vec<_> = (0..parallelism)
            .map(|_| {
                scope.spawn(|| -> Result<(), Error> {
                    let mut count = 0u64;
                    loop {
                        let keypair = Keypair::generate()?;
                        registry.dry_scan(&keypair.public().to_base64());
                        count += 1;
                        if count % DEADLINE_STRIDE == 0 && Instant::now() >= deadline {
                            break;
                        }
                    }
                    total.fetch_add(count, Ordering::Relaxed);
                    Ok(())
                })
            })
            .collect();

        for worker in workers {
            worker.join().expect("calibration thread panicked")?;
        }
        Ok(())
    })?;

    let elapsed = start.elapsed();
    let count = total.load(Ordering::Relaxed).max(1);

    Ok(Calibration {
        trials_per_second: (count as f64 / elapsed.as_secs_f64()).round() as u64,
        per_trial: Duration::from_secs_f64(elapsed.as_secs_f64() / count as f64),
    })
}
