//! Worker pool for the parallel key search.
//!
//! This module provides:
//! - Per-thread trial workers (generate, match, consume)
//! - The `Cruncher` orchestrator with bounded parallelism
//! - One-shot throughput calibration

mod calibrate;
mod cruncher;
mod trial;

pub use calibrate::Calibration;
pub use cruncher::{Cruncher, Options, State};
pub use trial::{Match, SearchStats};
