//! # wg_vanity
//!
//! High-performance WireGuard vanity key generator.
//!
//! ## Architecture
//!
//! - `crypto`: Curve25519 key generation and base64 rendering
//! - `matcher`: Pattern registry with per-pattern result quotas
//! - `worker`: Parallel trial execution, orchestration and calibration
//! - `probability`: Trials-per-match estimation for ETAs
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;
pub mod error;
pub mod format;
pub mod matcher;
pub mod probability;
pub mod worker;

pub use config::Config;
pub use crypto::{Key, Keypair};
pub use error::Error;
pub use matcher::PatternRegistry;
pub use probability::{eta, probability};
pub use worker::{Calibration, Cruncher, Match, Options, State};
