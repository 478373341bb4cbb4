//! Cryptographic operations for WireGuard key generation.
//!
//! This module provides:
//! - Secure random Curve25519 secret key generation with clamping
//! - Public key derivation via fixed-base scalar multiplication
//! - Canonical base64 rendering used for display and matching

mod key;
mod keypair;

pub use key::{Key, KEY_SIZE};
pub use keypair::Keypair;
