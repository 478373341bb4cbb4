//! WireGuard keypair generation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use curve25519_dalek::montgomery::MontgomeryPoint;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::Error;

use super::key::{Key, KEY_SIZE};

/// A Curve25519 keypair (clamped secret key + derived public key).
#[derive(Debug, Clone)]
pub struct Keypair {
    /// The secret key bytes (32 bytes, always clamped)
    secret: [u8; KEY_SIZE],
    /// The derived public key
    public: Key,
}

impl Keypair {
    /// Generates a new random keypair.
    ///
    /// Draws 32 bytes from the operating system's secure random source.
    /// Fails only if that source fails, which callers must treat as fatal.
    #[inline]
    pub fn generate() -> Result<Self, Error> {
        let mut secret = [0u8; KEY_SIZE];
        OsRng.try_fill_bytes(&mut secret)?;
        Ok(Self::from_secret_bytes(secret))
    }

    /// Builds a keypair from existing secret key material.
    ///
    /// The bytes are clamped before derivation, so an unclamped secret is
    /// never observable through this type.
    pub fn from_secret_bytes(mut secret: [u8; KEY_SIZE]) -> Self {
        clamp(&mut secret);
        let public = Key::from_bytes(MontgomeryPoint::mul_base_clamped(secret).to_bytes());

        Self { secret, public }
    }

    /// Returns a reference to the derived public key.
    #[inline]
    pub fn public(&self) -> &Key {
        &self.public
    }

    /// Returns the secret key bytes.
    pub fn secret_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.secret
    }

    /// Returns the standard base64 rendering of the secret key.
    pub fn secret_base64(&self) -> String {
        STANDARD.encode(self.secret)
    }
}

/// Clamps a raw random scalar into a valid Curve25519 secret key, per the
/// format described on <https://cr.yp.to/ecdh.html>.
fn clamp(k: &mut [u8; KEY_SIZE]) {
    k[0] &= 248;
    k[31] = (k[31] & 127) | 64;
}
