//! Curve25519 key representation and rendering.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Size of a Curve25519 key in bytes.
pub const KEY_SIZE: usize = 32;

/// A Curve25519 public key (32 bytes).
///
/// WireGuard renders keys as standard base64 (padding included); that
/// rendering is the canonical form used both for display and for pattern
/// matching.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key([u8; KEY_SIZE]);

impl Key {
    /// Creates a key from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the key as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Returns the standard base64 rendering of the key.
    #[inline]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.to_base64())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_rendering() {
        let key = Key::from_bytes([0u8; KEY_SIZE]);
        assert_eq!(key.to_base64(), "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=");
    }

    #[test]
    fn test_rendering_length() {
        // 32 bytes encode to 44 base64 characters, final one padding
        let key = Key::from_bytes([0xab; KEY_SIZE]);
        let text = key.to_base64();
        assert_eq!(text.len(), 44);
        assert!(text.ends_with('='));
    }
}
