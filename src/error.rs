//! Crate-wide error types.

/// Errors reported by the search engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The secure random source could not supply bytes.
    ///
    /// Fatal: a key generated from a degraded source must never be used,
    /// so this unwinds the entire run instead of being retried per trial.
    #[error("entropy source failure: {0}")]
    EntropyFailure(#[from] rand::Error),

    /// A search string failed validation at registration time.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// The requested runtime configuration is impossible.
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::InvalidPattern("\"a b\" contains invalid characters".into());
        assert_eq!(
            e.to_string(),
            "invalid pattern: \"a b\" contains invalid characters"
        );

        let e = Error::Config("parallelism must be at least 1".into());
        assert_eq!(
            e.to_string(),
            "invalid configuration: parallelism must be at least 1"
        );
    }

    #[test]
    fn test_entropy_failure_wraps_rand_error() {
        fn fails() -> Result<(), Error> {
            Err(rand::Error::new("rng unavailable"))?
        }

        let e = fails().unwrap_err();
        assert!(matches!(e, Error::EntropyFailure(_)));
        assert!(e.to_string().starts_with("entropy source failure"));
    }
}
