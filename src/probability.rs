//! Theoretical match probability for literal searches.

use std::time::Duration;

/// Full base64 key alphabet: 26 + 26 + 10 + 2.
const FULL_ALPHABET: u64 = 64;
/// Alphabet size once upper and lower case fold together: 26 + 10 + 2.
const FOLDED_ALPHABET: u64 = 38;

/// Returns the expected number of independent trials per match for a
/// literal search, as a 1-in-N probability.
///
/// Each character contributes its effective alphabet size: a letter
/// searched case-insensitively can be hit in either case, so it counts the
/// full 64-character alphabet; case-sensitive letters, digits, `+` and `/`
/// count 38. The per-character model deliberately ignores the structural
/// constraints base64 puts on key text; the estimate feeds ETAs only, never
/// correctness.
pub fn probability(text: &str, case_sensitive: bool) -> u64 {
    text.chars().fold(1u64, |p, c| {
        let size = if c.is_ascii_alphabetic() && !case_sensitive {
            FULL_ALPHABET
        } else {
            FOLDED_ALPHABET
        };
        p.saturating_mul(size)
    })
}

/// Expected wall-clock time per match, given a 1-in-N probability and the
/// calibrated per-trial latency.
pub fn eta(probability: u64, per_trial: Duration) -> Duration {
    let secs = per_trial.as_secs_f64() * probability as f64;
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_case_insensitive() {
        assert_eq!(probability("a", false), 64);
    }

    #[test]
    fn test_letter_case_sensitive() {
        assert_eq!(probability("a", true), 38);
    }

    #[test]
    fn test_digit_ignores_case_mode() {
        assert_eq!(probability("1", false), 38);
        assert_eq!(probability("1", true), 38);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(probability("+", false), 38);
        assert_eq!(probability("/", true), 38);
    }

    #[test]
    fn test_multiplies_per_character() {
        assert_eq!(probability("ab", false), 64 * 64);
        assert_eq!(probability("a1", false), 64 * 38);
    }

    #[test]
    fn test_empty_search() {
        assert_eq!(probability("", false), 1);
    }

    #[test]
    fn test_long_search_saturates() {
        let text = "a".repeat(64);
        assert_eq!(probability(&text, false), u64::MAX);
    }

    #[test]
    fn test_eta() {
        let d = eta(1000, Duration::from_millis(1));
        assert_eq!(d, Duration::from_secs(1));
    }

    #[test]
    fn test_eta_saturates() {
        let d = eta(u64::MAX, Duration::from_secs(1));
        assert_eq!(d, Duration::MAX);
    }
}
