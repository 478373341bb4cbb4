//! Search string classification, validation and compilation.

use regex::Regex;

use crate::error::Error;

/// Regex metacharacters, excluding `+`, which is valid in a base64 key.
const REGEX_CHARS: &str = r"^$.|?*-[]{}()\";

/// Returns true if the search string should be treated as a regular
/// expression rather than a literal prefix.
pub fn is_regex(s: &str) -> bool {
    s.contains(|c| REGEX_CHARS.contains(c))
}

/// Validates that a literal search contains only characters that can appear
/// in a base64-rendered key.
pub fn validate_literal(s: &str) -> Result<(), Error> {
    if s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/')
    {
        Ok(())
    } else {
        Err(Error::InvalidPattern(format!(
            "\"{}\" contains invalid characters (valid: A-Z, a-z, 0-9, + and /)",
            s
        )))
    }
}

/// Compiles a regex search string.
///
/// Leading and trailing `.*` are stripped as they are implied by unanchored
/// matching. In case-insensitive mode `(?i)` is prepended unless the caller
/// already supplied it.
pub fn compile_regex(s: &str, case_sensitive: bool) -> Result<Regex, Error> {
    let mut pattern = s.strip_prefix(".*").unwrap_or(s);
    pattern = pattern.strip_suffix(".*").unwrap_or(pattern);

    let pattern = if !case_sensitive && !pattern.starts_with("(?i)") {
        format!("(?i){}", pattern)
    } else {
        pattern.to_string()
    };

    Regex::new(&pattern).map_err(|e| {
        Error::InvalidPattern(format!("\"{}\" is an invalid regular expression: {}", s, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_detection() {
        assert!(!is_regex("abc"));
        assert!(!is_regex("aB3+/"));
        assert!(is_regex("^abc"));
        assert!(is_regex("a.c"));
        assert!(is_regex("ab[cd]"));
        assert!(is_regex("ab|cd"));
    }

    #[test]
    fn test_plus_is_literal() {
        // '+' is a valid base64 character, not a regex marker here
        assert!(!is_regex("a+b"));
    }

    #[test]
    fn test_valid_literal() {
        assert!(validate_literal("hello").is_ok());
        assert!(validate_literal("Hi42+/").is_ok());
    }

    #[test]
    fn test_invalid_literal() {
        assert!(validate_literal("he!lo").is_err());
        assert!(validate_literal("with space").is_err());
        assert!(validate_literal("under_score").is_err());
    }

    #[test]
    fn test_case_insensitive_compile() {
        let re = compile_regex("abc", false).unwrap();
        assert_eq!(re.as_str(), "(?i)abc");
        assert!(re.is_match("xxABCxx"));
    }

    #[test]
    fn test_case_sensitive_compile() {
        let re = compile_regex("abc", true).unwrap();
        assert!(re.is_match("xxabcxx"));
        assert!(!re.is_match("xxABCxx"));
    }

    #[test]
    fn test_implied_dotstar_stripped() {
        let re = compile_regex(".*abc.*", true).unwrap();
        assert_eq!(re.as_str(), "abc");
    }

    #[test]
    fn test_existing_case_flag_kept() {
        let re = compile_regex("(?i)abc", false).unwrap();
        assert_eq!(re.as_str(), "(?i)abc");
    }

    #[test]
    fn test_invalid_regex() {
        assert!(compile_regex("ab[", true).is_err());
    }
}
