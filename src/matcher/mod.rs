//! Pattern matching for rendered public keys.
//!
//! Supports two kinds of search targets:
//! - Literal: an exact prefix over the base64 key alphabet
//! - Regex: a user-supplied regular expression
//!
//! Each target carries a remaining-matches quota; the registry serializes
//! match checks against quota mutation.

mod pattern;
mod registry;

pub use pattern::{compile_regex, is_regex, validate_literal};
pub use registry::{PatternRegistry, ScanReport};
