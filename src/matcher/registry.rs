//! Pattern registry with per-pattern result quotas.

use std::borrow::Cow;
use std::sync::Mutex;

use regex::Regex;

use crate::error::Error;

use super::pattern;

/// Outcome of one trial's match-and-consume pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of patterns the candidate matched (quotas decremented).
    pub hits: usize,
    /// True iff every registered quota is 0 after this pass's decrements.
    pub completed: bool,
}

struct LiteralEntry {
    text: String,
    quota: usize,
}

struct RegexEntry {
    regex: Regex,
    quota: usize,
}

#[derive(Default)]
struct Entries {
    literals: Vec<LiteralEntry>,
    regexes: Vec<RegexEntry>,
}

/// Holds literal and regex search targets with their remaining quotas.
///
/// All reads and writes of the quota table happen under one mutex: a trial's
/// full match-check pass is a single critical section, so quota decrements
/// and the completion flag are always computed from consistent state. Key
/// generation never holds the lock; only the match phase is serialized.
pub struct PatternRegistry {
    case_sensitive: bool,
    entries: Mutex<Entries>,
}

impl PatternRegistry {
    /// Creates an empty registry.
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            entries: Mutex::new(Entries::default()),
        }
    }

    /// Returns whether matching is case sensitive.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Registers a literal prefix target.
    ///
    /// The literal is normalized per the case mode; registering the same
    /// normalized literal again replaces its quota rather than adding a
    /// second entry. Startup-time only: not meant to race the search loop.
    pub fn register_literal(&self, text: &str, quota: usize) -> Result<(), Error> {
        pattern::validate_literal(text)?;
        let text = self.normalize(text).into_owned();

        let mut entries = self.lock();
        match entries.literals.iter_mut().find(|e| e.text == text) {
            Some(entry) => entry.quota = quota,
            None => entries.literals.push(LiteralEntry { text, quota }),
        }
        Ok(())
    }

    /// Registers a regular-expression target.
    ///
    /// The expression is compiled per the case mode (see
    /// [`compile_regex`](crate::matcher::compile_regex)); compilation
    /// failure is reported here, before the search starts. Duplicate
    /// compiled patterns collapse to a single quota entry.
    pub fn register_regex(&self, source: &str, quota: usize) -> Result<(), Error> {
        let regex = pattern::compile_regex(source, self.case_sensitive)?;

        let mut entries = self.lock();
        match entries
            .regexes
            .iter_mut()
            .find(|e| e.regex.as_str() == regex.as_str())
        {
            Some(entry) => entry.quota = quota,
            None => entries.regexes.push(RegexEntry { regex, quota }),
        }
        Ok(())
    }

    /// Matches a candidate key rendering against all live targets,
    /// consuming quota for each hit.
    ///
    /// The whole pass runs inside one critical section: iterate literals
    /// with quota > 0 (prefix test), then regexes with quota > 0, decrement
    /// on each hit, then compute completion from the post-decrement state.
    /// Exhausted targets are skipped, never decremented below zero.
    pub fn check_and_consume(&self, candidate: &str) -> ScanReport {
        let candidate = self.normalize(candidate);
        let mut hits = 0;

        let mut entries = self.lock();

        for entry in entries.literals.iter_mut().filter(|e| e.quota > 0) {
            if candidate.starts_with(&entry.text) {
                entry.quota -= 1;
                hits += 1;
            }
        }

        for entry in entries.regexes.iter_mut().filter(|e| e.quota > 0) {
            if entry.regex.is_match(&candidate) {
                entry.quota -= 1;
                hits += 1;
            }
        }

        ScanReport {
            hits,
            completed: entries.all_exhausted(),
        }
    }

    /// Runs the same scan as [`check_and_consume`] without touching quotas.
    ///
    /// Used by the speed calibrator to reproduce the per-trial cost profile
    /// before the real search starts. Returns the would-be hit count.
    ///
    /// [`check_and_consume`]: Self::check_and_consume
    pub fn dry_scan(&self, candidate: &str) -> usize {
        let candidate = self.normalize(candidate);

        let entries = self.lock();
        let literal_hits = entries
            .literals
            .iter()
            .filter(|e| candidate.starts_with(&e.text))
            .count();
        let regex_hits = entries
            .regexes
            .iter()
            .filter(|e| e.regex.is_match(&candidate))
            .count();

        literal_hits + regex_hits
    }

    /// Returns true iff every registered quota is 0.
    pub fn is_complete(&self) -> bool {
        self.lock().all_exhausted()
    }

    /// Returns the remaining quota for a registered literal, if present.
    pub fn remaining_literal(&self, text: &str) -> Option<usize> {
        let text = self.normalize(text);
        self.lock()
            .literals
            .iter()
            .find(|e| e.text == text.as_ref())
            .map(|e| e.quota)
    }

    fn normalize<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(s)
        } else {
            Cow::Owned(s.to_lowercase())
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
        // A panic while holding the lock is already fatal to the search
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Entries {
    fn all_exhausted(&self) -> bool {
        self.literals.iter().all(|e| e.quota == 0) && self.regexes.iter().all(|e| e.quota == 0)
    }
}
