//! Runtime configuration for the vanity key generator.

use std::time::Duration;

use clap::Parser;

use crate::error::Error;

/// WireGuard Vanity Key Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Search strings: literal base64 prefixes, or regular expressions
    #[arg(required = true, value_name = "SEARCH")]
    pub searches: Vec<String>,

    /// Case sensitive matching
    #[arg(short = 'c', long, default_value = "false")]
    pub case_sensitive: bool,

    /// Number of worker threads (default: CPU cores minus one)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Limit results to n per search (exits after)
    #[arg(short = 'l', long, default_value = "1")]
    pub limit: usize,

    /// Print results only once all have been found
    #[arg(short = 's', long, default_value = "false")]
    pub summary: bool,

    /// Quit after n minutes (allowed suffixes: s/m/h)
    #[arg(short = 'T', long, value_name = "TIMEOUT")]
    pub timeout: Option<String>,
}

impl Config {
    /// Returns the number of workers, defaulting to CPU count minus one
    /// (minimum 1).
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(default_workers)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.worker_count() == 0 {
            return Err(Error::Config("thread count must be at least 1".into()));
        }
        if self.limit == 0 {
            return Err(Error::Config("limit must be at least 1".into()));
        }
        self.parse_timeout()?;
        Ok(())
    }

    /// Parses the timeout flag. A bare number means minutes; `s`, `m` and
    /// `h` suffixes select seconds, minutes and hours.
    pub fn parse_timeout(&self) -> Result<Option<Duration>, Error> {
        let Some(raw) = self.timeout.as_deref() else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let (digits, unit_secs) = match raw.chars().last() {
            Some('s') => (&raw[..raw.len() - 1], 1),
            Some('m') => (&raw[..raw.len() - 1], 60),
            Some('h') => (&raw[..raw.len() - 1], 3600),
            Some(c) if c.is_ascii_digit() => (raw, 60),
            _ => {
                return Err(Error::Config(format!("invalid timeout value: {}", raw)));
            }
        };

        let value: u64 = digits
            .parse()
            .map_err(|_| Error::Config(format!("invalid timeout value: {}", raw)))?;

        Ok(Some(Duration::from_secs(value.saturating_mul(unit_secs))))
    }
}

/// Default worker count: core count minus one, so the dispatch thread keeps
/// a core to itself on multi-core machines.
pub fn default_workers() -> usize {
    num_cpus::get().saturating_sub(1).max(1)
}
