//! Runtime configuration resolved from the environment

use std::path::PathBuf;

use crate::constants::{APP_NAME, LOG_DIR_ENV, LOG_FILTER_ENV};

/// Settings that vary per machine rather than per collection
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Directory the log file is written to
    pub log_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_dir = lookup(LOG_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_NAME)))
            .unwrap_or_else(|| PathBuf::from("."));

        let log_filter = lookup(LOG_FILTER_ENV)
            .filter(|filter| !filter.is_empty())
            .unwrap_or_else(|| String::from("info"));

        Config { log_dir, log_filter }
    }
}
