//! Logging configuration
//!
//! Console output always goes to stderr: stdout carries the HTML report.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level for this crate (trace, debug, info, warn, error)
    pub level: String,

    /// Directory for daily-rotated JSON log files (None = no file logging)
    pub log_directory: Option<PathBuf>,

    /// Include file location in console logs
    pub include_file_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            log_directory: None,
            include_file_location: false,
        }
    }
}

impl LoggingConfig {
    /// Level after applying `-v` flags: each flag steps one level more verbose
    pub fn effective_level(&self, verbosity: u8) -> &'static str {
        let base = VALID_LEVELS
            .iter()
            .position(|level| *level == self.level)
            .unwrap_or(3);
        VALID_LEVELS[base.saturating_sub(verbosity as usize)]
    }

    pub fn validate(&self) -> Result<(), String> {
        if !VALID_LEVELS.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid logging level: {}. Must be one of: {:?}",
                self.level, VALID_LEVELS
            ));
        }

        if let Some(ref log_dir) = self.log_directory {
            if let Some(parent) = log_dir.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(format!("Log directory parent does not exist: {:?}", parent));
                }
            }
        }

        Ok(())
    }
}
