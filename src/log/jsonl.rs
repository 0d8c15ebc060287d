//! JSONL (JSON Lines) status history
//!
//! Provides append-only logging of status polls to `<log_dir>/status.jsonl`

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// One status poll taken during a burn-in run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSample {
    /// Cycle number (1-indexed)
    pub cycle: u32,
    /// Step number within the cycle (1-indexed)
    pub step: u32,
    /// Poll number within the step (1-indexed)
    pub poll: u32,
    /// When the status was read
    pub timestamp: DateTime<Utc>,
    /// Summary reported by the controller, if any
    pub summary: Option<String>,
}

/// JSONL logger for status history
///
/// Each line is a JSON object representing a single status poll.
pub struct JsonlLogger {
    log_path: PathBuf,
}

impl JsonlLogger {
    /// Create a new JSONL logger
    ///
    /// # Arguments
    /// * `log_dir` - Directory where status.jsonl will be stored
    ///
    /// # Errors
    /// Returns an error if the log directory cannot be created
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        Ok(Self {
            log_path: log_dir.join("status.jsonl"),
        })
    }

    /// Append a status sample to the log
    pub fn append(&self, sample: &StatusSample) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        let json =
            serde_json::to_string(sample).context("Failed to serialize status sample to JSON")?;

        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all status samples from the log, in chronological order
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or any line is not a valid sample
    pub fn read_all(&self) -> Result<Vec<StatusSample>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut samples = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let sample: StatusSample = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;

            samples.push(sample);
        }

        Ok(samples)
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
