//! Progress file writer for external observability
//!
//! Manages `<log_dir>/progress.json`, a single JSON file reflecting where a
//! running burn-in currently is. A multi-hour run can be watched by polling
//! this file instead of scraping terminal output.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current status of a burn-in run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Run is currently executing
    Running,
    /// All cycles completed
    Completed,
    /// A request failed and the run was aborted
    Failed,
}

/// Snapshot of the current run state, written to `progress.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnInProgress {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Current cycle (1-indexed, 0 before the first push)
    pub cycle: u32,
    /// Configured number of cycles
    pub total_cycles: u32,
    /// Current step within the cycle (1-indexed, 0 before the first push)
    pub step: u32,
    /// Steps per cycle
    pub total_steps: u32,
    /// Profile pushes completed so far
    pub pushes: u64,
    /// Status polls completed so far
    pub polls: u64,
    /// Run state
    pub status: RunStatus,
    /// Summary from the most recent poll
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_summary: Option<String>,
}

impl BurnInProgress {
    /// Create the snapshot for the start of a run
    #[must_use]
    pub fn new(total_cycles: u32, total_steps: u32) -> Self {
        Self {
            started_at: Utc::now(),
            cycle: 0,
            total_cycles,
            step: 0,
            total_steps,
            pushes: 0,
            polls: 0,
            status: RunStatus::Running,
            last_summary: None,
        }
    }
}

/// Manages reading and writing `progress.json`
pub struct ProgressWriter {
    path: PathBuf,
}

impl ProgressWriter {
    /// Create a new `ProgressWriter` targeting `<log_dir>/progress.json`.
    pub fn new(log_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
        Ok(Self {
            path: log_dir.join("progress.json"),
        })
    }

    /// Atomically write progress to the file (write to temp, then rename).
    pub fn write(&self, progress: &BurnInProgress) -> Result<()> {
        let json =
            serde_json::to_string_pretty(progress).context("Failed to serialize progress")?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes())
            .with_context(|| format!("Failed to write temp file: {}", tmp_path.display()))?;
        std::fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }

    /// Read the current progress from the file, or `None` if it doesn't exist.
    pub fn read(&self) -> Result<Option<BurnInProgress>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let progress: BurnInProgress =
            serde_json::from_str(&content).context("Failed to parse progress.json")?;
        Ok(Some(progress))
    }
}
