//! Run recorder
//!
//! Ties the JSONL status history and the progress snapshot together so the
//! runner has a single sink to report into.

use std::path::Path;

use anyhow::Result;

use super::jsonl::{JsonlLogger, StatusSample};
use super::progress::{BurnInProgress, ProgressWriter, RunStatus};

/// Persists run history under a log directory
pub struct RunRecorder {
    logger: JsonlLogger,
    writer: ProgressWriter,
    progress: BurnInProgress,
}

impl RunRecorder {
    /// Create a recorder and write the initial progress snapshot
    pub fn new(log_dir: &Path, total_cycles: u32, total_steps: u32) -> Result<Self> {
        let logger = JsonlLogger::new(log_dir)?;
        let writer = ProgressWriter::new(log_dir)?;
        let progress = BurnInProgress::new(total_cycles, total_steps);
        writer.write(&progress)?;
        Ok(Self {
            logger,
            writer,
            progress,
        })
    }

    /// Record a completed push of `step` in `cycle` (both 1-indexed)
    pub fn record_push(&mut self, cycle: u32, step: u32) -> Result<()> {
        self.progress.cycle = cycle;
        self.progress.step = step;
        self.progress.pushes += 1;
        self.writer.write(&self.progress)
    }

    /// Record a status poll
    pub fn record_poll(&mut self, sample: &StatusSample) -> Result<()> {
        self.logger.append(sample)?;
        self.progress.polls += 1;
        self.progress.last_summary.clone_from(&sample.summary);
        self.writer.write(&self.progress)
    }

    /// Mark the run as finished
    pub fn finish(&mut self, status: RunStatus) -> Result<()> {
        self.progress.status = status;
        self.writer.write(&self.progress)
    }

    /// Underlying JSONL logger
    #[must_use]
    pub const fn logger(&self) -> &JsonlLogger {
        &self.logger
    }
}
