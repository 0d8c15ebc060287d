//! Burn-in runner
//!
//! Walks the profile sequence for the configured number of cycles. Each step
//! is pushed to the controller, then the controller status is polled for the
//! rest of the step period. Any failed request aborts the whole run; there is
//! no retry.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use tokio::time::{sleep, Instant};
use tracing::{info, warn};

use super::params::RunParameters;
use crate::cli::RunDisplay;
use crate::controller::Controller;
use crate::log::{RunRecorder, RunStatus, StatusSample};
use crate::profile::ProfileSequence;

/// Totals of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Profile steps pushed
    pub pushes: u64,
    /// Status polls made
    pub polls: u64,
    /// Wall time of the run
    pub duration: Duration,
}

/// Drives a burn-in run against a controller
pub struct BurnInRunner<C: Controller> {
    controller: C,
    params: RunParameters,
    recorder: Option<RunRecorder>,
}

impl<C: Controller> BurnInRunner<C> {
    /// Create a runner without run history
    #[must_use]
    pub const fn new(controller: C, params: RunParameters) -> Self {
        Self {
            controller,
            params,
            recorder: None,
        }
    }

    /// Persist run history through `recorder`
    #[must_use]
    pub fn with_recorder(mut self, recorder: RunRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// The controller being driven
    #[must_use]
    pub const fn controller(&self) -> &C {
        &self.controller
    }

    /// Execute the run over `sequence`.
    ///
    /// Returns after all cycles complete, or with the first error.
    pub async fn run(&mut self, sequence: &ProfileSequence) -> Result<RunReport> {
        self.params.validate()?;

        let display = RunDisplay::new(self.params.cycles, sequence.len());
        let start = Instant::now();

        match self.run_cycles(sequence, &display).await {
            Ok(mut report) => {
                report.duration = start.elapsed();
                if let Some(recorder) = self.recorder.as_mut() {
                    recorder.finish(RunStatus::Completed)?;
                }
                info!(pushes = report.pushes, polls = report.polls, "burn-in completed");
                display.print_report(&report);
                Ok(report)
            }
            Err(e) => {
                if let Some(recorder) = self.recorder.as_mut() {
                    if let Err(log_err) = recorder.finish(RunStatus::Failed) {
                        warn!("failed to record run failure: {log_err:#}");
                    }
                }
                Err(e)
            }
        }
    }

    async fn run_cycles(
        &mut self,
        sequence: &ProfileSequence,
        display: &RunDisplay,
    ) -> Result<RunReport> {
        let mut report = RunReport::default();
        let polls_per_step = self.params.polls_per_step();

        for cycle in 1..=self.params.cycles {
            for (step_no, step) in (1u32..).zip(sequence.steps()) {
                display.print_step_header(cycle, step_no);

                self.controller
                    .push_step(&self.params.zone, step)
                    .await
                    .with_context(|| format!("Failed to push step {step_no} of cycle {cycle}"))?;
                report.pushes += 1;
                info!(cycle, step = step_no, zone = %self.params.zone, "profile step applied");

                if let Some(recorder) = self.recorder.as_mut() {
                    recorder.record_push(cycle, step_no)?;
                }

                for poll in 1..=polls_per_step {
                    let status = self.controller.fetch_status().await.with_context(|| {
                        format!("Failed to read status (cycle {cycle}, step {step_no}, poll {poll})")
                    })?;
                    report.polls += 1;

                    let now = Local::now();
                    let summary = status.summary();
                    display.print_status(&now, summary.as_deref());

                    if let Some(recorder) = self.recorder.as_mut() {
                        recorder.record_poll(&StatusSample {
                            cycle,
                            step: step_no,
                            poll,
                            timestamp: now.with_timezone(&Utc),
                            summary,
                        })?;
                    }

                    sleep(self.params.poll_interval).await;
                }
            }
        }

        Ok(report)
    }
}
