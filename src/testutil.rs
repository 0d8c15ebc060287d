//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use tokio::time::Instant;

use crate::controller::error::Result;
use crate::controller::{Controller, ControllerError, ControllerStatus};
use crate::profile::ProfileStep;

/// A controller call observed by `RecordingController`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// Step pushed to a zone
    Push {
        /// Target zone
        zone: String,
        /// Pushed step
        step: ProfileStep,
    },
    /// Status polled
    Poll,
}

/// In-memory controller that records every call with its (tokio) instant.
///
/// Failures can be injected on the n-th push or poll (1-indexed).
#[derive(Default)]
pub struct RecordingController {
    calls: Mutex<Vec<(Call, Instant)>>,
    summary: Option<String>,
    fail_push_at: Option<usize>,
    fail_poll_at: Option<usize>,
}

impl RecordingController {
    /// Controller answering every poll with `summary`
    #[must_use]
    pub fn with_summary(summary: &str) -> Self {
        Self {
            summary: Some(summary.to_string()),
            ..Self::default()
        }
    }

    /// Fail the n-th push with HTTP 500
    #[must_use]
    pub const fn failing_push(mut self, n: usize) -> Self {
        self.fail_push_at = Some(n);
        self
    }

    /// Fail the n-th poll with HTTP 500
    #[must_use]
    pub const fn failing_poll(mut self, n: usize) -> Self {
        self.fail_poll_at = Some(n);
        self
    }

    /// Calls in the order they happened
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(call, _)| call.clone())
            .collect()
    }

    /// Instants at which each call happened
    #[must_use]
    pub fn instants(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }

    fn record(&self, call: Call) -> usize {
        let mut calls = self.calls.lock().unwrap();
        let kind = std::mem::discriminant(&call);
        calls.push((call, Instant::now()));
        calls
            .iter()
            .filter(|(c, _)| std::mem::discriminant(c) == kind)
            .count()
    }
}

#[async_trait]
impl Controller for RecordingController {
    async fn push_step(&self, zone: &str, step: &ProfileStep) -> Result<()> {
        let n = self.record(Call::Push {
            zone: zone.to_string(),
            step: *step,
        });
        if self.fail_push_at == Some(n) {
            return Err(ControllerError::status(500, "mock://light", "injected"));
        }
        Ok(())
    }

    async fn fetch_status(&self) -> Result<ControllerStatus> {
        let n = self.record(Call::Poll);
        if self.fail_poll_at == Some(n) {
            return Err(ControllerError::status(500, "mock://status", "injected"));
        }
        let raw = self
            .summary
            .as_ref()
            .map_or_else(|| json!({"uptime_s": n}), |s| json!({"summary": s}));
        Ok(ControllerStatus::new(raw))
    }
}
