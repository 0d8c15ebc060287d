//! Run parameters

use std::time::Duration;

use anyhow::{bail, Result};

/// Interval between status polls unless overridden
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Light zone targeted unless overridden
pub const DEFAULT_ZONE: &str = "dome0";

/// Immutable settings for one burn-in run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    /// Number of full passes over the profile sequence
    pub cycles: u32,
    /// Time spent on each step
    pub period: Duration,
    /// Wait after each status poll
    pub poll_interval: Duration,
    /// Light zone the steps are pushed to
    pub zone: String,
}

impl RunParameters {
    /// Parameters with the default poll interval and zone
    #[must_use]
    pub fn new(cycles: u32, period: Duration) -> Self {
        Self {
            cycles,
            period,
            poll_interval: DEFAULT_POLL_INTERVAL,
            zone: DEFAULT_ZONE.to_string(),
        }
    }

    /// Override the poll interval
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Override the light zone
    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = zone.into();
        self
    }

    /// Number of status polls after each push: `floor(period / poll_interval)`
    #[must_use]
    pub fn polls_per_step(&self) -> u32 {
        self.period
            .as_nanos()
            .checked_div(self.poll_interval.as_nanos())
            .map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX))
    }

    /// Reject parameters a run cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.cycles == 0 {
            bail!("Cycle count must be at least 1");
        }
        if self.period.is_zero() {
            bail!("Step period must be positive");
        }
        if self.poll_interval.is_zero() {
            bail!("Poll interval must be positive");
        }
        if !is_valid_zone(&self.zone) {
            bail!(
                "Invalid light zone '{}': use only letters, digits, '-' and '_'",
                self.zone
            );
        }
        Ok(())
    }
}

/// A zone is a single URL path segment: `[A-Za-z0-9_-]+`
fn is_valid_zone(zone: &str) -> bool {
    !zone.is_empty()
        && zone
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
