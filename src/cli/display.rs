//! Terminal display for burn-in runs
//!
//! Headers and summaries go to stderr. Status lines go to stdout so they can
//! be piped or redirected into a file on their own.

use chrono::{DateTime, TimeZone};
use colored::Colorize;

use crate::burnin::{RunParameters, RunReport};

/// Placeholder shown when the controller sends no summary
pub const MISSING_SUMMARY: &str = "null";

/// Timestamp format used on status lines
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display handler for a burn-in run
pub struct RunDisplay {
    total_cycles: u32,
    total_steps: usize,
}

impl RunDisplay {
    /// Create a display for a run of `total_cycles` over `total_steps` steps
    #[must_use]
    pub const fn new(total_cycles: u32, total_steps: usize) -> Self {
        Self {
            total_cycles,
            total_steps,
        }
    }

    /// Print the run banner
    pub fn print_banner(&self, host: &str, params: &RunParameters) {
        eprintln!(
            "\n{} {}",
            "===".bold().cyan(),
            format!("Burn-in: {host}").bold().cyan()
        );
        eprintln!(
            "  {} {} cycles x {} steps | {}s per step | {} polls per step | zone {}",
            "Plan:".dimmed(),
            self.total_cycles,
            self.total_steps,
            params.period.as_secs(),
            params.polls_per_step(),
            params.zone
        );
        eprintln!("{}", "─".repeat(50).dimmed());
    }

    /// Print the header for a step about to be pushed (both 1-indexed)
    pub fn print_step_header(&self, cycle: u32, step: u32) {
        eprintln!("{}", self.step_header(cycle, step).bold());
    }

    fn step_header(&self, cycle: u32, step: u32) -> String {
        format!(
            "[cycle {cycle}/{}] step {step}/{}",
            self.total_cycles, self.total_steps
        )
    }

    /// Print one status line to stdout
    pub fn print_status<Tz: TimeZone>(&self, at: &DateTime<Tz>, summary: Option<&str>)
    where
        Tz::Offset: std::fmt::Display,
    {
        println!("{}", format_status_line(at, summary));
    }

    /// Print the post-run summary
    pub fn print_report(&self, report: &RunReport) {
        eprintln!("{}", "─".repeat(50).dimmed());
        let secs = report.duration.as_secs();
        eprintln!(
            "  {} {} pushes | {} polls | {}h {}m {}s",
            "COMPLETED".green().bold(),
            report.pushes,
            report.polls,
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        );
        eprintln!();
    }
}

/// Format a status line: `<timestamp> <summary>`
pub fn format_status_line<Tz: TimeZone>(at: &DateTime<Tz>, summary: Option<&str>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{} {}",
        at.format(TIMESTAMP_FORMAT),
        summary.unwrap_or(MISSING_SUMMARY)
    )
}
