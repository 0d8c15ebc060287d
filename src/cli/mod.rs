//! CLI output formatting
//!
//! Provides human-readable terminal display for burn-in runs.

pub mod display;

pub use display::format_status_line;
pub use display::RunDisplay;
