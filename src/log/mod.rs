//! Logging and observability
//!
//! Run history for a burn-in: a JSONL record of every status poll and a
//! progress snapshot, both kept under an optional log directory.

pub mod jsonl;
pub mod progress;
pub mod recorder;

pub use jsonl::{JsonlLogger, StatusSample};
pub use progress::{BurnInProgress, ProgressWriter, RunStatus};
pub use recorder::RunRecorder;
