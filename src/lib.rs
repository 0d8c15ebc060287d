//! Burnin - Lighting burn-in cycle runner
//!
//! Burnin drives a terrarium controller through a fixed sequence of lighting
//! profile steps, polling its status at a fixed interval, for as many cycles
//! as requested. A single failed request stops the run.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod burnin;
pub mod cli;
pub mod controller;
pub mod log;
pub mod profile;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use burnin::{BurnInRunner, RunParameters, RunReport};
pub use cli::RunDisplay;
pub use controller::{Controller, ControllerError, ControllerStatus, HttpController};
pub use log::{JsonlLogger, RunRecorder, StatusSample};
pub use profile::{ProfileSequence, ProfileStep};
