//! Burn-in cycling
//!
//! This module holds the run parameters and the runner that walks the
//! profile sequence against a controller.

pub mod params;
pub mod runner;

pub use params::RunParameters;
pub use runner::{BurnInRunner, RunReport};
