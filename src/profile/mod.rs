//! Lighting profiles
//!
//! This module defines the profile steps pushed to the controller and the
//! ordered sequence a burn-in run walks through.

pub mod sequence;
pub mod step;

pub use sequence::ProfileSequence;
pub use step::{CctChannels, ProfileStep, UvaChannel, UvbChannel};
