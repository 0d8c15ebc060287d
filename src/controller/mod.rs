//! Terrarium controller access
//!
//! The `Controller` trait is what the burn-in runner drives. `HttpController`
//! implements it over the controller's HTTP API.

pub mod error;
pub mod http;
pub mod status;

pub use error::ControllerError;
pub use http::HttpController;
pub use status::ControllerStatus;

use async_trait::async_trait;

use crate::profile::ProfileStep;

/// Operations a burn-in run needs from a controller
#[async_trait]
pub trait Controller: Send + Sync {
    /// Apply a profile step to the given light zone
    async fn push_step(&self, zone: &str, step: &ProfileStep) -> error::Result<()>;

    /// Read the current controller status
    async fn fetch_status(&self) -> error::Result<ControllerStatus>;
}
