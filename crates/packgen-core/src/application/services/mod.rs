//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "load the effective config" or "apply
//! post-install dependencies".

pub mod config_service;
pub mod post_install;
pub mod release_gate;

pub use config_service::ConfigService;
pub use post_install::PostInstallService;
pub use release_gate::{GateOutcome, ReleaseGate};
