//! Application layer for packgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ConfigService, PostInstallService,
//!   ReleaseGate)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ConfigService, GateOutcome, PostInstallService, ReleaseGate};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, FnResolver, GitClient, StatusEntry, VersionResolver};

pub use error::ApplicationError;
