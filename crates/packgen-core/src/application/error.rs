//! Application layer errors.
//!
//! These errors represent failures in orchestration and at external-effect
//! boundaries, not business logic. Business logic errors are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A config file could not be read or was not valid JSON.
    #[error("failed to read config file at {path}: {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    /// A dependency version lookup failed or returned an unparsable result.
    /// Guaranteed to leave the package manifest untouched.
    #[error("failed to resolve version for '{package}': {reason}")]
    Resolution { package: String, reason: String },

    /// A post-install or git subprocess exited non-zero.
    #[error("command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// A git query or action failed.
    #[error("git error: {reason}")]
    Git { reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigRead { path, .. } => vec![
                format!("Check that {} exists and is valid JSON", path.display()),
            ],
            Self::Resolution { package, .. } => vec![
                format!("Check that '{}' is published and reachable", package),
                "Verify network access to the package registry".into(),
                "No dependencies were written to the manifest".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Command that failed: {}", command),
                "Remaining post-install commands were not run".into(),
            ],
            Self::Git { .. } => vec![
                "Check `git status` in the target directory".into(),
                "A successful local version bump is not rolled back".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigRead { .. } => ErrorCategory::Configuration,
            Self::Resolution { .. } | Self::CommandFailed { .. } | Self::Git { .. } => {
                ErrorCategory::External
            }
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
