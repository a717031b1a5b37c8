//! Domain-level errors: configuration shape violations and malformed
//! manifests. All are fatal and raised before any mutation.

use thiserror::Error;

use crate::domain::release::ReleaseType;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Config validation errors
    // ========================================================================
    #[error("{field} must be an array of strings")]
    NotStringList { field: String },

    #[error("{field} must contain only strings")]
    NonStringEntry { field: String },

    #[error("{field} cannot contain empty strings")]
    EmptyEntry { field: String },

    #[error("{field} must be {expected}")]
    InvalidShape { field: String, expected: String },

    #[error(
        "invalid release type '{value}'; allowed values: \
         major, minor, patch, premajor, preminor, prepatch, prerelease"
    )]
    InvalidReleaseType { value: String },

    // ========================================================================
    // Manifest errors
    // ========================================================================
    #[error("package manifest is not a JSON object")]
    ManifestNotObject,

    #[error("failed to parse package manifest: {reason}")]
    ManifestParse { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotStringList { field }
            | Self::NonStringEntry { field }
            | Self::EmptyEntry { field } => vec![
                format!("Fix the '{}' field in your config file", field),
                "String lists must be JSON arrays of non-empty strings".into(),
            ],
            Self::InvalidShape { field, expected } => {
                vec![format!("The '{}' field must be {}", field, expected)]
            }
            Self::InvalidReleaseType { .. } => {
                vec![format!("Use one of: {}", ReleaseType::allowed_values())]
            }
            Self::ManifestNotObject | Self::ManifestParse { .. } => vec![
                "Check that package.json contains a single JSON object".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestNotObject | Self::ManifestParse { .. } => ErrorCategory::Manifest,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Manifest,
}
