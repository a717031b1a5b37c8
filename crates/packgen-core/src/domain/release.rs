//! Release bump categories.
//!
//! # Design
//!
//! `ReleaseType` is a closed enumeration — config values outside the seven
//! semver bump categories are rejected at the boundary with an error that
//! lists every allowed value. Nothing is ever silently coerced.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven semantic-version bump categories accepted by the release gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
    Premajor,
    Preminor,
    Prepatch,
    Prerelease,
}

impl ReleaseType {
    /// All variants, in documentation order. Used for error messages and
    /// CLI value listings.
    pub const ALL: [ReleaseType; 7] = [
        Self::Major,
        Self::Minor,
        Self::Patch,
        Self::Premajor,
        Self::Preminor,
        Self::Prepatch,
        Self::Prerelease,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Premajor => "premajor",
            Self::Preminor => "preminor",
            Self::Prepatch => "prepatch",
            Self::Prerelease => "prerelease",
        }
    }

    /// Comma-separated list of every valid value, for diagnostics.
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            "premajor" => Ok(Self::Premajor),
            "preminor" => Ok(Self::Preminor),
            "prepatch" => Ok(Self::Prepatch),
            "prerelease" => Ok(Self::Prerelease),
            other => Err(DomainError::InvalidReleaseType {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(ReleaseType::Patch.to_string(), "patch");
        assert_eq!(ReleaseType::Premajor.to_string(), "premajor");
    }

    #[test]
    fn from_str_accepts_all_seven() {
        for variant in ReleaseType::ALL {
            assert_eq!(variant.as_str().parse::<ReleaseType>().unwrap(), variant);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "hotfix".parse::<ReleaseType>().unwrap_err();
        let msg = err.to_string();
        // The error must name every allowed value.
        for variant in ReleaseType::ALL {
            assert!(msg.contains(variant.as_str()), "missing {variant} in {msg}");
        }
    }

    #[test]
    fn from_str_is_case_sensitive() {
        // Config values are machine-written JSON; no case folding.
        assert!("Patch".parse::<ReleaseType>().is_err());
    }
}
