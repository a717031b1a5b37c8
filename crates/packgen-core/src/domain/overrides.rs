//! Caller-supplied configuration overrides.
//!
//! Overrides always win over whatever the loader resolved, regardless of
//! provenance. Each field carries three-way optionality:
//!
//! - `None` — not provided; the resolved value is left untouched;
//! - `Some(vec![])` — explicitly empty; the list is cleared;
//! - `Some(values)` — explicit replacement.
//!
//! Collapsing this to a plain list would silently lose the distinction
//! between "clear" and "leave unchanged", so the `Option` wrapper is part of
//! the contract.

use serde_json::Value;

use crate::domain::config::ResolvedConfig;
use crate::domain::error::DomainError;
use crate::domain::normalize::ensure_string_list;
use crate::domain::release::ReleaseType;

/// Partial overrides, typically built from command-line flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub dependencies: Option<Vec<String>>,
    pub dev_dependencies: Option<Vec<String>>,
    pub run_commands: Option<Vec<String>>,
    pub git_release_enabled: Option<bool>,
    /// Parsed at the boundary; an invalid release type never reaches here.
    pub git_release_type: Option<ReleaseType>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Apply `overrides` onto `config` in place.
///
/// Replaced lists pass through the same trim/dedupe/non-empty validation as
/// loaded config fields, so an override can fail exactly like a config file
/// would.
pub fn apply_overrides(
    config: &mut ResolvedConfig,
    overrides: &ConfigOverrides,
) -> Result<(), DomainError> {
    if let Some(deps) = &overrides.dependencies {
        config.post_install.dependencies = revalidate(deps, "dependencies")?;
    }
    if let Some(dev_deps) = &overrides.dev_dependencies {
        config.post_install.dev_dependencies = revalidate(dev_deps, "devDependencies")?;
    }
    if let Some(run) = &overrides.run_commands {
        config.post_install.run = revalidate(run, "runCommands")?;
    }
    if let Some(enabled) = overrides.git_release_enabled {
        config.git.initial_release.enabled = enabled;
    }
    if let Some(release_type) = overrides.git_release_type {
        config.git.initial_release.release_type = release_type;
    }
    Ok(())
}

fn revalidate(values: &[String], field: &str) -> Result<Vec<String>, DomainError> {
    let array = Value::Array(values.iter().cloned().map(Value::String).collect());
    ensure_string_list(&array, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ResolvedConfig;

    fn config_with_deps(deps: &[&str]) -> ResolvedConfig {
        let mut config = ResolvedConfig::builtin();
        config.post_install.dependencies = deps.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn absent_field_leaves_resolved_value() {
        let mut config = config_with_deps(&["a", "b"]);
        apply_overrides(&mut config, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.post_install.dependencies, vec!["a", "b"]);
    }

    #[test]
    fn explicit_empty_clears_the_list() {
        let mut config = config_with_deps(&["a", "b"]);
        let overrides = ConfigOverrides {
            dependencies: Some(Vec::new()),
            ..Default::default()
        };
        apply_overrides(&mut config, &overrides).unwrap();
        assert!(config.post_install.dependencies.is_empty());
    }

    #[test]
    fn explicit_values_replace_after_dedup_and_trim() {
        let mut config = config_with_deps(&["a"]);
        let overrides = ConfigOverrides {
            dependencies: Some(vec![" foo ".into(), "bar".into(), "foo".into()]),
            ..Default::default()
        };
        apply_overrides(&mut config, &overrides).unwrap();
        assert_eq!(config.post_install.dependencies, vec!["foo", "bar"]);
    }

    #[test]
    fn run_override_clears_all_commands() {
        let mut config = ResolvedConfig::builtin();
        assert!(!config.post_install.run.is_empty());
        let overrides = ConfigOverrides {
            run_commands: Some(Vec::new()),
            ..Default::default()
        };
        apply_overrides(&mut config, &overrides).unwrap();
        assert!(config.post_install.run.is_empty());
    }

    #[test]
    fn git_flags_replace_when_present() {
        let mut config = ResolvedConfig::builtin();
        let overrides = ConfigOverrides {
            git_release_enabled: Some(false),
            git_release_type: Some(ReleaseType::Minor),
            ..Default::default()
        };
        apply_overrides(&mut config, &overrides).unwrap();
        assert!(!config.git.initial_release.enabled);
        assert_eq!(config.git.initial_release.release_type, ReleaseType::Minor);
    }

    #[test]
    fn blank_override_entry_fails_validation() {
        let mut config = ResolvedConfig::builtin();
        let overrides = ConfigOverrides {
            dev_dependencies: Some(vec!["ok".into(), "  ".into()]),
            ..Default::default()
        };
        let err = apply_overrides(&mut config, &overrides).unwrap_err();
        assert!(err.to_string().contains("devDependencies"));
    }
}
