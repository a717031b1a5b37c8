//! Raw → resolved config normalization.
//!
//! Normalization starts from the builtin baseline and overlays each top-level
//! field present in the raw input independently: `modules` replaces the
//! baseline wholesale once validated, while `postInstall` and `git` are
//! merged key-by-key against the baseline sub-structure. Validation is
//! fail-fast: the first malformed field aborts with an error naming it.

use serde_json::Value;

use crate::domain::config::{RawConfig, RawGit, RawPostInstall, ResolvedConfig};
use crate::domain::error::DomainError;
use crate::domain::release::ReleaseType;

/// Validate a JSON value documented as a string list.
///
/// Entries are trimmed; empty strings and non-strings fail naming `field`;
/// duplicates are removed preserving first-occurrence order.
pub fn ensure_string_list(value: &Value, field: &str) -> Result<Vec<String>, DomainError> {
    let Value::Array(entries) = value else {
        return Err(DomainError::NotStringList {
            field: field.to_string(),
        });
    };

    let mut out: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        let Value::String(s) = entry else {
            return Err(DomainError::NonStringEntry {
                field: field.to_string(),
            });
        };
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyEntry {
                field: field.to_string(),
            });
        }
        if !out.iter().any(|existing| existing == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    Ok(out)
}

/// Normalize the `postInstall.run` field: absent → empty, a single string →
/// one-element list (empty if blank), an array → validated string list.
pub fn normalize_run(value: Option<&Value>) -> Result<Vec<String>, DomainError> {
    match value {
        None => Ok(Vec::new()),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(vec![trimmed.to_string()])
            }
        }
        Some(other) => ensure_string_list(other, "postInstall.run"),
    }
}

/// Overlay a raw config onto the builtin baseline, producing a fully
/// populated [`ResolvedConfig`].
pub fn normalize(raw: &RawConfig) -> Result<ResolvedConfig, DomainError> {
    let mut resolved = ResolvedConfig::builtin();

    if let Some(modules) = &raw.modules {
        resolved.modules = ensure_string_list(modules, "modules")?;
    }

    if let Some(post_install) = &raw.post_install {
        overlay_post_install(&mut resolved, post_install)?;
    }

    if let Some(git) = &raw.git {
        overlay_git(&mut resolved, git)?;
    }

    Ok(resolved)
}

/// Key-by-key overlay of the raw `postInstall` section: only keys present in
/// the raw input replace the baseline value.
fn overlay_post_install(
    resolved: &mut ResolvedConfig,
    raw: &RawPostInstall,
) -> Result<(), DomainError> {
    if let Some(deps) = &raw.dependencies {
        resolved.post_install.dependencies = ensure_string_list(deps, "postInstall.dependencies")?;
    }
    if let Some(dev_deps) = &raw.dev_dependencies {
        resolved.post_install.dev_dependencies =
            ensure_string_list(dev_deps, "postInstall.devDependencies")?;
    }
    if raw.run.is_some() {
        resolved.post_install.run = normalize_run(raw.run.as_ref())?;
    }
    Ok(())
}

/// Overlay the raw `git` section. `initialRelease` accepts a boolean
/// shorthand (sets only `enabled`) or an object with optional
/// `enabled` / `type` keys.
fn overlay_git(resolved: &mut ResolvedConfig, raw: &RawGit) -> Result<(), DomainError> {
    let Some(value) = &raw.initial_release else {
        return Ok(());
    };

    let release = &mut resolved.git.initial_release;
    match value {
        Value::Bool(enabled) => {
            release.enabled = *enabled;
        }
        Value::Object(map) => {
            if let Some(enabled) = map.get("enabled") {
                let Value::Bool(enabled) = enabled else {
                    return Err(DomainError::InvalidShape {
                        field: "git.initialRelease.enabled".into(),
                        expected: "a boolean".into(),
                    });
                };
                release.enabled = *enabled;
            }
            if let Some(release_type) = map.get("type") {
                let Value::String(s) = release_type else {
                    return Err(DomainError::InvalidShape {
                        field: "git.initialRelease.type".into(),
                        expected: "a string release type".into(),
                    });
                };
                release.release_type = s.parse::<ReleaseType>()?;
            }
        }
        _ => {
            return Err(DomainError::InvalidShape {
                field: "git.initialRelease".into(),
                expected: "a boolean or an object".into(),
            });
        }
    }
    Ok(())
}
