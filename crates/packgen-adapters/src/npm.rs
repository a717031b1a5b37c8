//! npm registry adapter for version resolution.

use std::path::Path;
use std::process::Command;

use packgen_core::application::ApplicationError;
use packgen_core::application::ports::VersionResolver;
use packgen_core::error::PackgenResult;
use tracing::debug;

/// Resolves the latest published version of a package via `npm view`.
#[derive(Debug, Clone)]
pub struct NpmVersionResolver {
    cwd: std::path::PathBuf,
}

impl NpmVersionResolver {
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
        }
    }
}

impl VersionResolver for NpmVersionResolver {
    fn resolve(&self, package: &str) -> PackgenResult<String> {
        debug!(%package, "resolving version via npm view");
        let output = Command::new("npm")
            .current_dir(&self.cwd)
            .args(["view", package, "version", "--json"])
            .output()
            .map_err(|e| ApplicationError::Resolution {
                package: package.to_string(),
                reason: format!("failed to execute npm: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ApplicationError::Resolution {
                package: package.to_string(),
                reason: format!(
                    "npm view failed (exit code {}): {}",
                    output.status.code().unwrap_or(-1),
                    stderr
                ),
            }
            .into());
        }

        let payload = String::from_utf8_lossy(&output.stdout);
        parse_version_payload(payload.trim()).map_err(|reason| {
            ApplicationError::Resolution {
                package: package.to_string(),
                reason,
            }
            .into()
        })
    }
}

/// Parse the `npm view <pkg> version --json` payload.
///
/// The payload is a JSON string for an exact match, or a JSON array of
/// versions when the spec matched several; the last array element is the
/// newest.
fn parse_version_payload(payload: &str) -> Result<String, String> {
    if payload.is_empty() {
        return Err("npm view returned no version".into());
    }
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|e| format!("unparsable npm output: {e}"))?;
    match value {
        serde_json::Value::String(version) => Ok(version),
        serde_json::Value::Array(versions) => versions
            .last()
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| "npm view returned an empty version list".into()),
        other => Err(format!("unexpected npm output shape: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_payload_is_the_version() {
        assert_eq!(parse_version_payload(r#""1.2.3""#).unwrap(), "1.2.3");
    }

    #[test]
    fn array_payload_takes_the_last_entry() {
        assert_eq!(
            parse_version_payload(r#"["1.0.0", "1.1.0", "2.0.0"]"#).unwrap(),
            "2.0.0"
        );
    }

    #[test]
    fn empty_and_malformed_payloads_are_rejected() {
        assert!(parse_version_payload("").is_err());
        assert!(parse_version_payload("[]").is_err());
        assert!(parse_version_payload("{\"version\":").is_err());
        assert!(parse_version_payload("42").is_err());
    }
}
