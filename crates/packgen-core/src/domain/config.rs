//! Configuration data model.
//!
//! [`RawConfig`] mirrors the on-disk JSON shape with every field optional;
//! fields whose shape cannot be trusted are carried as [`serde_json::Value`]
//! so that violations surface as [`DomainError`]s naming the offending field
//! instead of opaque decode failures. [`ResolvedConfig`] is the fully
//! populated structure the rest of the system consumes — it is never
//! partially defined.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::domain::release::ReleaseType;

/// Well-known config filename, used both for discovery in the target
/// directory and for the file the generator may write back.
pub const CONFIG_FILENAME: &str = "packgen.config.json";

/// Commit message template used by the release gate. The version-control
/// layer substitutes `%s` with the version produced by the bump.
pub const RELEASE_COMMIT_TEMPLATE: &str = "chore: release v%s";

// ── Raw (on-disk) shape ──────────────────────────────────────────────────────

/// Keeps an explicit JSON `null` distinguishable from an absent key: any
/// present value, `null` included, deserializes to `Some`, so shape
/// validation sees it and can reject it naming the field.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Partial configuration as read from external JSON. Every field may be
/// absent, malformed, or well-formed; normalization decides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    /// Template module ids. Shape-checked by normalization.
    #[serde(default, deserialize_with = "present")]
    pub modules: Option<Value>,

    #[serde(rename = "postInstall")]
    pub post_install: Option<RawPostInstall>,

    pub git: Option<RawGit>,
}

/// Raw `postInstall` section. Presence of a key (even with an empty array)
/// replaces the corresponding baseline value; absence leaves it alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPostInstall {
    #[serde(default, deserialize_with = "present")]
    pub dependencies: Option<Value>,

    #[serde(rename = "devDependencies", default, deserialize_with = "present")]
    pub dev_dependencies: Option<Value>,

    /// Accepts a single string or an array of strings.
    #[serde(default, deserialize_with = "present")]
    pub run: Option<Value>,
}

/// Raw `git` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGit {
    /// Boolean shorthand or `{ enabled?, type? }` object.
    #[serde(rename = "initialRelease", default, deserialize_with = "present")]
    pub initial_release: Option<Value>,
}

// ── Resolved shape ───────────────────────────────────────────────────────────

/// Fully validated, merge-complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Ordered, deduplicated template module ids.
    pub modules: Vec<String>,

    #[serde(rename = "postInstall")]
    pub post_install: PostInstallConfig,

    pub git: GitConfig,
}

/// Resolved post-install section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostInstallConfig {
    /// Runtime dependency names, ordered and deduplicated.
    pub dependencies: Vec<String>,

    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Vec<String>,

    /// Shell commands to run after generation. Order is observable, so this
    /// is an ordered sequence with exact-match duplicates removed.
    pub run: Vec<String>,
}

/// Resolved git section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GitConfig {
    #[serde(rename = "initialRelease")]
    pub initial_release: InitialRelease,
}

/// Whether (and how) the release gate may run after generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitialRelease {
    pub enabled: bool,

    #[serde(rename = "type")]
    pub release_type: ReleaseType,
}

impl ResolvedConfig {
    /// The built-in default configuration.
    ///
    /// Constructed fresh on every call so no caller can mutate state shared
    /// with another call site.
    pub fn builtin() -> Self {
        Self {
            modules: vec!["base".into(), "hooks".into(), "release".into()],
            post_install: PostInstallConfig {
                dependencies: Vec::new(),
                dev_dependencies: Vec::new(),
                run: vec![
                    "npm install".into(),
                    "npm run format".into(),
                    "npm run lint -- --fix".into(),
                    "npm run prepare".into(),
                ],
            },
            git: GitConfig {
                initial_release: InitialRelease {
                    enabled: true,
                    release_type: ReleaseType::Patch,
                },
            },
        }
    }
}

// ── Provenance ───────────────────────────────────────────────────────────────

/// Where a loaded configuration came from. Gates whether the config file is
/// later persisted to the target: only `Builtin` configs are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path passed explicitly by the caller.
    Explicit,
    /// `packgen.config.json` found in the search directory.
    Local,
    /// Built-in defaults; no file existed.
    Builtin,
}

impl ConfigSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Local => "local",
            Self::Builtin => "builtin",
        }
    }
}

/// A resolved configuration together with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ResolvedConfig,
    pub source: ConfigSource,
    /// Path the config was read from; `None` for builtin defaults.
    pub path: Option<PathBuf>,
}
