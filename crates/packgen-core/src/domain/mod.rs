//! Domain layer: configuration model, normalization, merge, overrides, and
//! the package manifest. Pure logic — no filesystem, subprocess, or network
//! access lives here.

pub mod config;
pub mod error;
pub mod manifest;
pub mod merge;
pub mod normalize;
pub mod overrides;
pub mod release;

pub use config::{
    CONFIG_FILENAME, ConfigSource, GitConfig, InitialRelease, LoadedConfig, PostInstallConfig,
    RELEASE_COMMIT_TEMPLATE, RawConfig, ResolvedConfig,
};
pub use error::DomainError;
pub use manifest::PackageManifest;
pub use merge::deep_merge;
pub use normalize::normalize;
pub use overrides::{ConfigOverrides, apply_overrides};
pub use release::ReleaseType;
