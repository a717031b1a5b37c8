//! Packgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the packgen
//! package scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           packgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ConfigService, PostInstallService,     │
//! │  ReleaseGate) — orchestrate use cases   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, VersionResolver, GitClient,│
//! │  CommandRunner)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    packgen-adapters (Infrastructure)    │
//! │  (LocalFilesystem, GitCli, NpmVersion-  │
//! │   Resolver, ShellRunner)                │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (ResolvedConfig, PackageManifest,       │
//! │  deep_merge) — No External Dependencies │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use packgen_core::{
//!     application::ConfigService,
//!     domain::{ConfigOverrides, apply_overrides},
//! };
//! # fn filesystem() -> Box<dyn packgen_core::application::Filesystem> { unimplemented!() }
//!
//! // 1. Load the effective config (explicit > local > builtin)
//! let service = ConfigService::new(filesystem());
//! let mut loaded = service.load(None, Path::new(".")).unwrap();
//!
//! // 2. Apply command-line overrides on top
//! let overrides = ConfigOverrides::default();
//! apply_overrides(&mut loaded.config, &overrides).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigService, GateOutcome, PostInstallService, ReleaseGate,
        ports::{CommandRunner, Filesystem, FnResolver, GitClient, StatusEntry, VersionResolver},
    };
    pub use crate::domain::{
        CONFIG_FILENAME, ConfigOverrides, ConfigSource, GitConfig, InitialRelease, LoadedConfig,
        PackageManifest, PostInstallConfig, RELEASE_COMMIT_TEMPLATE, RawConfig, ReleaseType,
        ResolvedConfig, apply_overrides, deep_merge, normalize,
    };
    pub use crate::error::{PackgenError, PackgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
