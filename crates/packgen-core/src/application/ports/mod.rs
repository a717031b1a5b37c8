//! Driven (output) ports — implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `packgen-adapters` crate provides the production implementations.

use std::path::Path;

use crate::domain::ReleaseType;
use crate::error::PackgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `packgen_adapters::filesystem::LocalFilesystem` (production)
/// - `packgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> PackgenResult<String>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> PackgenResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PackgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for resolving the currently published version of a package.
///
/// Implemented by `packgen_adapters::NpmVersionResolver` (production).
/// The returned version carries no leading range operator; callers decide
/// how to format it into a version spec.
#[cfg_attr(test, mockall::automock)]
pub trait VersionResolver: Send + Sync {
    fn resolve(&self, package: &str) -> PackgenResult<String>;
}

/// One working-tree status entry: a porcelain status code and the path it
/// applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Two-character porcelain code, e.g. `" M"` or `"??"`.
    pub code: String,
    pub path: String,
}

impl StatusEntry {
    pub fn new(code: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            path: path.into(),
        }
    }
}

/// Port for version-control operations used by the release gate.
///
/// Implemented by `packgen_adapters::GitCli` (subprocess `git` + `npm`).
pub trait GitClient: Send + Sync {
    /// Whether `cwd` is inside a version-controlled repository.
    fn is_repository(&self, cwd: &Path) -> bool;

    /// Names of configured remotes.
    fn remotes(&self, cwd: &Path) -> PackgenResult<Vec<String>>;

    /// Porcelain-style working-tree status.
    fn status(&self, cwd: &Path) -> PackgenResult<Vec<StatusEntry>>;

    /// Combined primitive: bump the version per `release_type`, commit with
    /// `message_template` (`%s` is replaced by the new version), and tag.
    /// Returns the resulting version string.
    fn bump_version(
        &self,
        cwd: &Path,
        release_type: ReleaseType,
        message_template: &str,
    ) -> PackgenResult<String>;

    /// Push commits to the default remote.
    fn push(&self, cwd: &Path) -> PackgenResult<()>;

    /// Push tags to the default remote.
    fn push_tags(&self, cwd: &Path) -> PackgenResult<()>;
}

/// Port for running a post-install shell command to completion.
///
/// Implemented by `packgen_adapters::ShellRunner`.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str, cwd: &Path) -> PackgenResult<()>;
}

/// Wraps a closure as a [`VersionResolver`], for tests and embedders.
pub struct FnResolver<F>(pub F);

impl<F> VersionResolver for FnResolver<F>
where
    F: Fn(&str) -> PackgenResult<String> + Send + Sync,
{
    fn resolve(&self, package: &str) -> PackgenResult<String> {
        (self.0)(package)
    }
}
