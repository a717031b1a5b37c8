//! Post-install dependency resolution and command execution.
//!
//! Dependency resolution is atomic with respect to partial failure: every
//! missing dependency is resolved and staged first, and the manifest is
//! mutated only once the whole batch has succeeded. A single lookup failure
//! therefore leaves the manifest exactly as it was.

use std::path::Path;
use tracing::{debug, info};

use crate::application::ports::{CommandRunner, VersionResolver};
use crate::domain::{PackageManifest, ResolvedConfig};
use crate::error::PackgenResult;

/// Applies the resolved `postInstall` section to a package manifest and
/// runs the configured post-install commands.
pub struct PostInstallService {
    resolver: Box<dyn VersionResolver>,
    runner: Box<dyn CommandRunner>,
}

impl PostInstallService {
    pub fn new(resolver: Box<dyn VersionResolver>, runner: Box<dyn CommandRunner>) -> Self {
        Self { resolver, runner }
    }

    /// Resolve and stage versions for every declared dependency not already
    /// present in the manifest, then apply the whole batch.
    ///
    /// Dependencies are resolved before dev-dependencies, each in
    /// declaration order. Entries already present are never overwritten and
    /// their versions are never looked up, so repeated runs are idempotent.
    pub fn apply(
        &self,
        manifest: &mut PackageManifest,
        config: &ResolvedConfig,
    ) -> PackgenResult<()> {
        let mut staged_deps: Vec<(String, String)> = Vec::new();
        let mut staged_dev_deps: Vec<(String, String)> = Vec::new();

        for name in &config.post_install.dependencies {
            if manifest.has_entry("dependencies", name) {
                debug!(package = %name, "dependency already present, skipping");
                continue;
            }
            staged_deps.push((name.clone(), self.resolve_spec(name)?));
        }
        for name in &config.post_install.dev_dependencies {
            if manifest.has_entry("devDependencies", name) {
                debug!(package = %name, "dev dependency already present, skipping");
                continue;
            }
            staged_dev_deps.push((name.clone(), self.resolve_spec(name)?));
        }

        // Batch apply: nothing above touched the manifest, so a resolution
        // failure cannot leave it partially updated.
        for (name, spec) in &staged_deps {
            info!(package = %name, spec = %spec, "adding dependency");
        }
        for (name, spec) in &staged_dev_deps {
            info!(package = %name, spec = %spec, "adding dev dependency");
        }
        manifest.add_entries("dependencies", &staged_deps);
        manifest.add_entries("devDependencies", &staged_dev_deps);
        Ok(())
    }

    /// Run the configured post-install commands strictly in order.
    ///
    /// Blank commands are skipped; the first non-zero exit aborts the
    /// remainder of the list.
    pub fn run_commands(&self, commands: &[String], cwd: &Path) -> PackgenResult<()> {
        for command in commands {
            if command.trim().is_empty() {
                continue;
            }
            info!(command = %command, "running post-install command");
            self.runner.run(command, cwd)?;
        }
        Ok(())
    }

    fn resolve_spec(&self, package: &str) -> PackgenResult<String> {
        let version = self.resolver.resolve(package)?;
        Ok(format!("^{version}"))
    }
}
