//! `packgen init` — scaffold a new package.

use std::path::PathBuf;

use packgen_core::domain::PackageManifest;

use crate::{
    cli::{GlobalArgs, InitArgs},
    commands::{PipelineContext, run_pipeline},
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

const DEFAULT_DESCRIPTION: &str = "Generated with packgen";
const INITIAL_VERSION: &str = "0.1.0";

pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    // A plain name creates `./name`; --target overrides; neither means the
    // current directory.
    let target: PathBuf = match (&args.target, &args.name) {
        (Some(target), _) => target.clone(),
        (None, Some(name)) => PathBuf::from(name),
        (None, None) => PathBuf::from("."),
    };
    let package_name = match &args.name {
        Some(name) => name.clone(),
        None => directory_name(&target)?,
    };

    output.info(&format!("Scaffolding {package_name}..."))?;

    std::fs::create_dir_all(&target)
        .with_cli_context(|| format!("Failed to create '{}'", target.display()))?;
    ensure_target_empty(&target, args.force)?;

    let description = args.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);
    let manifest_path = target.join("package.json");
    let manifest = if manifest_path.exists() {
        let text = std::fs::read_to_string(&manifest_path)
            .with_cli_context(|| format!("Failed to read '{}'", manifest_path.display()))?;
        let mut manifest =
            PackageManifest::parse(&text).map_err(packgen_core::error::PackgenError::from)?;
        manifest.name_or(&package_name);
        manifest.description_or(description);
        manifest
    } else {
        PackageManifest::new(&package_name, INITIAL_VERSION, description)
    };

    let ctx = PipelineContext {
        target: &target,
        modules: &args.modules,
        overrides: &args.overrides,
        skip_install: args.skip_install,
        global: &global,
        output: &output,
    };
    run_pipeline(&ctx, manifest)?;

    output.success(&format!("Created package at {}", target.display()))?;
    Ok(())
}

/// The directory's file name, used as the default package name.
fn directory_name(target: &std::path::Path) -> CliResult<String> {
    let absolute = std::path::absolute(target)
        .with_cli_context(|| format!("Failed to resolve '{}'", target.display()))?;
    absolute
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("cannot derive a package name from '{}'", target.display()),
        })
}

/// Reject a non-empty target unless --force was given.
fn ensure_target_empty(target: &std::path::Path, force: bool) -> CliResult<()> {
    if force {
        return Ok(());
    }
    let mut entries = std::fs::read_dir(target)
        .with_cli_context(|| format!("Failed to read '{}'", target.display()))?;
    if entries.next().is_some() {
        return Err(CliError::TargetNotEmpty {
            path: target.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_directory_passes_the_emptiness_check() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_target_empty(dir.path(), false).is_ok());
    }

    #[test]
    fn non_empty_directory_requires_force() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("existing.txt"), "x").unwrap();
        let err = ensure_target_empty(dir.path(), false).unwrap_err();
        assert!(matches!(err, CliError::TargetNotEmpty { .. }));
        assert!(ensure_target_empty(dir.path(), true).is_ok());
    }

    #[test]
    fn package_name_defaults_to_directory_name() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("my-lib");
        std::fs::create_dir(&target).unwrap();
        assert_eq!(directory_name(&target).unwrap(), "my-lib");
    }
}
