//! `packgen sync` — re-apply template modules to an existing package.

use std::path::PathBuf;

use packgen_core::domain::PackageManifest;

use crate::{
    cli::{GlobalArgs, SyncArgs},
    commands::{PipelineContext, run_pipeline},
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

pub fn execute(args: SyncArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let target: PathBuf = args.target.clone().unwrap_or_else(|| PathBuf::from("."));

    // Sync never creates the package; a missing manifest is a hard stop.
    let manifest_path = target.join("package.json");
    if !manifest_path.exists() {
        return Err(CliError::ManifestMissing {
            path: manifest_path,
        });
    }

    let text = std::fs::read_to_string(&manifest_path)
        .with_cli_context(|| format!("Failed to read '{}'", manifest_path.display()))?;
    let mut manifest =
        PackageManifest::parse(&text).map_err(packgen_core::error::PackgenError::from)?;
    if let Some(name) = directory_name(&target) {
        manifest.name_or(&name);
    }

    output.info(&format!("Synchronizing {}...", target.display()))?;

    let ctx = PipelineContext {
        target: &target,
        modules: &args.modules,
        overrides: &args.overrides,
        skip_install: args.skip_install,
        global: &global,
        output: &output,
    };
    run_pipeline(&ctx, manifest)?;

    output.success(&format!(
        "Synchronized {}. Review changes before committing.",
        target.display()
    ))?;
    Ok(())
}

/// The directory's file name, used when the manifest lacks a name.
fn directory_name(target: &std::path::Path) -> Option<String> {
    std::path::absolute(target)
        .ok()?
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
}
