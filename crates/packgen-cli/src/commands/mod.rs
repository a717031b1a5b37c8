//! Command handlers and the shared scaffolding pipeline.

pub mod completions;
pub mod init;
pub mod sync;

use std::path::Path;

use tracing::{debug, info};

use packgen_core::application::{ConfigService, PostInstallService, ReleaseGate};
use packgen_core::application::services::GateOutcome;
use packgen_core::domain::{PackageManifest, apply_overrides};
use packgen_adapters::{GitCli, LocalFilesystem, NpmVersionResolver, ShellRunner};

use crate::cli::{GlobalArgs, OverrideArgs};
use crate::error::CliResult;
use crate::modules::resolve_modules;
use crate::output::OutputManager;

/// Everything the shared pipeline needs besides the manifest itself.
pub(crate) struct PipelineContext<'a> {
    pub target: &'a Path,
    pub modules: &'a [String],
    pub overrides: &'a OverrideArgs,
    pub skip_install: bool,
    pub global: &'a GlobalArgs,
    pub output: &'a OutputManager,
}

/// The pipeline both `init` and `sync` share once a manifest exists:
/// config load, overrides, module fragments, dependency resolution,
/// manifest write-back, post-install commands, release gate.
pub(crate) fn run_pipeline(
    ctx: &PipelineContext<'_>,
    mut manifest: PackageManifest,
) -> CliResult<()> {
    let config_service = ConfigService::new(Box::new(LocalFilesystem::new()));
    let mut loaded = config_service.load(ctx.global.config.as_deref(), ctx.target)?;
    debug!(source = loaded.source.as_str(), "config resolved");

    // Persist builtin defaults before flag overrides touch them, so the
    // package carries its own config from now on; user-authored files are
    // left alone.
    config_service.ensure_config_file(ctx.target, &loaded)?;

    apply_overrides(&mut loaded.config, &ctx.overrides.to_overrides())
        .map_err(packgen_core::error::PackgenError::from)?;

    // Flag list wins over the configured module selection.
    let requested = if ctx.modules.is_empty() {
        loaded.config.modules.clone()
    } else {
        ctx.modules.to_vec()
    };
    let selected = resolve_modules(&requested)?;
    for module in &selected {
        info!(module = module.id, "applying module");
        manifest.merge(&module.manifest_fragment());
    }

    let post_install = PostInstallService::new(
        Box::new(NpmVersionResolver::new(ctx.target)),
        Box::new(ShellRunner::new()),
    );

    if ctx.skip_install {
        info!("skipping dependency resolution (--skip-install)");
    } else {
        post_install.apply(&mut manifest, &loaded.config)?;
    }

    let manifest_path = ctx.target.join("package.json");
    let filesystem = LocalFilesystem::new();
    use packgen_core::application::ports::Filesystem as _;
    filesystem.write_file(&manifest_path, &manifest.to_json_pretty())?;
    ctx.output
        .success(&format!("Wrote {}", manifest_path.display()))?;

    if !ctx.skip_install {
        post_install.run_commands(&loaded.config.post_install.run, ctx.target)?;
    }

    let gate = ReleaseGate::new(Box::new(GitCli::new()));
    let outcome = gate.run(ctx.target, &loaded.config.git)?;
    report_gate_outcome(ctx.output, &outcome)?;

    Ok(())
}

/// Translate the gate outcome into user-facing output.
fn report_gate_outcome(output: &OutputManager, outcome: &GateOutcome) -> CliResult<()> {
    match outcome {
        GateOutcome::Released { version } => {
            output.success(&format!("Released v{version} and pushed tags"))?;
        }
        GateOutcome::Disabled => {
            output.info("Initial release disabled in config")?;
        }
        GateOutcome::NotRepository => {
            output.warning("Not a git repository; skipped the initial release")?;
        }
        GateOutcome::NoRemote => {
            output.warning("No git remote configured; skipped the initial release")?;
        }
        GateOutcome::StatusUnavailable => {
            output.warning("Could not read git status; skipped the initial release")?;
        }
        GateOutcome::DirtyDisallowed { paths, remainder } => {
            output.warning("Uncommitted changes present; skipped the initial release:")?;
            for path in paths {
                output.print(&format!("  {path}"))?;
            }
            if *remainder > 0 {
                output.print(&format!("  ... and {remainder} more"))?;
            }
        }
        GateOutcome::DirtyConfigOnly => {
            output.warning(
                "Only packgen.config.json is uncommitted; commit it and release manually",
            )?;
        }
    }
    Ok(())
}
