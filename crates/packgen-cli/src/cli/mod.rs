//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use packgen_core::domain::{ConfigOverrides, ReleaseType};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "packgen",
    bin_name = "packgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4e6} Scaffold and synchronize npm packages",
    long_about = "Packgen creates and synchronizes npm package structures \
                  from template modules, resolves dependency versions, and \
                  optionally performs a guarded first release.",
    after_help = "EXAMPLES:\n\
        \x20 packgen init my-lib --modules base,release\n\
        \x20 packgen init my-lib --dependency left-pad --no-run\n\
        \x20 packgen sync --release-type minor\n\
        \x20 packgen completions bash > /usr/share/bash-completion/completions/packgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new package from template modules.
    #[command(
        visible_alias = "i",
        about = "Create a new package",
        after_help = "EXAMPLES:\n\
            \x20 packgen init my-lib\n\
            \x20 packgen init my-lib --description 'JSON helpers'\n\
            \x20 packgen init --target ../my-lib --modules base,hooks"
    )]
    Init(InitArgs),

    /// Re-apply template modules to an existing package.
    #[command(
        about = "Synchronize an existing package",
        after_help = "EXAMPLES:\n\
            \x20 packgen sync\n\
            \x20 packgen sync --target ../my-lib --modules base\n\
            \x20 packgen sync --skip-install"
    )]
    Sync(SyncArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 packgen completions bash > ~/.local/share/bash-completion/completions/packgen\n\
            \x20 packgen completions zsh  > ~/.zfunc/_packgen\n\
            \x20 packgen completions fish > ~/.config/fish/completions/packgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `packgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Package name.  Defaults to the target directory's name.
    #[arg(value_name = "NAME", help = "Package name (defaults to directory name)")]
    pub name: Option<String>,

    /// Package description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Package description"
    )]
    pub description: Option<String>,

    /// Target directory.  Defaults to `./NAME` (or the current directory
    /// when no name is given).
    #[arg(
        short = 't',
        long = "target",
        value_name = "DIR",
        help = "Target directory"
    )]
    pub target: Option<PathBuf>,

    /// Template modules to apply.
    #[arg(
        short = 'm',
        long = "modules",
        value_name = "IDS",
        value_delimiter = ',',
        help = "Comma-separated module list (default: from config)"
    )]
    pub modules: Vec<String>,

    /// Proceed even when the target directory is not empty.
    #[arg(short = 'f', long = "force", help = "Allow a non-empty target directory")]
    pub force: bool,

    /// Config override flags.
    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Skip dependency resolution and post-install commands.
    #[arg(
        long = "skip-install",
        help = "Skip dependency resolution and post-install commands"
    )]
    pub skip_install: bool,
}

// ── sync ──────────────────────────────────────────────────────────────────────

/// Arguments for `packgen sync`.
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Target directory.
    #[arg(
        short = 't',
        long = "target",
        value_name = "DIR",
        help = "Target directory (default: current directory)"
    )]
    pub target: Option<PathBuf>,

    /// Template modules to apply.
    #[arg(
        short = 'm',
        long = "modules",
        value_name = "IDS",
        value_delimiter = ',',
        help = "Comma-separated module list (default: from config)"
    )]
    pub modules: Vec<String>,

    /// Config override flags.
    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Skip dependency resolution and post-install commands.
    #[arg(
        long = "skip-install",
        help = "Skip dependency resolution and post-install commands"
    )]
    pub skip_install: bool,
}

// ── override flags ────────────────────────────────────────────────────────────

/// Config override flags shared by `init` and `sync`.
///
/// Each list has three states: absent (keep the config value), cleared
/// (`--no-*`), or replaced (one or more value flags).
#[derive(Debug, Args, Default)]
pub struct OverrideArgs {
    /// Replace the configured dependency list.
    #[arg(
        long = "dependency",
        value_name = "PKG",
        help = "Dependency to install (repeatable, replaces config list)"
    )]
    pub dependency: Vec<String>,

    /// Clear the configured dependency list.
    #[arg(
        long = "no-dependencies",
        conflicts_with = "dependency",
        help = "Install no dependencies"
    )]
    pub no_dependencies: bool,

    /// Replace the configured dev-dependency list.
    #[arg(
        long = "dev-dependency",
        value_name = "PKG",
        help = "Dev dependency to install (repeatable, replaces config list)"
    )]
    pub dev_dependency: Vec<String>,

    /// Clear the configured dev-dependency list.
    #[arg(
        long = "no-dev-dependencies",
        conflicts_with = "dev_dependency",
        help = "Install no dev dependencies"
    )]
    pub no_dev_dependencies: bool,

    /// Replace the configured post-install command list.
    #[arg(
        long = "run",
        value_name = "CMD",
        help = "Post-install command (repeatable, replaces config list)"
    )]
    pub run: Vec<String>,

    /// Clear the configured post-install command list.
    #[arg(
        long = "no-run",
        conflicts_with = "run",
        help = "Run no post-install commands"
    )]
    pub no_run: bool,

    /// Enable or disable the initial release.
    #[arg(
        long = "git-release",
        value_name = "BOOL",
        help = "Enable or disable the initial git release"
    )]
    pub git_release: Option<bool>,

    /// Release type for the initial release.
    #[arg(
        long = "release-type",
        value_name = "TYPE",
        help = "Release type (major, minor, patch, premajor, preminor, prepatch, prerelease)"
    )]
    pub release_type: Option<ReleaseType>,
}

impl OverrideArgs {
    /// Translate flag state into the domain's three-way override model.
    pub fn to_overrides(&self) -> ConfigOverrides {
        fn three_way(values: &[String], clear: bool) -> Option<Vec<String>> {
            if clear {
                Some(Vec::new())
            } else if values.is_empty() {
                None
            } else {
                Some(values.to_vec())
            }
        }

        ConfigOverrides {
            dependencies: three_way(&self.dependency, self.no_dependencies),
            dev_dependencies: three_way(&self.dev_dependency, self.no_dev_dependencies),
            run_commands: three_way(&self.run, self.no_run),
            git_release_enabled: self.git_release,
            git_release_type: self.release_type,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `packgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
