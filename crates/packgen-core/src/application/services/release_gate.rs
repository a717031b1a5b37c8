//! Initial-release safety gate.
//!
//! A chain of guards decides whether an automatic first release is safe to
//! perform. Every guard short-circuits with a skip outcome rather than an
//! error; only the release action itself can fail the run. A failure partway
//! through the action is reported as-is and never rolled back.

use std::path::Path;
use tracing::{info, warn};

use crate::application::ports::GitClient;
use crate::domain::{CONFIG_FILENAME, GitConfig, RELEASE_COMMIT_TEMPLATE};
use crate::error::PackgenResult;

/// Result of running the release gate. Every variant except
/// [`GateOutcome::Released`] means the release was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Initial release is disabled in the config.
    Disabled,
    /// The target directory is not inside a git repository.
    NotRepository,
    /// No remote is configured, so there is nowhere to push.
    NoRemote,
    /// The working-tree status could not be determined.
    StatusUnavailable,
    /// Files other than the generator's own config file are uncommitted.
    DirtyDisallowed {
        /// Up to the first five offending paths.
        paths: Vec<String>,
        /// How many further offending paths were not listed.
        remainder: usize,
    },
    /// Only the generator's config file is uncommitted. The gate never
    /// commits that file on the user's behalf.
    DirtyConfigOnly,
    /// Version bumped, committed, tagged, and pushed.
    Released { version: String },
}

impl GateOutcome {
    pub fn is_released(&self) -> bool {
        matches!(self, Self::Released { .. })
    }
}

/// Runs the guarded initial release over a [`GitClient`] port.
pub struct ReleaseGate {
    git: Box<dyn GitClient>,
}

impl ReleaseGate {
    pub fn new(git: Box<dyn GitClient>) -> Self {
        Self { git }
    }

    /// Evaluate the guard chain for `target` and, if every guard passes,
    /// perform the release.
    ///
    /// Guards run in a fixed order: enabled, repository, remotes, status,
    /// working-tree cleanliness. Each failed guard logs and returns its skip
    /// outcome. The release action is bump, push, push tags, in that order;
    /// an error there propagates and completed steps stay in place.
    pub fn run(&self, target: &Path, git_config: &GitConfig) -> PackgenResult<GateOutcome> {
        if !git_config.initial_release.enabled {
            info!("initial release disabled, skipping");
            return Ok(GateOutcome::Disabled);
        }

        if !self.git.is_repository(target) {
            warn!(path = %target.display(), "not a git repository, skipping release");
            return Ok(GateOutcome::NotRepository);
        }

        match self.git.remotes(target) {
            Ok(remotes) if remotes.is_empty() => {
                warn!("no git remote configured, skipping release");
                return Ok(GateOutcome::NoRemote);
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "could not list git remotes, skipping release");
                return Ok(GateOutcome::NoRemote);
            }
        }

        let entries = match self.git.status(target) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "could not read git status, skipping release");
                return Ok(GateOutcome::StatusUnavailable);
            }
        };

        let disallowed: Vec<String> = entries
            .iter()
            .filter(|entry| entry.path != CONFIG_FILENAME)
            .map(|entry| entry.path.clone())
            .collect();
        if !disallowed.is_empty() {
            let remainder = disallowed.len().saturating_sub(5);
            let paths: Vec<String> = disallowed.into_iter().take(5).collect();
            warn!(
                paths = ?paths,
                remainder,
                "uncommitted changes present, skipping release"
            );
            return Ok(GateOutcome::DirtyDisallowed { paths, remainder });
        }
        if !entries.is_empty() {
            warn!(
                "only {} is uncommitted, commit it and release manually",
                CONFIG_FILENAME
            );
            return Ok(GateOutcome::DirtyConfigOnly);
        }

        let release_type = git_config.initial_release.release_type;
        info!(%release_type, "performing initial release");
        let version = self
            .git
            .bump_version(target, release_type, RELEASE_COMMIT_TEMPLATE)?;
        self.git.push(target)?;
        self.git.push_tags(target)?;
        info!(%version, "initial release pushed");
        Ok(GateOutcome::Released { version })
    }
}
