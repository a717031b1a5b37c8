//! Shell adapter for post-install commands.

use std::path::Path;
use std::process::Command;

use packgen_core::application::ApplicationError;
use packgen_core::application::ports::CommandRunner;
use packgen_core::error::PackgenResult;
use tracing::debug;

/// Runs post-install commands through `sh -c` with inherited stdio, so the
/// user sees installer output as it happens.
#[derive(Debug, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: &Path) -> PackgenResult<()> {
        debug!(%command, cwd = %cwd.display(), "running shell command");
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .status()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: format!("failed to spawn shell: {e}"),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: format!("exit code {}", status.code().unwrap_or(-1)),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn successful_command_runs_in_cwd() {
        let dir = TempDir::new().unwrap();
        ShellRunner::new().run("touch created.txt", dir.path()).unwrap();
        assert!(dir.path().join("created.txt").exists());
    }

    #[test]
    fn failing_command_reports_exit_code() {
        let dir = TempDir::new().unwrap();
        let err = ShellRunner::new().run("exit 3", dir.path()).unwrap_err();
        assert!(err.to_string().contains("exit code 3"));
    }
}
