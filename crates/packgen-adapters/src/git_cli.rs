//! Git adapter backed by the `git` and `npm` command-line tools.
//!
//! Provides a safe wrapper around subprocess invocations with captured
//! stdout/stderr and structured error handling. All version-control
//! operations go through this module.

use std::path::Path;
use std::process::{Command, Output};

use packgen_core::application::ApplicationError;
use packgen_core::application::ports::{GitClient, StatusEntry};
use packgen_core::domain::ReleaseType;
use packgen_core::error::PackgenResult;
use tracing::debug;

/// Result of a successful subprocess execution.
#[derive(Debug, Clone)]
struct CommandOutput {
    /// Standard output from the command (trimmed).
    stdout: String,
    /// Standard error from the command (trimmed).
    stderr: String,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a subprocess with the given working directory, failing on non-zero
/// exit.
fn run_tool(tool: &str, cwd: &Path, args: &[&str]) -> PackgenResult<CommandOutput> {
    debug!(%tool, ?args, cwd = %cwd.display(), "running subprocess");
    let output = Command::new(tool)
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| ApplicationError::Git {
            reason: format!(
                "failed to execute {} {}: {}",
                tool,
                args.first().unwrap_or(&""),
                e
            ),
        })?;

    let captured = CommandOutput::from_output(&output);

    if output.status.success() {
        Ok(captured)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if captured.stderr.is_empty() {
            captured.stdout.clone()
        } else {
            captured.stderr.clone()
        };
        Err(ApplicationError::Git {
            reason: format!(
                "{} {} failed (exit code {}): {}",
                tool,
                args.first().unwrap_or(&""),
                exit_code,
                error_msg
            ),
        }
        .into())
    }
}

/// Parse `git status --porcelain` output into status entries.
///
/// Each line is a two-character code, a space, and the path. Rename lines
/// carry `old -> new`; the new path is the one that matters for cleanliness
/// checks.
fn parse_porcelain_status(text: &str) -> Vec<StatusEntry> {
    text.lines()
        .filter(|line| line.len() > 3)
        .map(|line| {
            let code = &line[..2];
            let rest = &line[3..];
            let path = match rest.split_once(" -> ") {
                Some((_, renamed)) => renamed,
                None => rest,
            };
            StatusEntry::new(code, path)
        })
        .collect()
}

/// Production [`GitClient`] driving the `git` CLI, with the version bump
/// delegated to `npm version` so the commit and tag match npm conventions.
#[derive(Debug, Clone, Copy)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitClient for GitCli {
    fn is_repository(&self, cwd: &Path) -> bool {
        run_tool("git", cwd, &["rev-parse", "--is-inside-work-tree"])
            .map(|out| out.stdout == "true")
            .unwrap_or(false)
    }

    fn remotes(&self, cwd: &Path) -> PackgenResult<Vec<String>> {
        let output = run_tool("git", cwd, &["remote"])?;
        Ok(output.lines().iter().map(|s| s.to_string()).collect())
    }

    fn status(&self, cwd: &Path) -> PackgenResult<Vec<StatusEntry>> {
        let output = run_tool("git", cwd, &["status", "--porcelain"])?;
        Ok(parse_porcelain_status(&output.stdout))
    }

    fn bump_version(
        &self,
        cwd: &Path,
        release_type: ReleaseType,
        message_template: &str,
    ) -> PackgenResult<String> {
        let output = run_tool(
            "npm",
            cwd,
            &["version", release_type.as_str(), "-m", message_template],
        )?;
        // npm prints the new version as `vX.Y.Z` on the last line.
        let last = output.lines().last().map(|s| s.to_string()).ok_or_else(|| {
            ApplicationError::Git {
                reason: "npm version produced no output".into(),
            }
        })?;
        Ok(last.trim_start_matches('v').to_string())
    }

    fn push(&self, cwd: &Path) -> PackgenResult<()> {
        run_tool("git", cwd, &["push"])?;
        Ok(())
    }

    fn push_tags(&self, cwd: &Path) -> PackgenResult<()> {
        run_tool("git", cwd, &["push", "--tags"])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn create_test_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        let run = |args: &[&str]| {
            let status = Command::new("git")
                .current_dir(dir.path())
                .args(args)
                .output()
                .unwrap();
            assert!(status.status.success(), "git {args:?} failed");
        };
        run(&["init", "--quiet"]);
        run(&["config", "user.email", "dev@example.com"]);
        run(&["config", "user.name", "dev"]);
        std::fs::write(dir.path().join("README.md"), "# test\n").unwrap();
        run(&["add", "."]);
        run(&["commit", "--quiet", "-m", "init"]);
        dir
    }

    #[test]
    fn parses_modified_and_untracked_entries() {
        let entries = parse_porcelain_status(" M src/index.ts\n?? packgen.config.json\n");
        assert_eq!(
            entries,
            vec![
                StatusEntry::new(" M", "src/index.ts"),
                StatusEntry::new("??", "packgen.config.json"),
            ]
        );
    }

    #[test]
    fn rename_entries_use_the_new_path() {
        let entries = parse_porcelain_status("R  old.ts -> new.ts\n");
        assert_eq!(entries, vec![StatusEntry::new("R ", "new.ts")]);
    }

    #[test]
    fn blank_and_short_lines_are_ignored() {
        assert!(parse_porcelain_status("").is_empty());
        assert!(parse_porcelain_status("\n\n").is_empty());
    }

    #[test]
    fn detects_repository() {
        let repo = create_test_repo();
        let outside = TempDir::new().unwrap();
        let git = GitCli::new();
        assert!(git.is_repository(repo.path()));
        assert!(!git.is_repository(outside.path()));
    }

    #[test]
    fn clean_repo_has_empty_status_and_no_remotes() {
        let repo = create_test_repo();
        let git = GitCli::new();
        assert!(git.status(repo.path()).unwrap().is_empty());
        assert!(git.remotes(repo.path()).unwrap().is_empty());
    }

    #[test]
    fn status_reports_untracked_files() {
        let repo = create_test_repo();
        std::fs::write(repo.path().join("extra.txt"), "x\n").unwrap();
        let entries = GitCli::new().status(repo.path()).unwrap();
        assert_eq!(entries, vec![StatusEntry::new("??", "extra.txt")]);
    }
}
