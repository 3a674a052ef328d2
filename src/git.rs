//! # Git Subprocess Operations
//!
//! All version-control work goes through the system `git` command, which
//! automatically handles SSH keys, credential helpers, and personal access
//! tokens configured on the host. Commands are invoked with explicit
//! argument lists and their exit status and stderr are surfaced as typed
//! errors; nothing is ever interpolated into a shell string.
//!
//! The `GitOperations` trait is the seam the pipeline stages depend on, so
//! tests can substitute a recording fake for the real subprocess.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Git operations used by the cloner and the branch resolver.
pub trait GitOperations {
    /// Clone a repository into `target_dir` on its default branch.
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()>;

    /// Check out an existing ref (branch, tag, or commit) in `repo_dir`.
    fn checkout(&self, repo_dir: &Path, ref_name: &str) -> Result<()>;

    /// Create and check out `branch` starting from `start_point`.
    fn checkout_new_branch(&self, repo_dir: &Path, branch: &str, start_point: &str)
        -> Result<()>;
}

/// The default implementation, wrapping the system `git` command.
pub struct SystemGit;

impl SystemGit {
    fn run_checkout(&self, repo_dir: &Path, args: &[&str], ref_name: &str) -> Result<()> {
        let checkout_error = |message: String| Error::GitCheckout {
            repo: repo_dir.display().to_string(),
            r#ref: ref_name.to_string(),
            message,
        };

        let output = Command::new("git")
            .arg("checkout")
            .args(args)
            .current_dir(repo_dir)
            .output()
            .map_err(|e| checkout_error(e.to_string()))?;

        // git reports branch switches on stderr even on success.
        debug!(
            "git checkout in {}: {}",
            repo_dir.display(),
            String::from_utf8_lossy(&output.stderr).trim_end()
        );

        if !output.status.success() {
            return Err(checkout_error(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        Ok(())
    }
}

impl GitOperations for SystemGit {
    fn clone_repo(&self, url: &str, target_dir: &Path) -> Result<()> {
        let clone_error = |message: String| Error::GitClone {
            url: url.to_string(),
            message,
            hint: None,
        };

        let output = Command::new("git")
            .arg("clone")
            .arg(url)
            .arg(target_dir)
            .output()
            .map_err(|e| clone_error(e.to_string()))?;

        if !output.status.success() {
            return Err(clone_error(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        Ok(())
    }

    fn checkout(&self, repo_dir: &Path, ref_name: &str) -> Result<()> {
        self.run_checkout(repo_dir, &[ref_name], ref_name)
    }

    fn checkout_new_branch(
        &self,
        repo_dir: &Path,
        branch: &str,
        start_point: &str,
    ) -> Result<()> {
        self.run_checkout(repo_dir, &["-b", branch, start_point], branch)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_checkout_in_missing_directory_fails() {
        let result = SystemGit.checkout(&PathBuf::from("/nonexistent/repo"), "master");
        assert!(result.is_err());
    }

    #[test]
    fn test_clone_into_invalid_target_fails() {
        let result = SystemGit.clone_repo(
            "file:///nonexistent/source.git",
            &PathBuf::from("/nonexistent/target/dir"),
        );
        assert!(result.is_err());
    }

    // Clone and checkout against real repositories need network access and
    // are covered by the pipeline's recording fake instead.
}
