//! # Repository Cloning
//!
//! Clones the full repository set for a build run into the working
//! directory: `ballerina-lang` from the configured user's fork (then
//! switched to the configured branch), every standard library module from
//! the platform organization on its default branch, and
//! `ballerina-distribution` (then switched to the targeted patch branch).
//!
//! Any git failure here is fatal and terminates the run immediately; no
//! cleanup of partially cloned repositories is attempted.

use std::path::Path;

use crate::config::RunConfig;
use crate::defaults;
use crate::error::{Error, Result};
use crate::git::GitOperations;
use crate::manifest::ModulesByLevel;

/// URL of the ballerina-lang fork owned by `github_user`.
fn lang_fork_url(github_user: &str) -> String {
    format!("https://github.com/{}/{}.git", github_user, defaults::LANG_REPO)
}

/// URL of an organization-owned repository.
fn org_repo_url(name: &str) -> String {
    format!("{}{}.git", defaults::ORG_REPO_URL, name)
}

/// Clone every repository the build needs and switch the lang and
/// distribution repositories to their configured branches.
pub fn clone_repositories(
    config: &RunConfig,
    modules: &ModulesByLevel,
    git: &dyn GitOperations,
    workdir: &Path,
) -> Result<()> {
    let lang_dir = workdir.join(defaults::LANG_REPO);
    println!("Cloning {}", defaults::LANG_REPO);
    git.clone_repo(&lang_fork_url(&config.github_user), &lang_dir)
        .map_err(|e| match e {
            Error::GitClone { url, message, .. } => Error::GitClone {
                url,
                message,
                hint: Some(format!(
                    "fork {} to your GitHub account and pass your username",
                    defaults::LANG_REPO
                )),
            },
            other => other,
        })?;
    git.checkout(&lang_dir, &config.lang_branch)?;

    for module in modules.values().flatten() {
        println!("Cloning {}", module.name);
        git.clone_repo(&org_repo_url(&module.name), &workdir.join(&module.name))?;
    }

    let dist_dir = workdir.join(defaults::DIST_REPO);
    println!("Cloning {}", defaults::DIST_REPO);
    git.clone_repo(&org_repo_url(defaults::DIST_REPO), &dist_dir)?;
    git.checkout(&dist_dir, &config.dist_branch)?;

    Ok(())
}
