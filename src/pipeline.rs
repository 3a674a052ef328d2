//! # Pipeline Orchestration
//!
//! Coordinates the stages of a full build run to provide a single entry
//! point for the binary: manifest and ignore-list loading, repository
//! cloning, branch resolution, version pinning, and the level-ordered
//! build. Collaborators for git and the build tool are injected so the
//! whole pipeline can run against recording fakes in tests.

use std::path::Path;

use url::Url;

use crate::builder::{self, BuildTool};
use crate::cloner;
use crate::config::RunConfig;
use crate::error::Result;
use crate::git::GitOperations;
use crate::manifest::{IgnoreLists, Manifest};
use crate::pinner;
use crate::resolver;

/// Execute the complete full-build pipeline.
///
/// The stages run strictly in sequence; every external command is awaited
/// to completion before the next step proceeds. An empty module set after
/// level filtering is a valid "nothing to build" outcome, reported and
/// returned as success without touching git.
pub fn run(
    config: &RunConfig,
    git: &dyn GitOperations,
    build_tool: &dyn BuildTool,
    manifest_url: &Url,
    ignore_file: &Path,
    workdir: &Path,
) -> Result<()> {
    let manifest = Manifest::fetch(manifest_url)?;
    let modules = manifest.group_by_level();
    let ignore = IgnoreLists::load(ignore_file, &config.dist_branch)?;

    if modules.is_empty() {
        println!(
            "Could not find standard library dependency data from {}",
            manifest_url
        );
        return Ok(());
    }

    cloner::clone_repositories(config, &modules, git, workdir)?;
    resolver::switch_module_branches(config, &modules, git, workdir)?;
    pinner::pin_lang_version(&modules, workdir)?;
    builder::build_repositories(config, &modules, &ignore, build_tool, workdir)
}
