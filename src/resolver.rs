//! # Branch Resolution
//!
//! After cloning, each standard library module is switched to the ref the
//! targeted distribution branch expects. The ref is decided in precedence
//! order:
//!
//! 1. A declarative override table of `(module, distribution branch)` to
//!    ref entries.
//! 2. The c2c module, which always tracks the distribution branch itself.
//! 3. The version string pinned under the module's `version_key` in the
//!    distribution's properties file: a dash-suffixed version names the
//!    commit to branch from; a plain version names a release tag.
//! 4. No pinned version at all: the module keeps its default branch. This
//!    is an intentional soft case, not an error.
//!
//! Resolution is skipped wholesale when the distribution branch is
//! `master`, which means "build every downstream repository's default
//! branch". Any checkout failure is fatal.

use std::path::Path;

use crate::config::RunConfig;
use crate::defaults;
use crate::error::Result;
use crate::git::GitOperations;
use crate::manifest::{Module, ModulesByLevel};
use crate::properties::Properties;

/// One hard-coded `(module, distribution branch)` to ref override.
struct BranchOverride {
    module: &'static str,
    dist_branch: &'static str,
    r#ref: &'static str,
}

/// Modules whose pinned versions predate the current branch scheme and
/// must be built from a fixed branch on specific distribution lines.
const BRANCH_OVERRIDES: &[BranchOverride] = &[
    BranchOverride {
        module: "module-ballerinai-transaction",
        dist_branch: "2201.0.x",
        r#ref: "1.0.x",
    },
    BranchOverride {
        module: "module-ballerina-websubhub",
        dist_branch: "2201.0.x",
        r#ref: "2201.0.x",
    },
    BranchOverride {
        module: "module-ballerina-mime",
        dist_branch: "2201.1.x",
        r#ref: "2201.1.x",
    },
    BranchOverride {
        module: "module-ballerina-http",
        dist_branch: "2201.1.x",
        r#ref: "2201.1.x",
    },
];

/// Switch every module to the ref its distribution branch expects.
pub fn switch_module_branches(
    config: &RunConfig,
    modules: &ModulesByLevel,
    git: &dyn GitOperations,
    workdir: &Path,
) -> Result<()> {
    if config.dist_branch == defaults::UPSTREAM_DIST_BRANCH {
        return Ok(());
    }

    let dist_properties = Properties::load(
        &workdir
            .join(defaults::DIST_REPO)
            .join(defaults::PROPERTIES_FILE),
    )?;

    for module in modules.values().flatten() {
        resolve_module(config, module, &dist_properties, git, workdir)?;
    }
    Ok(())
}

fn resolve_module(
    config: &RunConfig,
    module: &Module,
    dist_properties: &Properties,
    git: &dyn GitOperations,
    workdir: &Path,
) -> Result<()> {
    let repo_dir = workdir.join(&module.name);

    if let Some(entry) = BRANCH_OVERRIDES
        .iter()
        .find(|entry| entry.module == module.name && entry.dist_branch == config.dist_branch)
    {
        println!("{}", module.name);
        return git.checkout(&repo_dir, entry.r#ref);
    }

    if module.name == defaults::C2C_MODULE {
        println!("{}", module.name);
        return git.checkout(&repo_dir, &config.dist_branch);
    }

    let Some(version) = dist_properties.get(&module.version_key) else {
        // Not pinned by the distribution; the module stays on its default
        // branch.
        return Ok(());
    };

    println!("{}", module.name);
    let segments: Vec<&str> = version.split('-').collect();
    if segments.len() > 1 {
        // The trailing dash-segment of a timestamped version is the commit
        // the distribution was last updated to.
        let commit = segments[segments.len() - 1];
        git.checkout_new_branch(&repo_dir, defaults::WORKING_BRANCH, commit)
    } else {
        git.checkout(&repo_dir, &format!("v{}", version))
    }
}
