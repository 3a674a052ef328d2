//! # Build Execution
//!
//! Runs the Gradle wrapper for each repository in dependency order:
//! ballerina-lang first (publishing its artifacts to the local Maven
//! repository), then every standard library level in ascending order, then
//! ballerina-distribution.
//!
//! Failure policy: a failed module does not stop its own level, so every
//! broken module in the level is surfaced in one run, but no later level
//! is attempted once a level has failures. The level boundary is a hard
//! barrier because higher levels resolve the artifacts lower levels
//! publish. Each fatal stop writes the failure report before returning.

use std::path::Path;
use std::process::Command;

use log::warn;

use crate::config::{BotCredentials, RunConfig};
use crate::defaults;
use crate::error::{Error, Result};
use crate::manifest::{IgnoreLists, ModulesByLevel};
use crate::report;

/// Typed result of a single build invocation.
///
/// A failure to launch the tool at all counts as a failed build of that
/// repository; the pipeline treats both identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    Failed,
}

/// Options for one build invocation.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Exclude the test task from the build.
    pub skip_tests: bool,
    /// Exported to the child process as `packageUser`/`packagePAT`.
    pub credentials: Option<BotCredentials>,
    /// Plain-console batch flags used for downstream builds.
    pub batch_flags: bool,
}

/// The build tool invoked per repository.
pub trait BuildTool {
    /// Run a clean build in `repo_dir`, publishing to the local Maven
    /// repository.
    fn build(&self, repo_dir: &Path, options: &BuildOptions) -> BuildOutcome;
}

/// The default implementation, invoking each repository's own Gradle
/// wrapper with an explicit argument list.
pub struct GradleWrapper;

impl BuildTool for GradleWrapper {
    fn build(&self, repo_dir: &Path, options: &BuildOptions) -> BuildOutcome {
        let mut command = Command::new(repo_dir.join("gradlew"));
        command.current_dir(repo_dir).args(["clean", "build"]);
        if options.skip_tests {
            command.args(["-x", "test"]);
        }
        command.args(["publishToMavenLocal", "--stacktrace", "--scan"]);
        if options.batch_flags {
            command.args(["--console=plain", "--no-daemon", "--continue"]);
        }
        if let Some(credentials) = &options.credentials {
            command
                .env("packageUser", &credentials.username)
                .env("packagePAT", &credentials.token);
        }

        match command.status() {
            Ok(status) if status.success() => BuildOutcome::Success,
            Ok(status) => {
                warn!("build in {} exited with {}", repo_dir.display(), status);
                BuildOutcome::Failed
            }
            Err(e) => {
                warn!("failed to launch build in {}: {}", repo_dir.display(), e);
                BuildOutcome::Failed
            }
        }
    }
}

/// Build the whole stack in dependency order.
pub fn build_repositories(
    config: &RunConfig,
    modules: &ModulesByLevel,
    ignore: &IgnoreLists,
    build_tool: &dyn BuildTool,
    workdir: &Path,
) -> Result<()> {
    if config.tests_enabled {
        println!("Tests are enabled");
    } else {
        println!("Tests are disabled");
    }

    let mut failed: Vec<String> = Vec::new();

    // ballerina-lang publishes first; nothing downstream can resolve its
    // artifacts otherwise. Its own tests are never run here.
    let lang_options = BuildOptions {
        skip_tests: true,
        credentials: None,
        batch_flags: false,
    };
    if build_tool.build(&workdir.join(defaults::LANG_REPO), &lang_options) == BuildOutcome::Failed
    {
        failed.push(defaults::LANG_REPO.to_string());
        report::write_failed_modules(workdir, &failed)?;
        return Err(Error::BuildFailure { modules: failed });
    }

    for level_modules in modules.values() {
        for module in level_modules {
            println!("Building Standard Library Module: {}", module.name);
            if ignore.skip_build(&module.name) {
                println!("Skipped Building Standard Library Module: {}", module.name);
                continue;
            }

            let options = BuildOptions {
                skip_tests: ignore.skip_tests(&module.name) || !config.tests_enabled,
                credentials: Some(config.credentials.clone()),
                batch_flags: true,
            };
            if build_tool.build(&workdir.join(&module.name), &options) == BuildOutcome::Failed {
                failed.push(module.name.clone());
            }
        }

        // Later levels depend on this level's published artifacts.
        if !failed.is_empty() {
            report::write_failed_modules(workdir, &failed)?;
            return Err(Error::BuildFailure { modules: failed });
        }
    }

    println!("Building {}", defaults::DIST_REPO);
    let dist_options = BuildOptions {
        skip_tests: !config.tests_enabled,
        credentials: Some(config.credentials.clone()),
        batch_flags: true,
    };
    if build_tool.build(&workdir.join(defaults::DIST_REPO), &dist_options) == BuildOutcome::Failed
    {
        failed.push(defaults::DIST_REPO.to_string());
        report::write_failed_modules(workdir, &failed)?;
        return Err(Error::BuildFailure { modules: failed });
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fake shared with the pipeline tests.

    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone)]
    pub(crate) struct BuildCall {
        pub repo: String,
        pub skip_tests: bool,
        pub with_credentials: bool,
    }

    /// Records build invocations; repositories listed in `fail_repos`
    /// report failure.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingBuild {
        pub calls: RefCell<Vec<BuildCall>>,
        pub fail_repos: Vec<String>,
    }

    impl RecordingBuild {
        pub fn built_repos(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|call| call.repo.clone()).collect()
        }
    }

    impl BuildTool for RecordingBuild {
        fn build(&self, repo_dir: &Path, options: &BuildOptions) -> BuildOutcome {
            let repo = repo_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.calls.borrow_mut().push(BuildCall {
                repo: repo.clone(),
                skip_tests: options.skip_tests,
                with_credentials: options.credentials.is_some(),
            });
            if self.fail_repos.contains(&repo) {
                BuildOutcome::Failed
            } else {
                BuildOutcome::Success
            }
        }
    }
}
