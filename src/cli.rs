//! CLI argument parsing and pipeline dispatch

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;
use log::info;
use url::Url;

use full_build::builder::GradleWrapper;
use full_build::config::{BotCredentials, RunConfig};
use full_build::defaults;
use full_build::git::SystemGit;
use full_build::pipeline;

/// Full build pipeline for the Ballerina platform repositories
///
/// Runs with built-in defaults when no positional arguments are given;
/// otherwise all four must be supplied together.
#[derive(Parser, Debug)]
#[command(name = "full-build")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// ballerina-lang branch to build
    #[arg(value_name = "LANG_BRANCH", requires = "enable_tests")]
    lang_branch: Option<String>,

    /// "false" disables tests for module and distribution builds
    #[arg(value_name = "ENABLE_TESTS", requires = "github_user")]
    enable_tests: Option<String>,

    /// GitHub account hosting the ballerina-lang fork to clone
    #[arg(value_name = "GITHUB_USER", requires = "dist_branch")]
    github_user: Option<String>,

    /// ballerina-distribution patch branch to target
    #[arg(value_name = "DIST_BRANCH")]
    dist_branch: Option<String>,

    /// Manifest endpoint listing the standard library modules
    #[arg(long, value_name = "URL", default_value = defaults::STDLIB_MANIFEST_URL)]
    manifest_url: Url,

    /// Ignore-list file keyed by distribution branch
    #[arg(long, value_name = "PATH", default_value = defaults::IGNORE_MODULES_FILE)]
    ignore_file: PathBuf,

    /// Directory repositories are cloned into and built from
    /// (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    workdir: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Execute the pipeline with the parsed arguments.
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .init();

        // Credentials are validated before any network or git activity.
        let credentials = BotCredentials::from_env()?;
        let config = RunConfig::resolve(
            self.lang_branch,
            self.enable_tests,
            self.github_user,
            self.dist_branch,
            credentials,
        );
        info!(
            "building {} against distribution branch {} (update {})",
            config.lang_branch, config.dist_branch, config.update_number
        );

        let workdir = match self.workdir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        let start_time = Instant::now();
        let result = pipeline::run(
            &config,
            &SystemGit,
            &GradleWrapper,
            &self.manifest_url,
            &self.ignore_file,
            &workdir,
        );

        match result {
            Ok(()) => {
                println!(
                    "{} Full build finished in {:.2}s",
                    style("✔").green(),
                    start_time.elapsed().as_secs_f64()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("{} Full build failed", style("✘").red());
                Err(e.into())
            }
        }
    }
}
