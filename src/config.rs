//! # Run Configuration
//!
//! The run configuration is resolved exactly once at startup, from the four
//! positional CLI values and the environment, and is immutable for the
//! process lifetime. Every pipeline stage receives it by reference; there
//! is no process-global mutable state.

use crate::defaults;
use crate::error::{Error, Result};
use log::warn;

/// Bot credentials exported to Gradle child processes.
///
/// These are only ever used as values for the `packageUser`/`packagePAT`
/// environment variables of build-tool invocations.
#[derive(Debug, Clone)]
pub struct BotCredentials {
    pub username: String,
    pub token: String,
}

impl BotCredentials {
    /// Read the credentials from the environment.
    ///
    /// Absence of either variable is fatal at process start, before any
    /// network or git activity is attempted.
    pub fn from_env() -> Result<Self> {
        let username = require_env(defaults::ENV_BOT_USERNAME)?;
        let token = require_env(defaults::ENV_BOT_TOKEN)?;
        Ok(Self { username, token })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::MissingEnv {
        name: name.to_string(),
    })
}

/// Process-wide run configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Branch of ballerina-lang to build.
    pub lang_branch: String,
    /// Whether module and distribution builds run their tests.
    pub tests_enabled: bool,
    /// GitHub account hosting the ballerina-lang fork to clone.
    pub github_user: String,
    /// Distribution patch branch being targeted.
    pub dist_branch: String,
    /// Swan Lake update number derived from the distribution branch.
    pub update_number: u32,
    /// Bot credentials passed through to build-tool invocations.
    pub credentials: BotCredentials,
}

impl RunConfig {
    /// Resolve the run configuration from the positional CLI values.
    ///
    /// The CLI layer guarantees all-or-nothing for the four positionals;
    /// any value not supplied falls back to its fixed default. Only the
    /// literal `"false"` disables tests.
    pub fn resolve(
        lang_branch: Option<String>,
        enable_tests: Option<String>,
        github_user: Option<String>,
        dist_branch: Option<String>,
        credentials: BotCredentials,
    ) -> Self {
        let lang_branch =
            lang_branch.unwrap_or_else(|| defaults::DEFAULT_LANG_BRANCH.to_string());
        let tests_enabled = enable_tests.map_or(true, |value| value != "false");
        let github_user =
            github_user.unwrap_or_else(|| defaults::DEFAULT_GITHUB_USER.to_string());
        let dist_branch =
            dist_branch.unwrap_or_else(|| defaults::DEFAULT_DIST_BRANCH.to_string());
        let update_number = parse_update_number(&dist_branch);

        Self {
            lang_branch,
            tests_enabled,
            github_user,
            dist_branch,
            update_number,
            credentials,
        }
    }
}

/// Derive the update number from the second dot-segment of the
/// distribution branch (`"2201.3.x"` -> 3).
///
/// Parse failure is a deliberately lenient degrade: the default of 0 is
/// retained and the condition is logged, since a branch like `master` has
/// no update number to extract.
fn parse_update_number(dist_branch: &str) -> u32 {
    match dist_branch.split('.').nth(1).and_then(|s| s.parse().ok()) {
        Some(number) => number,
        None => {
            warn!("Pipeline is using master branches of downstream repositories");
            0
        }
    }
}
