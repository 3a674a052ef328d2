//! Fixed locations and default values for the full-build pipeline.
//!
//! This module centralizes the constants used across the pipeline stages,
//! ensuring consistency and avoiding duplication.

/// Remote manifest listing every standard library module with its
/// dependency level and version key.
pub const STDLIB_MANIFEST_URL: &str = "https://raw.githubusercontent.com/ballerina-platform/ballerina-release/master/dependabot/resources/extensions.json";

/// Local JSON file with per-distribution-branch build/test ignore lists.
pub const IGNORE_MODULES_FILE: &str = "dependabot/resources/full_build_ignore_modules.json";

/// URL root under which the module and distribution repositories live.
pub const ORG_REPO_URL: &str = "https://github.com/ballerina-platform/";

/// The core language repository, cloned from the configured user's fork.
pub const LANG_REPO: &str = "ballerina-lang";

/// The distribution repository that pins every module's version.
pub const DIST_REPO: &str = "ballerina-distribution";

/// Build-configuration file read and rewritten in every repository.
pub const PROPERTIES_FILE: &str = "gradle.properties";

/// Failed-module names are written here, one per line.
pub const FAILED_MODULES_FILE: &str = "failed_modules.txt";

pub const DEFAULT_LANG_BRANCH: &str = "master";
pub const DEFAULT_GITHUB_USER: &str = "ballerina-platform";
pub const DEFAULT_DIST_BRANCH: &str = "2201.0.x";

/// Distribution branch value meaning "build upstream default branches";
/// branch resolution is skipped entirely when it is targeted.
pub const UPSTREAM_DIST_BRANCH: &str = "master";

/// Branch created when a module is rebuilt from a pinned commit id.
pub const WORKING_BRANCH: &str = "full-build";

/// Key holding the language version in ballerina-lang's properties file.
pub const LANG_VERSION_KEY: &str = "version";

/// Substring identifying the pinned lang-version keys in downstream
/// properties files.
pub const LANG_VERSION_PIN: &str = "ballerinaLangVersion";

/// Module that always tracks the distribution branch and needs a larger
/// Gradle heap to build.
pub const C2C_MODULE: &str = "module-ballerina-c2c";
pub const HEAP_SIZE_KEY: &str = "org.gradle.jvmargs";
pub const HEAP_SIZE_VALUE: &str = "-Xmx4096m";

/// Dependency levels at or above this value are reserved and never built.
pub const MAX_BUILD_LEVEL: u8 = 9;

/// Environment variables supplying the bot credentials exported to Gradle.
pub const ENV_BOT_USERNAME: &str = "BALLERINA_BOT_USERNAME";
pub const ENV_BOT_TOKEN: &str = "BALLERINA_BOT_TOKEN";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_url_joins_cleanly_with_repo_names() {
        let url = format!("{}{}.git", ORG_REPO_URL, DIST_REPO);
        assert_eq!(
            url,
            "https://github.com/ballerina-platform/ballerina-distribution.git"
        );
    }

    #[test]
    fn test_manifest_url_parses() {
        assert!(url::Url::parse(STDLIB_MANIFEST_URL).is_ok());
    }
}
