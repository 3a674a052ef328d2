//! # Dependency Manifest and Ignore Lists
//!
//! The manifest is a remote JSON document listing every standard library
//! module with its repository name, dependency level, and the key under
//! which the distribution pins its version. Modules at reserved levels
//! (9 and above) are filtered out; the survivors are grouped by level,
//! preserving manifest order within each level.
//!
//! The ignore lists live in a local JSON file whose top-level keys are
//! distribution branch names; each branch maps to the module names that
//! are skipped entirely (`build-ignore-modules`) or built without tests
//! (`test-ignore-modules`).

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::defaults;
use crate::error::{Error, Result};

/// One manifest row, as published by the manifest endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub level: u8,
    pub version_key: String,
}

/// The remote dependency manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub standard_library: Vec<ManifestEntry>,
}

/// A standard library repository participating in the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    /// Key under which this module's pinned version appears in the
    /// distribution's properties file.
    pub version_key: String,
}

/// Modules grouped by dependency level; iteration order is ascending.
pub type ModulesByLevel = BTreeMap<u8, Vec<Module>>;

impl Manifest {
    /// Parse a manifest JSON document.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Fetch and parse the manifest from the remote endpoint.
    ///
    /// A non-success status or malformed body is fatal; there is no retry.
    pub fn fetch(url: &Url) -> Result<Self> {
        let response = reqwest::blocking::get(url.as_str())?;
        if !response.status().is_success() {
            return Err(Error::Manifest {
                url: url.to_string(),
                message: format!("unexpected status {}", response.status()),
            });
        }
        let text = response.text()?;
        Self::parse(&text).map_err(|e| Error::Manifest {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Group the buildable modules by dependency level.
    ///
    /// Modules with a level at or above [`defaults::MAX_BUILD_LEVEL`] are
    /// reserved and never appear in the result. Within a level, manifest
    /// order is preserved.
    pub fn group_by_level(&self) -> ModulesByLevel {
        let mut by_level = ModulesByLevel::new();
        for entry in &self.standard_library {
            if entry.level >= defaults::MAX_BUILD_LEVEL {
                continue;
            }
            by_level.entry(entry.level).or_default().push(Module {
                name: entry.name.clone(),
                version_key: entry.version_key.clone(),
            });
        }
        by_level
    }
}

#[derive(Debug, Clone, Deserialize)]
struct IgnoreEntry {
    #[serde(rename = "test-ignore-modules")]
    test_ignore: Vec<String>,
    #[serde(rename = "build-ignore-modules")]
    build_ignore: Vec<String>,
}

/// Per-branch module ignore lists.
#[derive(Debug, Clone, Default)]
pub struct IgnoreLists {
    build_ignore: HashSet<String>,
    test_ignore: HashSet<String>,
}

impl IgnoreLists {
    /// Load the ignore lists for the targeted distribution branch.
    ///
    /// An unreadable file, malformed JSON, or a missing entry for the
    /// branch is fatal: every supported branch is expected to carry an
    /// entry, even an empty one.
    pub fn load(path: &Path, dist_branch: &str) -> Result<Self> {
        let ignore_error = |message: String| Error::IgnoreList {
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| ignore_error(e.to_string()))?;
        let by_branch: HashMap<String, IgnoreEntry> =
            serde_json::from_str(&content).map_err(|e| ignore_error(e.to_string()))?;
        let entry = by_branch.get(dist_branch).ok_or_else(|| {
            ignore_error(format!(
                "no entry for distribution branch '{}'",
                dist_branch
            ))
        })?;

        Ok(Self {
            build_ignore: entry.build_ignore.iter().cloned().collect(),
            test_ignore: entry.test_ignore.iter().cloned().collect(),
        })
    }

    /// True when the module must not be built at all.
    pub fn skip_build(&self, module: &str) -> bool {
        self.build_ignore.contains(module)
    }

    /// True when the module builds with tests excluded, regardless of the
    /// global test flag.
    pub fn skip_tests(&self, module: &str) -> bool {
        self.test_ignore.contains(module)
    }
}
