//! # Ordered Properties Files
//!
//! Reader and writer for the `gradle.properties` files the pipeline
//! patches. The format is plain `key=value`, one entry per line, with no
//! escaping or comment handling.
//!
//! Parsing is deliberately lenient: lines without exactly one `=` are
//! skipped, which tolerates blank lines and stray content; they are
//! consequently dropped on rewrite. Duplicate keys keep the position of
//! their first occurrence and the value of their last (last write wins).
//! Everything else round-trips unchanged, so a rewrite that touches one
//! key leaves all other entries byte-for-byte identical.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Clone, Debug)]
struct Entry {
    key: String,
    value: String,
}

/// An ordered key-value view of a properties file.
#[derive(Clone, Debug, Default)]
pub struct Properties {
    entries: Vec<Entry>,
}

impl Properties {
    /// Parse properties content, skipping lines without exactly one `=`.
    pub fn parse(content: &str) -> Self {
        let mut properties = Properties::default();
        for line in content.lines() {
            let parts: Vec<&str> = line.split('=').collect();
            if parts.len() != 2 {
                continue;
            }
            properties.set(parts[0], parts[1]);
        }
        properties
    }

    /// Load a properties file from disk.
    ///
    /// A missing or unreadable file is fatal to the pipeline, so it maps to
    /// a dedicated error carrying the path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|_| Error::PropertiesMissing {
            path: path.display().to_string(),
        })?;
        Ok(Self::parse(&content))
    }

    /// Write the entries back to disk as `key=value` lines.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Look up the value for an exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Set a key's value, appending the entry if the key is absent.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.value = value.to_string();
        } else {
            self.entries.push(Entry {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }

    /// Overwrite the value of every key containing `needle`.
    ///
    /// Keys are matched by substring, never inserted; a file with no
    /// matching key is rewritten unchanged.
    pub fn set_all_containing(&mut self, needle: &str, value: &str) {
        for entry in self
            .entries
            .iter_mut()
            .filter(|entry| entry.key.contains(needle))
        {
            entry.value = value.to_string();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}={}", entry.key, entry.value)?;
        }
        Ok(())
    }
}
