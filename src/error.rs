//! # Error Handling
//!
//! Centralized error handling for the full-build pipeline, built on
//! `thiserror`. Every fatal condition in the pipeline funnels through the
//! `Error` enum; the binary layer converts it into a non-zero exit status.
//!
//! The taxonomy mirrors the pipeline stages:
//!
//! - Manifest and ignore-list loading errors (network, bad status,
//!   malformed JSON, missing branch entry).
//! - Git clone and checkout failures, with captured stderr.
//! - Missing properties files during version pinning.
//! - Build failures, carrying the accumulated failed-module names.
//!
//! Recoverable conditions (a module absent from the distribution
//! properties, an unparsable update number) never surface here; they are
//! handled in place by the components that observe them.

use thiserror::Error;

/// Main error type for pipeline operations
#[derive(Error, Debug)]
pub enum Error {
    /// The dependency manifest could not be fetched or parsed.
    #[error("Failed to load standard library dependency data from {url}: {message}")]
    Manifest { url: String, message: String },

    /// The local ignore-list file could not be read or is malformed.
    #[error("Failed to load ignore modules from {path}: {message}")]
    IgnoreList { path: String, message: String },

    /// A required environment variable is missing at startup.
    #[error("Required environment variable {name} is not set")]
    MissingEnv { name: String },

    /// An error occurred while cloning a Git repository.
    ///
    /// Includes the repository URL, the error message, and an optional hint
    /// for resolution.
    #[error("Git clone failed for {url}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// A checkout in an already-cloned repository failed.
    #[error("Failed to switch to '{r#ref}' in {repo}: {message}")]
    GitCheckout {
        repo: String,
        r#ref: String,
        message: String,
    },

    /// A repository is missing its properties file.
    #[error("Cannot find the properties file at {path}")]
    PropertiesMissing { path: String },

    /// One or more repositories failed to build.
    #[error("Build failed for {}", modules.join(", "))]
    BuildFailure { modules: Vec<String> },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// An HTTP error, wrapped from `reqwest::Error`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
