//! # Full Build Pipeline Library
//!
//! This library provides the core functionality for running a full,
//! dependency-ordered build of the Ballerina platform repositories: the
//! `ballerina-lang` runtime, the standard library modules, and the
//! `ballerina-distribution` repository. It is designed to be used by the
//! `full-build` command-line tool but can also be driven directly, which is
//! how the test suite exercises it.
//!
//! ## Core Concepts
//!
//! - **Run Configuration (`config`)**: An immutable value resolved once at
//!   startup from CLI arguments and the environment, passed by reference
//!   into every stage.
//! - **Manifest (`manifest`)**: The remote dependency manifest describing
//!   each standard library module and its dependency level, plus the local
//!   ignore lists keyed by distribution branch.
//! - **Properties (`properties`)**: An ordered, lenient `key=value` reader
//!   and writer for `gradle.properties` files, used for both branch
//!   resolution and version pinning.
//! - **External Tools (`git`, `builder`)**: Trait seams over the system
//!   `git` command and each repository's Gradle wrapper, so tests can swap
//!   in recording fakes.
//!
//! ## Execution Flow
//!
//! The main entry point is `pipeline::run`, which executes the following
//! stages in order:
//!
//! 1.  **Manifest**: Fetch the module manifest, group modules by dependency
//!     level, and load the ignore lists. An empty module set is a valid
//!     "nothing to build" outcome.
//! 2.  **Clone**: Clone `ballerina-lang`, every module repository, and
//!     `ballerina-distribution`, checking out the configured branches.
//! 3.  **Resolve**: Switch each module to the branch, tag, or pinned commit
//!     the target distribution branch expects.
//! 4.  **Pin**: Rewrite every repository's `gradle.properties` so the
//!     `ballerinaLangVersion` keys carry the lang version being built.
//! 5.  **Build**: Run the Gradle wrapper per repository in ascending level
//!     order, recording failures and stopping at the first failed level.
//!
//! Builds within a level continue past individual failures so that every
//! broken module in the level is surfaced in one run; the level boundary is
//! a hard barrier because later levels resolve the artifacts earlier levels
//! publish to the local Maven repository.

pub mod builder;
pub mod cloner;
pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod manifest;
pub mod pinner;
pub mod pipeline;
pub mod properties;
pub mod report;
pub mod resolver;
