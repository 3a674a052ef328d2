//! End-to-end tests for the `full-build` CLI
//!
//! These tests invoke the actual binary and validate its behavior from a
//! user's perspective. Stages that would touch real repositories are
//! exercised up to their first external command: the manifest endpoint is
//! served by a local mock server, and the scenarios below all stop before
//! any git or Gradle invocation.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

const BOT_USERNAME_VAR: &str = "BALLERINA_BOT_USERNAME";
const BOT_TOKEN_VAR: &str = "BALLERINA_BOT_TOKEN";

fn full_build_cmd() -> Command {
    let mut cmd = Command::cargo_bin("full-build").unwrap();
    cmd.env(BOT_USERNAME_VAR, "bot").env(BOT_TOKEN_VAR, "secret");
    cmd
}

fn write_ignore_file(temp: &assert_fs::TempDir, branch: &str) -> assert_fs::fixture::ChildPath {
    let file = temp.child("full_build_ignore_modules.json");
    file.write_str(&format!(
        r#"{{"{}": {{"test-ignore-modules": [], "build-ignore-modules": []}}}}"#,
        branch
    ))
    .unwrap();
    file
}

/// Test that --help shows usage information
#[test]
fn test_help() {
    full_build_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Full build pipeline for the Ballerina platform repositories",
        ))
        .stdout(predicate::str::contains("LANG_BRANCH"));
}

/// Test that --version reports the crate version
#[test]
fn test_version() {
    full_build_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that missing bot credentials are fatal before any network access
#[test]
fn test_missing_credentials_are_fatal() {
    let mut cmd = Command::cargo_bin("full-build").unwrap();
    cmd.env_remove(BOT_USERNAME_VAR)
        .env_remove(BOT_TOKEN_VAR)
        // An unroutable endpoint: the run must fail before reaching it.
        .arg("--manifest-url")
        .arg("http://127.0.0.1:9/extensions.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains(BOT_USERNAME_VAR));
}

/// Test that a partial positional argument list is rejected
#[test]
fn test_partial_positional_arguments_are_rejected() {
    full_build_cmd()
        .arg("master")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

/// Test that a manifest with only reserved levels is a successful no-op
#[test]
fn test_nothing_to_build_exits_successfully() {
    let temp = assert_fs::TempDir::new().unwrap();
    let ignore_file = write_ignore_file(&temp, "2201.0.x");

    let mut server = mockito::Server::new();
    server
        .mock("GET", "/extensions.json")
        .with_status(200)
        .with_body(
            r#"{"standard_library": [
                {"name": "observe", "level": 9, "version_key": "observeVersion"}
            ]}"#,
        )
        .create();

    full_build_cmd()
        .arg("--manifest-url")
        .arg(format!("{}/extensions.json", server.url()))
        .arg("--ignore-file")
        .arg(ignore_file.path())
        .arg("--workdir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Could not find standard library dependency data",
        ));
}

/// Test that malformed manifest JSON is fatal and nothing is cloned
#[test]
fn test_malformed_manifest_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();
    let ignore_file = write_ignore_file(&temp, "2201.0.x");

    let mut server = mockito::Server::new();
    server
        .mock("GET", "/extensions.json")
        .with_status(200)
        .with_body("{ not json")
        .create();

    full_build_cmd()
        .arg("--manifest-url")
        .arg(format!("{}/extensions.json", server.url()))
        .arg("--ignore-file")
        .arg(ignore_file.path())
        .arg("--workdir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "standard library dependency data",
        ));

    // No repository directory appeared in the working directory.
    temp.child("ballerina-lang").assert(predicate::path::missing());
}

/// Test that a non-success manifest status is fatal
#[test]
fn test_manifest_error_status_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();
    let ignore_file = write_ignore_file(&temp, "2201.0.x");

    let mut server = mockito::Server::new();
    server
        .mock("GET", "/extensions.json")
        .with_status(404)
        .create();

    full_build_cmd()
        .arg("--manifest-url")
        .arg(format!("{}/extensions.json", server.url()))
        .arg("--ignore-file")
        .arg(ignore_file.path())
        .arg("--workdir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("404"));
}

/// Test that an ignore file without the targeted branch is fatal
#[test]
fn test_ignore_file_missing_branch_entry_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();
    // Entry for a different branch than the default 2201.0.x target.
    let ignore_file = write_ignore_file(&temp, "2201.8.x");

    let mut server = mockito::Server::new();
    server
        .mock("GET", "/extensions.json")
        .with_status(200)
        .with_body(
            r#"{"standard_library": [
                {"name": "module-ballerina-io", "level": 1, "version_key": "stdlibIoVersion"}
            ]}"#,
        )
        .create();

    full_build_cmd()
        .arg("--manifest-url")
        .arg(format!("{}/extensions.json", server.url()))
        .arg("--ignore-file")
        .arg(ignore_file.path())
        .arg("--workdir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("2201.0.x"));

    temp.child("ballerina-lang").assert(predicate::path::missing());
}

/// Test that a missing ignore file is fatal
#[test]
fn test_missing_ignore_file_is_fatal() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut server = mockito::Server::new();
    server
        .mock("GET", "/extensions.json")
        .with_status(200)
        .with_body(r#"{"standard_library": []}"#)
        .create();

    full_build_cmd()
        .arg("--manifest-url")
        .arg(format!("{}/extensions.json", server.url()))
        .arg("--ignore-file")
        .arg(temp.child("missing.json").path())
        .arg("--workdir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("ignore modules"));
}
