//! Integration tests for the `resolve` command.
//!
//! Live resolution needs a macOS host with running applications, so
//! these tests focus on argument validation and the platform guard
//! that fires everywhere else.

use predicates::prelude::*;

mod common;
use common::TestEnv;

/// Test that an unknown application is rejected with exit code 4.
#[test]
fn test_resolve_unknown_application() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "Emacs"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("unknown application 'Emacs'"));
}

/// Test that the application argument is required.
#[test]
fn test_resolve_requires_application() {
    let env = TestEnv::new();

    env.command()
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

/// Test that an unsupported output format is rejected.
#[test]
fn test_resolve_invalid_format() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "Finder", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

/// Test that resolution refuses to run off macOS with exit code 2.
#[cfg(not(target_os = "macos"))]
#[test]
fn test_resolve_fails_off_macos() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "Finder"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains(
            "automation is only supported on macOS",
        ));
}

/// Test that the platform guard fires before any output format work.
#[cfg(not(target_os = "macos"))]
#[test]
fn test_resolve_json_fails_off_macos() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "Preview", "--format", "json"])
        .assert()
        .failure()
        .code(2);
}

/// Test that lenient application names reach the resolver.
///
/// The platform guard firing (rather than an argument error) proves the
/// name lookup accepted the spelling.
#[cfg(not(target_os = "macos"))]
#[test]
fn test_resolve_accepts_lenient_names() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "visual-studio-code"])
        .assert()
        .failure()
        .code(2);
}
