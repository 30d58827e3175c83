//! Tests for argument handling and config errors

use super::common::{packsync_command, TestContext};
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    packsync_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("install")
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("force-update"))
                .and(predicate::str::contains("check")),
        );
}

#[test]
fn test_unknown_command_fails() {
    packsync_command().arg("reinstall-everything").assert().failure();
}

#[test]
fn test_missing_config_fails() {
    let ctx = TestContext::new();

    ctx.packsync()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_invalid_config_fails() {
    let ctx = TestContext::new();
    std::fs::write(&ctx.config, "modpack_id: [unclosed\n").unwrap();

    ctx.packsync()
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_zero_concurrency_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("http://127.0.0.1:9", "max_concurrent_downloads: 0\n");

    ctx.packsync()
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_concurrent_downloads"));
}

#[test]
fn test_unreachable_registry_fails() {
    let ctx = TestContext::new();
    // Port 9 (discard) is not listening
    ctx.write_config("http://127.0.0.1:9", "api_timeout_secs: 2\n");

    ctx.packsync().arg("check").assert().failure();
    assert!(ctx.version_marker().is_none());
}
