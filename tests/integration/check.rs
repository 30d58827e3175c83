//! Tests for `packsync check`

use super::common::{publish, ServedMod, TestContext};
use predicates::prelude::*;
use std::fs;
use wiremock::MockServer;

const LITHIUM: ServedMod = ServedMod {
    name: "lithium.jar",
    content: "lithium-bytes",
    server_env: "required",
};

#[tokio::test(flavor = "multi_thread")]
async fn test_check_not_installed() {
    let server = MockServer::start().await;
    publish(&server, "v1", &[LITHIUM], &[]).await;

    let ctx = TestContext::new();
    ctx.write_config(&server.uri(), "");

    ctx.packsync()
        .arg("check")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Installed: Not installed")
                .and(predicate::str::contains("Latest: v1.0 (v1)"))
                .and(predicate::str::contains("Run 'install' to install")),
        );

    // Check never touches the instance
    assert!(ctx.version_marker().is_none());
    assert!(!ctx.instance.join("mods").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_update_available() {
    let server = MockServer::start().await;
    publish(&server, "v2", &[LITHIUM], &[]).await;

    let ctx = TestContext::new();
    ctx.write_config(&server.uri(), "");
    fs::write(ctx.instance.join(".modpack_version"), "v1").unwrap();

    ctx.packsync()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Update available"));
    assert_eq!(ctx.version_marker().as_deref(), Some("v1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_up_to_date_after_install() {
    let server = MockServer::start().await;
    publish(&server, "v1", &[LITHIUM], &[]).await;

    let ctx = TestContext::new();
    ctx.write_config(&server.uri(), "");

    ctx.packsync().arg("install").assert().success();
    ctx.packsync()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Up to date!"));
}
