//! Tests for `packsync install`, `update` and `force-update`

use super::common::{publish, ServedMod, TestContext};
use predicates::prelude::*;
use std::fs;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LITHIUM: ServedMod = ServedMod {
    name: "lithium.jar",
    content: "lithium-bytes",
    server_env: "required",
};
const SODIUM: ServedMod = ServedMod {
    name: "sodium.jar",
    content: "sodium-bytes",
    server_env: "unsupported",
};
const ZOOMIFY: ServedMod = ServedMod {
    name: "Zoomify-2.13.jar",
    content: "zoomify-bytes",
    server_env: "optional",
};

#[tokio::test(flavor = "multi_thread")]
async fn test_install_end_to_end() {
    let server = MockServer::start().await;
    publish(
        &server,
        "v1",
        &[LITHIUM, SODIUM, ZOOMIFY],
        &[
            ("overrides/config/lithium.properties", "from-overrides"),
            ("server-overrides/config/lithium.properties", "from-server"),
            ("overrides/mods/bundled-extra.jar", "extra"),
        ],
    )
    .await;

    let ctx = TestContext::new();
    let mods = ctx.instance.join("mods");
    fs::create_dir_all(mods.join("user")).unwrap();
    fs::write(mods.join("stale-0.1.jar"), "old").unwrap();
    fs::write(mods.join("chunky-1.3.jar"), "kept").unwrap();
    fs::write(mods.join("user/custom.jar"), "mine").unwrap();
    ctx.write_config(
        &server.uri(),
        "preserved_mods:\n  - chunky\nclient_only_mods:\n  - zoomify\n",
    );

    ctx.packsync()
        .arg("install")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Installation complete: v1.0")
                .and(predicate::str::contains("Downloaded: 1 mods"))
                .and(predicate::str::contains("From overrides: 1 mods"))
                .and(predicate::str::contains("Skipped (client-only): 2")),
        );

    assert_eq!(
        fs::read_to_string(mods.join("lithium.jar")).unwrap(),
        "lithium-bytes"
    );
    assert!(mods.join("bundled-extra.jar").exists());
    assert!(!mods.join("sodium.jar").exists());
    assert!(!mods.join("Zoomify-2.13.jar").exists());
    assert!(!mods.join("stale-0.1.jar").exists());
    assert!(mods.join("chunky-1.3.jar").exists());
    assert!(mods.join("user/custom.jar").exists());
    assert_eq!(
        fs::read_to_string(ctx.instance.join("config/lithium.properties")).unwrap(),
        "from-server"
    );
    assert_eq!(ctx.version_marker().as_deref(), Some("v1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_second_install_is_noop() {
    let server = MockServer::start().await;
    publish(&server, "v1", &[LITHIUM], &[]).await;

    let ctx = TestContext::new();
    ctx.write_config(&server.uri(), "");

    ctx.packsync().arg("install").assert().success();
    fs::remove_file(ctx.instance.join("mods/lithium.jar")).unwrap();

    ctx.packsync()
        .arg("update")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Already installed: v1.0")
                .and(predicate::str::contains("force-update")),
        );
    // Nothing was re-downloaded
    assert!(!ctx.instance.join("mods/lithium.jar").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_force_update_reinstalls() {
    let server = MockServer::start().await;
    publish(&server, "v1", &[LITHIUM], &[]).await;

    let ctx = TestContext::new();
    ctx.write_config(&server.uri(), "");
    fs::write(ctx.instance.join(".modpack_version"), "v1").unwrap();

    ctx.packsync()
        .arg("force-update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloaded: 1 mods"));
    assert!(ctx.instance.join("mods/lithium.jar").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_download_reported() {
    let server = MockServer::start().await;
    publish(&server, "v2", &[LITHIUM], &[]).await;
    // Outranks the healthy CDN mock mounted by `publish`
    Mock::given(method("GET"))
        .and(path("/cdn/mods/lithium.jar"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;

    let ctx = TestContext::new();
    ctx.write_config(&server.uri(), "download_timeout_secs: 5\n");

    ctx.packsync()
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed: 1 (lithium.jar)"));
    assert!(!ctx.instance.join("mods/lithium.jar").exists());
    assert_eq!(ctx.version_marker().as_deref(), Some("v2"));
}
