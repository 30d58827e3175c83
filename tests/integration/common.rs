//! Common utilities for integration tests

use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use packsync::di::mocks::build_mrpack;
use packsync::package::checksum::ChecksumAlgorithm;
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MODPACK_ID: &str = "test-pack";

pub fn packsync_command() -> Command {
    Command::cargo_bin("packsync").unwrap()
}

/// Isolated instance directory plus config file
pub struct TestContext {
    pub temp: TempDir,
    pub instance: PathBuf,
    pub config: PathBuf,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let instance = temp.child("server").to_path_buf();
        let config = temp.child("config.yaml").to_path_buf();
        std::fs::create_dir_all(&instance).unwrap();
        Self {
            temp,
            instance,
            config,
        }
    }

    /// Write a config pointing the registry at `api_url`
    pub fn write_config(&self, api_url: &str, extra: &str) {
        let yaml = format!(
            "modpack_id: {}\ninstance_dir: {}\napi_url: {}\n{}",
            MODPACK_ID,
            self.instance.display(),
            api_url,
            extra
        );
        std::fs::write(&self.config, yaml).unwrap();
    }

    pub fn packsync(&self) -> Command {
        let mut cmd = packsync_command();
        cmd.arg("--config").arg(&self.config);
        cmd.env("RUST_LOG", "warn");
        cmd
    }

    pub fn version_marker(&self) -> Option<String> {
        std::fs::read_to_string(self.instance.join(".modpack_version")).ok()
    }
}

/// A mod served by the mock CDN
pub struct ServedMod {
    pub name: &'static str,
    pub content: &'static str,
    pub server_env: &'static str,
}

/// Publish `version_id` with `mods` in its manifest and `overrides` in the archive
pub async fn publish(
    server: &MockServer,
    version_id: &str,
    mods: &[ServedMod],
    overrides: &[(&str, &str)],
) {
    let mut files = Vec::new();
    for m in mods {
        let cdn_path = format!("/cdn/mods/{}", m.name);
        Mock::given(method("GET"))
            .and(path(cdn_path.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(m.content.as_bytes()))
            .mount(server)
            .await;

        files.push(serde_json::json!({
            "path": format!("mods/{}", m.name),
            "env": {"client": "required", "server": m.server_env},
            "downloads": [format!("{}{}", server.uri(), cdn_path)],
            "fileSize": m.content.len(),
            "hashes": {"sha512": ChecksumAlgorithm::Sha512.digest_hex(m.content.as_bytes())}
        }));
    }

    let index = serde_json::json!({
        "formatVersion": 1,
        "game": "minecraft",
        "versionId": version_id,
        "name": "Test Pack",
        "files": files,
    })
    .to_string();
    let archive = build_mrpack(Some(&index), overrides);
    let archive_path = format!("/cdn/{}/pack.mrpack", version_id);
    let archive_sha1 = ChecksumAlgorithm::Sha1.digest_hex(&archive);

    Mock::given(method("GET"))
        .and(path(archive_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive.clone()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/project/{}/version", MODPACK_ID).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": version_id,
                "version_number": format!("{}.0", version_id),
                "files": [{
                    "filename": format!("test-pack-{}.mrpack", version_id),
                    "url": format!("{}{}", server.uri(), archive_path),
                    "hashes": {"sha1": archive_sha1},
                    "size": archive.len()
                }]
            }
        ])))
        .mount(server)
        .await;
}
