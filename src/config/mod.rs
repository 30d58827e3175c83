use crate::core::{SyncError, SyncResult};
use crate::di::ConfigProvider;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Modrinth project id or slug of the modpack
    pub modpack_id: String,

    /// Server instance directory (contains `mods/`, `config/`, ...)
    pub instance_dir: PathBuf,

    /// Ownership applied to the instance after an install (Unix only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: Permissions,

    /// Case-insensitive substrings of mod filenames that cleanup must keep
    #[serde(default, deserialize_with = "null_as_default")]
    pub preserved_mods: Vec<String>,

    /// Case-insensitive substrings of mod filenames never installed on the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_only_mods: Vec<String>,

    /// Modrinth API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Maximum number of mod downloads in flight
    #[serde(default = "default_max_concurrent_downloads")]
    pub max_concurrent_downloads: usize,

    /// Timeout for registry API calls, in seconds
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,

    /// Timeout for each content download, in seconds
    #[serde(default = "default_download_timeout_secs")]
    pub download_timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Permissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Defaults to `user` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Treat an explicit YAML null (`permissions:` with nothing under it) as the default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_api_url() -> String {
    "https://api.modrinth.com/v2".to_string()
}

fn default_max_concurrent_downloads() -> usize {
    10
}

fn default_api_timeout_secs() -> u64 {
    30
}

fn default_download_timeout_secs() -> u64 {
    60
}

impl Config {
    /// Create a config with defaults for every optional setting
    pub fn new(modpack_id: impl Into<String>, instance_dir: impl Into<PathBuf>) -> Self {
        Self {
            modpack_id: modpack_id.into(),
            instance_dir: instance_dir.into(),
            permissions: Permissions::default(),
            preserved_mods: Vec::new(),
            client_only_mods: Vec::new(),
            api_url: default_api_url(),
            max_concurrent_downloads: default_max_concurrent_downloads(),
            api_timeout_secs: default_api_timeout_secs(),
            download_timeout_secs: default_download_timeout_secs(),
        }
    }

    /// Load and validate config from a YAML file
    pub fn load(path: &Path) -> SyncResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SyncError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Parse and validate config from YAML content
    pub fn parse(content: &str) -> SyncResult<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| SyncError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> SyncResult<()> {
        if self.modpack_id.trim().is_empty() {
            return Err(SyncError::Config("modpack_id must not be empty".to_string()));
        }
        if self.instance_dir.as_os_str().is_empty() {
            return Err(SyncError::Config("instance_dir must not be empty".to_string()));
        }
        if self.max_concurrent_downloads == 0 {
            return Err(SyncError::Config(
                "max_concurrent_downloads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Locate the config file.
///
/// Uses `requested` when it exists, otherwise falls back to `config.yaml`
/// next to the running executable.
pub fn resolve_config_path(requested: &Path) -> SyncResult<PathBuf> {
    if requested.exists() {
        return Ok(requested.to_path_buf());
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)));

    match beside_exe {
        Some(path) if path.exists() => Ok(path),
        _ => Err(SyncError::Config(format!(
            "Config file not found: {}",
            requested.display()
        ))),
    }
}

// Implement ConfigProvider trait
impl ConfigProvider for Config {
    fn modpack_id(&self) -> &str {
        &self.modpack_id
    }

    fn instance_dir(&self) -> &Path {
        &self.instance_dir
    }

    fn permission_user(&self) -> Option<&str> {
        self.permissions.user.as_deref()
    }

    fn permission_group(&self) -> Option<&str> {
        self.permissions.group.as_deref()
    }

    fn preserved_mods(&self) -> &[String] {
        &self.preserved_mods
    }

    fn client_only_mods(&self) -> &[String] {
        &self.client_only_mods
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn max_concurrent_downloads(&self) -> usize {
        self.max_concurrent_downloads
    }

    fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }

    fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }
}
