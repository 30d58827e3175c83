//! The `modrinth.index.json` manifest shipped inside a package archive.

use crate::core::path::{is_safe_relative, MODS_DIR};
use crate::core::{SyncError, SyncResult};
use crate::di::Storage;
use crate::modrinth::types::Hashes;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Name of the manifest document at the archive root
pub const INDEX_FILE: &str = "modrinth.index.json";

/// Extension of package archive artifacts
pub const ARCHIVE_EXTENSION: &str = ".mrpack";

/// Runtime requirement of a file on one side (client or server)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvRequirement {
    Required,
    Optional,
    Unsupported,
    #[serde(other)]
    Unknown,
}

/// Per-side runtime requirements of a manifest entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryEnv {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<EnvRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<EnvRequirement>,
}

/// One file listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Target path relative to the instance directory
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<EntryEnv>,
    /// Download mirrors; the first is primary
    #[serde(default)]
    pub downloads: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub hashes: Hashes,
}

/// How a manifest entry is handled by a server install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind<'a> {
    /// A file under `mods/`, installed flat into the mods directory
    Mod(&'a str),
    /// Anything else (resource packs, shaders); expected via overrides instead
    Other,
}

impl ManifestEntry {
    /// Final path component
    pub fn filename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Declared server-side requirement, if any
    pub fn server_requirement(&self) -> Option<EnvRequirement> {
        self.env.as_ref().and_then(|env| env.server)
    }

    /// Primary download URL
    pub fn primary_url(&self) -> Option<&str> {
        self.downloads.first().map(String::as_str)
    }

    pub fn classify(&self) -> EntryKind<'_> {
        let mods_prefix = format!("{}/", MODS_DIR);
        if self.path.starts_with(&mods_prefix) {
            EntryKind::Mod(self.filename())
        } else {
            EntryKind::Other
        }
    }
}

/// Parsed `modrinth.index.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestIndex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Loader/game versions, e.g. `minecraft` → `1.20.1`
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    pub files: Vec<ManifestEntry>,
}

impl ManifestIndex {
    /// Parse and validate manifest content
    pub fn parse(content: &str) -> SyncResult<Self> {
        let index: ManifestIndex = serde_json::from_str(content)
            .map_err(|e| SyncError::Manifest(format!("Invalid {}: {}", INDEX_FILE, e)))?;
        index.validate()?;
        Ok(index)
    }

    /// Load the manifest from an extracted archive directory
    pub fn load(storage: &dyn Storage, extract_dir: &Path) -> SyncResult<Self> {
        let index_path = extract_dir.join(INDEX_FILE);
        if !storage.is_file(&index_path) {
            return Err(SyncError::Manifest(format!(
                "Invalid mrpack: missing {}",
                INDEX_FILE
            )));
        }

        let bytes = storage.read(&index_path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| SyncError::Manifest(format!("{} is not UTF-8: {}", INDEX_FILE, e)))?;
        Self::parse(&content)
    }

    fn validate(&self) -> SyncResult<()> {
        let mut seen = HashSet::new();

        for entry in &self.files {
            if !is_safe_relative(&entry.path) {
                return Err(SyncError::Manifest(format!(
                    "Unsafe file path in manifest: {}",
                    entry.path
                )));
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(SyncError::Manifest(format!(
                    "Duplicate file path in manifest: {}",
                    entry.path
                )));
            }
            if matches!(entry.classify(), EntryKind::Mod(_)) && entry.downloads.is_empty() {
                return Err(SyncError::Manifest(format!(
                    "No download URL for {}",
                    entry.path
                )));
            }
        }

        Ok(())
    }
}
