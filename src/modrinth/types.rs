//! Modrinth API type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hash algorithm name (`sha512`, `sha1`, ...) to lowercase hex digest
pub type Hashes = BTreeMap<String, String>;

/// A published version of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageVersion {
    pub id: String,
    pub version_number: String,
    #[serde(default)]
    pub files: Vec<VersionFile>,
}

/// A distributable artifact attached to a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFile {
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub hashes: Hashes,
    #[serde(default, alias = "fileSize")]
    pub size: Option<u64>,
}

impl PackageVersion {
    /// First artifact whose filename ends with `extension`
    pub fn find_file(&self, extension: &str) -> Option<&VersionFile> {
        self.files.iter().find(|f| f.filename.ends_with(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_version_list() {
        let json = r#"[
            {
                "id": "IZskON6d",
                "version_number": "5.13.0",
                "name": "Fabulously Optimized 5.13.0",
                "files": [
                    {
                        "filename": "Fabulously.Optimized-5.13.0.mrpack",
                        "url": "https://cdn.modrinth.com/data/1KVo5zza/versions/IZskON6d/pack.mrpack",
                        "hashes": {"sha512": "abc", "sha1": "def"},
                        "size": 12345,
                        "primary": true
                    }
                ]
            }
        ]"#;
        let versions: Vec<PackageVersion> = serde_json::from_str(json).unwrap();
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].id, "IZskON6d");
        assert_eq!(versions[0].files[0].size, Some(12345));
        assert_eq!(versions[0].files[0].hashes.get("sha1").unwrap(), "def");
    }

    #[test]
    fn test_file_size_alias() {
        let json = r#"{"filename": "a.mrpack", "url": "u", "fileSize": 7}"#;
        let file: VersionFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.size, Some(7));
        assert!(file.hashes.is_empty());
    }

    #[test]
    fn test_find_file_by_extension() {
        let version = PackageVersion {
            id: "v1".to_string(),
            version_number: "1.0".to_string(),
            files: vec![
                VersionFile {
                    filename: "changelog.txt".to_string(),
                    url: "https://example.com/changelog.txt".to_string(),
                    hashes: Hashes::new(),
                    size: None,
                },
                VersionFile {
                    filename: "pack-1.0.mrpack".to_string(),
                    url: "https://example.com/pack.mrpack".to_string(),
                    hashes: Hashes::new(),
                    size: None,
                },
            ],
        };
        assert_eq!(
            version.find_file(".mrpack").map(|f| f.filename.as_str()),
            Some("pack-1.0.mrpack")
        );
        assert!(version.find_file(".zip").is_none());
    }
}
