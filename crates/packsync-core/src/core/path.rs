use std::path::{Component, Path, PathBuf};

/// Name of the mods directory inside an instance and inside override trees.
pub const MODS_DIR: &str = "mods";

/// Name of the installed-version marker file.
pub const VERSION_FILE: &str = ".modpack_version";

/// Get the mods directory for an instance (./mods)
pub fn mods_dir(instance_dir: &Path) -> PathBuf {
    instance_dir.join(MODS_DIR)
}

/// Get the installed-version marker (./.modpack_version)
pub fn version_file(instance_dir: &Path) -> PathBuf {
    instance_dir.join(VERSION_FILE)
}

/// Check that a manifest path stays inside the directory it is joined onto.
///
/// Rejects absolute paths, drive prefixes and any `..` component.
pub fn is_safe_relative(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
