use crate::core::SyncResult;
use crate::di::OwnershipFixer;
use std::path::Path;

/// Ownership fixup for the host platform.
///
/// On Unix every entry below `path` is `chown`ed to the named user and
/// group. Elsewhere ownership is left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOwnership;

#[cfg(unix)]
impl OwnershipFixer for SystemOwnership {
    fn apply_ownership(&self, path: &Path, user: &str, group: Option<&str>) -> SyncResult<()> {
        use crate::core::SyncError;
        use nix::unistd::{chown, Group, User};
        use walkdir::WalkDir;

        let uid = User::from_name(user)
            .map_err(|e| SyncError::Permission(format!("Failed to look up user {}: {}", user, e)))?
            .ok_or_else(|| SyncError::Permission(format!("Unknown user: {}", user)))?
            .uid;

        let group_name = group.unwrap_or(user);
        let gid = Group::from_name(group_name)
            .map_err(|e| {
                SyncError::Permission(format!("Failed to look up group {}: {}", group_name, e))
            })?
            .ok_or_else(|| SyncError::Permission(format!("Unknown group: {}", group_name)))?
            .gid;

        for entry in WalkDir::new(path) {
            let entry = entry?;
            chown(entry.path(), Some(uid), Some(gid)).map_err(|e| {
                SyncError::Permission(format!(
                    "Could not change owner of {}: {}",
                    entry.path().display(),
                    e
                ))
            })?;
        }

        Ok(())
    }
}

#[cfg(not(unix))]
impl OwnershipFixer for SystemOwnership {
    fn apply_ownership(&self, path: &Path, user: &str, _group: Option<&str>) -> SyncResult<()> {
        tracing::debug!(path = %path.display(), user, "ownership fixup is Unix-only; skipping");
        Ok(())
    }
}
