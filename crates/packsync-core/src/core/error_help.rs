use crate::core::error::SyncError;

/// Remediation hints attached to fatal errors at the top-level boundary.
pub trait ErrorHelp {
    fn help(&self) -> Option<&'static str>;
}

impl ErrorHelp for SyncError {
    fn help(&self) -> Option<&'static str> {
        match self {
            SyncError::Config(_) => {
                Some("Create a config.yaml file with at least `modpack_id` and `instance_dir`.")
            }
            SyncError::Registry(_) => Some(
                "Check your network connection and that `modpack_id` names an existing project.",
            ),
            SyncError::MissingArchive(_) => {
                Some("The latest version does not ship a modpack archive. Nothing can be installed.")
            }
            SyncError::Archive(_) | SyncError::Manifest(_) => {
                Some("The modpack archive appears to be corrupt or not a valid .mrpack file.")
            }
            SyncError::Permission(_) => {
                Some("Run as a user allowed to change ownership, or remove `permissions` from the config.")
            }
            _ => None,
        }
    }
}

/// Format an error for display, followed by a hint when one is known.
pub fn format_error_with_help(error: &SyncError) -> String {
    match error.help() {
        Some(help) => format!("✗ {}\n  {}", error, help),
        None => format!("✗ {}", error),
    }
}
