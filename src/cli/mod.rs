pub mod check;
pub mod install;

use packsync::config::{resolve_config_path, Config};
use packsync::core::SyncResult;
use packsync::di::ServiceContainer;
use packsync::sync::SyncEngine;
use std::path::Path;

/// Load the config and wire production services into an engine
pub fn load_engine(config_path: &Path) -> SyncResult<SyncEngine> {
    let path = resolve_config_path(config_path)?;
    tracing::debug!(path = %path.display(), "loading config");
    let config = Config::load(&path)?;
    let services = ServiceContainer::new(config)?;
    Ok(SyncEngine::new(services))
}
