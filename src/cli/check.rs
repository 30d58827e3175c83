use packsync::core::SyncResult;
use std::path::Path;

pub async fn run(config_path: &Path) -> SyncResult<()> {
    let engine = super::load_engine(config_path)?;
    let report = engine.check().await?;
    println!("{}", report);
    Ok(())
}
