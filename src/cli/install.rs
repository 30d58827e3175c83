use packsync::core::SyncResult;
use packsync::sync::{SyncMode, SyncOutcome};
use std::io::IsTerminal;
use std::path::Path;

pub async fn run(config_path: &Path, mode: SyncMode) -> SyncResult<()> {
    let engine = super::load_engine(config_path)?.with_progress(std::io::stderr().is_terminal());

    let outcome = engine.run(mode).await?;
    match &outcome {
        SyncOutcome::UpToDate { .. } => println!("{}", outcome),
        SyncOutcome::Synced(_) => println!("\n{}", outcome),
    }

    Ok(())
}
