use crate::modrinth::types::Hashes;
use crate::package::fetcher::VerifiedFetcher;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Default number of downloads in flight
pub const DEFAULT_MAX_CONCURRENT: usize = 10;

/// A single file to fetch, verify and write
#[derive(Debug, Clone)]
pub struct DownloadTask {
    pub url: String,
    pub target: PathBuf,
    pub expected_size: Option<u64>,
    pub hashes: Hashes,
}

impl DownloadTask {
    /// Filename used in logs and failure reports
    pub fn filename(&self) -> String {
        self.target
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.target.display().to_string())
    }
}

/// Aggregate outcome of a download batch
///
/// `succeeded + failed` always equals the number of tasks submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub succeeded: usize,
    pub failed: usize,
    /// Failed filenames, in task order
    pub failed_files: Vec<String>,
}

impl DownloadReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Runs download tasks on a bounded pool of concurrent workers
///
/// Tasks write to disjoint paths, so they share nothing but the fetcher.
/// A failed task is recorded and never cancels its siblings.
pub struct DownloadCoordinator {
    fetcher: Arc<VerifiedFetcher>,
    max_concurrent: usize,
}

impl DownloadCoordinator {
    pub fn new(fetcher: Arc<VerifiedFetcher>, max_concurrent: Option<usize>) -> Self {
        Self {
            fetcher,
            max_concurrent: max_concurrent.unwrap_or(DEFAULT_MAX_CONCURRENT).max(1),
        }
    }

    /// Download every task and report per-file outcomes
    pub async fn run(&self, tasks: Vec<DownloadTask>) -> DownloadReport {
        self.run_inner(tasks, None).await
    }

    /// Same as [`run`](Self::run), drawing a progress bar on the terminal
    pub async fn run_with_progress(&self, tasks: Vec<DownloadTask>) -> DownloadReport {
        let pb = ProgressBar::new(tasks.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} mods")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);

        let report = self.run_inner(tasks, Some(&pb)).await;
        pb.finish_and_clear();
        report
    }

    async fn run_inner(&self, tasks: Vec<DownloadTask>, pb: Option<&ProgressBar>) -> DownloadReport {
        let filenames: Vec<String> = tasks.iter().map(DownloadTask::filename).collect();
        let mut outcomes: Vec<Option<bool>> = vec![None; tasks.len()];
        let mut join_set = JoinSet::new();

        for (index, task) in tasks.into_iter().enumerate() {
            if join_set.len() >= self.max_concurrent {
                // Wait for one task to complete before adding another
                if let Some(joined) = join_set.join_next().await {
                    record(joined, &filenames, &mut outcomes, pb);
                }
            }

            let fetcher = Arc::clone(&self.fetcher);
            join_set.spawn(async move {
                let result = fetcher
                    .fetch_to(&task.url, &task.target, task.expected_size, &task.hashes)
                    .await;
                (index, result)
            });
        }

        while let Some(joined) = join_set.join_next().await {
            record(joined, &filenames, &mut outcomes, pb);
        }

        let mut report = DownloadReport::default();
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Some(true) => report.succeeded += 1,
                Some(false) => {
                    report.failed += 1;
                    report.failed_files.push(filenames[index].clone());
                }
                None => {
                    // The worker panicked or was cancelled before reporting back
                    tracing::warn!(file = %filenames[index], "download task did not complete");
                    report.failed += 1;
                    report.failed_files.push(filenames[index].clone());
                }
            }
        }
        report
    }
}

type Joined = Result<(usize, Result<u64, crate::core::FetchError>), tokio::task::JoinError>;

fn record(
    joined: Joined,
    filenames: &[String],
    outcomes: &mut [Option<bool>],
    pb: Option<&ProgressBar>,
) {
    let (index, result) = match joined {
        Ok(done) => done,
        Err(e) => {
            tracing::warn!(error = %e, "download worker failed");
            return;
        }
    };

    let filename = &filenames[index];
    match result {
        Ok(bytes) => {
            tracing::info!(file = %filename, bytes, "✓ downloaded");
            outcomes[index] = Some(true);
        }
        Err(e) => {
            tracing::warn!(file = %filename, error = %e, "✗ download failed");
            outcomes[index] = Some(false);
        }
    }

    if let Some(pb) = pb {
        pb.inc(1);
    }
}
