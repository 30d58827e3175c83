use clap::{Parser, Subcommand};
use packsync::config::CONFIG_FILE_NAME;
use packsync::sync::SyncMode;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "packsync")]
#[command(about = "Keep a Minecraft server in sync with a Modrinth modpack")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the latest modpack version (skips if already installed)
    Install,
    /// Update to the latest version (same as install)
    Update,
    /// Reinstall the latest version even if it is already installed
    ForceUpdate,
    /// Compare the installed version with the latest one
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install => cli::install::run(&cli.config, SyncMode::Install).await,
        Commands::Update => cli::install::run(&cli.config, SyncMode::Update).await,
        Commands::ForceUpdate => cli::install::run(&cli.config, SyncMode::ForceUpdate).await,
        Commands::Check => cli::check::run(&cli.config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", packsync::core::format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
