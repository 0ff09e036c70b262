//! Fabula CLI binary.
//!
//! One invocation runs one story step: start a new story when no checkpoint
//! exists, otherwise advance the current one by its poll results. An
//! external scheduler (cron, a timer-triggered function) is expected to run
//! this on a fixed interval.

use clap::Parser;
use fabula::{
    CheckpointStore, FileStore, OpenAiClient, StoryGenerator, Worker, WorkerConfig, XClient,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fabula", version, about = "Interactive-fiction poll bot")]
struct Cli {
    /// Path to a worker configuration TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the checkpoint blob lives in
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => WorkerConfig::from_file(path)?,
        None => WorkerConfig::default(),
    };

    let generator = StoryGenerator::new(OpenAiClient::from_env()?);
    let publisher = XClient::from_env()?;
    let checkpoints = CheckpointStore::new(
        FileStore::new(&cli.data_dir)?,
        config.checkpoint_key.clone(),
    );

    let worker = Worker::new(generator, publisher, checkpoints, config);
    worker.run_once().await?;

    tracing::info!("Done");
    Ok(())
}
