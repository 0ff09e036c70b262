//! Fabula - Interactive-Fiction Poll Bot
//!
//! Fabula generates a short branching story with a language model, publishes
//! the opening as a two-option poll, and on each scheduled invocation
//! advances the story down whichever branch the audience voted for,
//! persisting its place in a checkpoint between runs.
//!
//! # Architecture
//!
//! Fabula is organized as a workspace with focused crates:
//!
//! - `fabula_core` - Story tree, checkpoint, and post data types
//! - `fabula_error` - Error types
//! - `fabula_interface` - Generation and publishing trait seams
//! - `fabula_narrative` - Story generation and structural parsing
//! - `fabula_models` - OpenAI text-generation backend
//! - `fabula_social` - X (Twitter) publishing backend
//! - `fabula_storage` - Checkpoint blob storage
//! - `fabula_worker` - The per-invocation traversal worker
//!
//! This crate (`fabula`) re-exports everything for convenience and carries
//! the binary entry point the scheduler invokes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fabula::{
//!     CheckpointStore, FileStore, OpenAiClient, StoryGenerator, Worker, WorkerConfig, XClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WorkerConfig::default();
//!     let checkpoints = CheckpointStore::new(FileStore::new("./data")?, &config.checkpoint_key);
//!     let worker = Worker::new(
//!         StoryGenerator::new(OpenAiClient::from_env()?),
//!         XClient::from_env()?,
//!         checkpoints,
//!         config,
//!     );
//!     worker.run_once().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use fabula_core::{Checkpoint, Choice, PostId, PublishedPost, StoryNode, StoryTag, StoryTree};
pub use fabula_error::{
    BackendError, ConfigError, FabulaError, FabulaErrorKind, FabulaResult, HttpError, JsonError,
    NarrativeError, NarrativeErrorKind, SocialError, SocialErrorKind, StorageError,
    StorageErrorKind, TreeError, TreeErrorKind,
};
pub use fabula_interface::{PollSpec, Publisher, TextDriver};
pub use fabula_models::OpenAiClient;
pub use fabula_narrative::{DEFAULT_PROMPT, DEFAULT_RETRIES, EMPTY_ENDING_TEXT, StoryGenerator};
pub use fabula_social::XClient;
pub use fabula_storage::{BlobStore, CheckpointStore, FileStore};
pub use fabula_worker::{MAX_POST_LEN, Worker, WorkerConfig};
