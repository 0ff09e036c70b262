//! Checkpoint blob storage for the fabula story bot.
//!
//! This crate provides the pluggable byte-store abstraction the traversal
//! state lives in, a filesystem implementation of it, and the
//! [`CheckpointStore`] that layers the JSON checkpoint codec and the fixed
//! key on top. The byte store stays minimal by design; everything
//! checkpoint-shaped lives in the higher-level type.
//!
//! # Example
//!
//! ```no_run
//! use fabula_storage::{CheckpointStore, FileStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileStore::new("/var/fabula")?;
//! let checkpoints = CheckpointStore::new(store, "checkpoint.json");
//!
//! match checkpoints.load().await? {
//!     Some(checkpoint) => println!("story in progress at {}", checkpoint.post_id()),
//!     None => println!("no story in progress"),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use fabula_error::FabulaResult;

mod checkpoint;
mod filesystem;

pub use checkpoint::CheckpointStore;
pub use fabula_error::{StorageError, StorageErrorKind};
pub use filesystem::FileStore;

/// Trait for pluggable keyed byte storage.
///
/// Implementations persist opaque blobs under string keys. Absence of a key
/// is meaningful to callers, so `exists` is part of the contract rather than
/// an error path on `read`.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Whether a blob exists under `key`.
    async fn exists(&self, key: &str) -> FabulaResult<bool>;

    /// Read the blob under `key`.
    ///
    /// # Errors
    ///
    /// A missing key is a `NotFound` storage error.
    async fn read(&self, key: &str) -> FabulaResult<Vec<u8>>;

    /// Write the blob under `key`, replacing any existing content.
    async fn write(&self, key: &str, data: &[u8]) -> FabulaResult<()>;

    /// Delete the blob under `key`.
    async fn delete(&self, key: &str) -> FabulaResult<()>;
}
