//! Checkpoint persistence over a blob store.

use crate::BlobStore;
use fabula_core::Checkpoint;
use fabula_error::{FabulaResult, JsonError};
use tracing::debug;

/// Persists the traversal checkpoint as a UTF-8 JSON blob under one fixed
/// key.
///
/// This is the only place the checkpoint's wire codec lives; the underlying
/// [`BlobStore`] stays a minimal byte interface.
pub struct CheckpointStore<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> CheckpointStore<S> {
    /// Create a checkpoint store over `store`, keyed by `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The key the checkpoint lives under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the checkpoint, or `None` when no story is in progress.
    pub async fn load(&self) -> FabulaResult<Option<Checkpoint>> {
        if !self.store.exists(&self.key).await? {
            debug!(key = %self.key, "No checkpoint present");
            return Ok(None);
        }

        let data = self.store.read(&self.key).await?;
        let checkpoint = serde_json::from_slice(&data)
            .map_err(|e| JsonError::new(format!("Failed to decode checkpoint: {}", e)))?;

        Ok(Some(checkpoint))
    }

    /// Write the checkpoint, replacing any previous one.
    pub async fn save(&self, checkpoint: &Checkpoint) -> FabulaResult<()> {
        let data = serde_json::to_vec(checkpoint)
            .map_err(|e| JsonError::new(format!("Failed to encode checkpoint: {}", e)))?;
        self.store.write(&self.key, &data).await
    }

    /// Delete the checkpoint, marking the story complete.
    pub async fn remove(&self) -> FabulaResult<()> {
        self.store.delete(&self.key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileStore;
    use fabula_core::{PostId, StoryNode, StoryTag, StoryTree};

    fn sample_checkpoint() -> Checkpoint {
        let tree = StoryTree::new(vec![
            StoryNode::branch(StoryTag::Begin, "begin", "a", "b"),
            StoryNode::branch(StoryTag::Branch1, "one", "c", "d"),
            StoryNode::branch(StoryTag::Branch2, "two", "e", "f"),
            StoryNode::ending(StoryTag::Ending11, "end 1-1"),
            StoryNode::ending(StoryTag::Ending12, "end 1-2"),
            StoryNode::ending(StoryTag::Ending21, "end 2-1"),
            StoryNode::ending(StoryTag::Ending22, "end 2-2"),
        ])
        .unwrap();
        Checkpoint::new(PostId::new(7), tree)
    }

    #[tokio::test]
    async fn checkpoints_round_trip_through_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let checkpoints = CheckpointStore::new(FileStore::new(dir.path()).unwrap(), "cp.json");

        assert!(checkpoints.load().await.unwrap().is_none());

        let checkpoint = sample_checkpoint();
        checkpoints.save(&checkpoint).await.unwrap();
        let restored = checkpoints.load().await.unwrap().unwrap();
        assert_eq!(checkpoint, restored);

        checkpoints.remove().await.unwrap();
        assert!(checkpoints.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_blobs_surface_as_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        store.write("cp.json", b"not json").await.unwrap();

        let checkpoints = CheckpointStore::new(store, "cp.json");
        let err = checkpoints.load().await.unwrap_err();
        assert!(err.to_string().contains("decode checkpoint"));
    }
}
