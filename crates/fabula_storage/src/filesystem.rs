//! Filesystem-based blob storage implementation.

use crate::BlobStore;
use fabula_error::{FabulaResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Filesystem storage backend.
///
/// Stores one file per key directly under a base directory. Writes go
/// through a temp file plus rename so a crash mid-write never leaves a
/// half-written checkpoint behind.
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> FabulaResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem blob store");
        Ok(Self { base_path })
    }

    /// Resolve a key to its path, rejecting keys that escape the base
    /// directory.
    fn key_path(&self, key: &str) -> FabulaResult<PathBuf> {
        if key.is_empty() || Path::new(key).components().count() != 1 || key == ".." {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(key.to_string())).into());
        }
        Ok(self.base_path.join(key))
    }
}

#[async_trait::async_trait]
impl BlobStore for FileStore {
    async fn exists(&self, key: &str) -> FabulaResult<bool> {
        let path = self.key_path(key)?;
        tokio::fs::try_exists(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
                .into()
        })
    }

    async fn read(&self, key: &str) -> FabulaResult<Vec<u8>> {
        let path = self.key_path(key)?;
        tokio::fs::read(&path).await.map_err(|e| {
            let kind = if e.kind() == std::io::ErrorKind::NotFound {
                StorageErrorKind::NotFound(key.to_string())
            } else {
                StorageErrorKind::FileRead(format!("{}: {}", path.display(), e))
            };
            StorageError::new(kind).into()
        })
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn write(&self, key: &str, data: &[u8]) -> FabulaResult<()> {
        let path = self.key_path(key)?;
        let temp_path = path.with_extension("tmp");

        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        })
    }

    async fn delete(&self, key: &str) -> FabulaResult<()> {
        let path = self.key_path(key)?;
        tokio::fs::remove_file(&path).await.map_err(|e| {
            let kind = if e.kind() == std::io::ErrorKind::NotFound {
                StorageErrorKind::NotFound(key.to_string())
            } else {
                StorageErrorKind::Delete(format!("{}: {}", path.display(), e))
            };
            StorageError::new(kind).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn blobs_round_trip() {
        let (_dir, store) = store();
        store.write("state.json", b"{\"a\":1}").await.unwrap();
        assert!(store.exists("state.json").await.unwrap());
        assert_eq!(store.read("state.json").await.unwrap(), b"{\"a\":1}");
    }

    #[tokio::test]
    async fn missing_keys_read_as_not_found() {
        let (_dir, store) = store();
        assert!(!store.exists("absent").await.unwrap());
        let err = store.read("absent").await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn delete_removes_the_blob() {
        let (_dir, store) = store();
        store.write("gone", b"bytes").await.unwrap();
        store.delete("gone").await.unwrap();
        assert!(!store.exists("gone").await.unwrap());
    }

    #[tokio::test]
    async fn keys_cannot_escape_the_base_directory() {
        let (_dir, store) = store();
        assert!(store.read("../outside").await.is_err());
        assert!(store.write("a/b", b"x").await.is_err());
    }

    #[tokio::test]
    async fn writes_replace_existing_content() {
        let (_dir, store) = store();
        store.write("k", b"old").await.unwrap();
        store.write("k", b"new").await.unwrap();
        assert_eq!(store.read("k").await.unwrap(), b"new");
    }
}
