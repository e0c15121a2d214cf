use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::storage::{BlobStore, StorageError};

/// One JSON file per key under a data directory.
///
/// Writes go to a temp file in the same directory and are renamed over the
/// target, so a crash mid-write leaves the previous blob intact.
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError> {
        match tokio::fs::read(self.path_for(key)).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn put(&self, key: &str, blob: Bytes) -> Result<(), StorageError> {
        let dir = self.dir.clone();
        let path = self.path_for(key);
        tokio::task::spawn_blocking(move || -> Result<(), StorageError> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(&blob)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            debug!("Wrote {} bytes to {}", blob.len(), path.display());
            Ok(())
        })
        .await??;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path()).unwrap();
        assert!(store.get("ledger").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path()).unwrap();
        store.put("ledger", Bytes::from_static(b"[1]")).await.unwrap();
        store.put("ledger", Bytes::from_static(b"[]")).await.unwrap();
        assert_eq!(
            store.get("ledger").await.unwrap().unwrap(),
            Bytes::from_static(b"[]")
        );
    }

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileBlobStore::new(&nested).unwrap();
        store.put("k", Bytes::from_static(b"x")).await.unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn test_key_is_sanitized_into_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path()).unwrap();
        let path = store.path_for("../evil/key");
        assert_eq!(path, dir.path().join("___evil_key.json"));
    }
}
