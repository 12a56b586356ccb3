//! File-backed storage: one `<collection>.json` per collection

use std::path::PathBuf;

use async_trait::async_trait;

use super::{StorageBackend, StorageError};

/// Stores each collection as a pretty-printed JSON file under a data dir
///
/// Writes go through a temp file followed by a rename, so a reader either
/// sees the previous collection or the new one, never a partial write.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match tokio::fs::read(self.path_for(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.path_for(name);
        let tmp = self.root.join(format!("{}.json.tmp", name));
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}
