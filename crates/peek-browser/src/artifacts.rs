//! Evidence storage for check runs
//!
//! Screenshots are written under a single output directory with caller-supplied
//! names. Names are stable across runs: storing the same name twice overwrites
//! the previous file, so repeated runs are idempotent with respect to output
//! paths.

use chrono::{DateTime, Utc};
use peek_core::{PeekError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Metadata for a stored evidence file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckArtifact {
    /// Path the file was written to
    pub path: PathBuf,
    /// Size in bytes
    pub size_bytes: u64,
    /// When created
    pub created_at: DateTime<Utc>,
    /// Human-readable description
    pub description: String,
}

/// Writes evidence files into one output directory
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created on first store, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store PNG data under a fixed name, overwriting any previous run's file
    ///
    /// # Arguments
    /// * `name` - File stem; the file is written to `<dir>/<name>.png`
    /// * `data` - PNG bytes
    /// * `description` - Human-readable description
    pub async fn store(&self, name: &str, data: &[u8], description: &str) -> Result<CheckArtifact> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            PeekError::Screenshot(format!(
                "Failed to create artifact directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.artifact_path(name);
        fs::write(&path, data).await.map_err(|e| {
            PeekError::Screenshot(format!("Failed to write artifact {}: {}", path.display(), e))
        })?;

        Ok(CheckArtifact {
            path,
            size_bytes: data.len() as u64,
            created_at: Utc::now(),
            description: description.to_string(),
        })
    }

    /// Path a named artifact is (or would be) written to
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.png", name))
    }

    /// Get base directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_store_writes_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(temp_dir.path().join("verification"));

        let data = b"test screenshot data";
        let artifact = store
            .store("homepage_navbar", data, "Homepage with navbar")
            .await
            .unwrap();

        assert_eq!(artifact.size_bytes, data.len() as u64);
        assert_eq!(artifact.description, "Homepage with navbar");
        assert_eq!(artifact.path, store.artifact_path("homepage_navbar"));

        let content = fs::read(&artifact.path).await.unwrap();
        assert_eq!(content, data);
    }

    #[tokio::test]
    async fn test_store_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let store = ArtifactStore::new(&nested);

        store.store("menu_open", b"png", "Menu open").await.unwrap();

        assert!(nested.join("menu_open.png").exists());
    }

    #[tokio::test]
    async fn test_store_overwrites_previous_run() {
        let temp_dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(temp_dir.path());

        store.store("menu_open", b"first run", "Menu open").await.unwrap();
        let second = store.store("menu_open", b"second", "Menu open").await.unwrap();

        assert_eq!(second.size_bytes, 6);
        let content = fs::read(store.artifact_path("menu_open")).await.unwrap();
        assert_eq!(content, b"second");
    }

    #[test]
    fn test_artifact_path() {
        let store = ArtifactStore::new("verification");
        assert_eq!(
            store.artifact_path("homepage_navbar"),
            PathBuf::from("verification/homepage_navbar.png")
        );
    }
}
