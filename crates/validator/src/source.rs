//! Artifact sources
//!
//! Generated artifacts are read through [`ArtifactSource`] so validation does
//! not care whether they live on disk or in memory.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dialogflow_agent_core::{Error, Result};

/// Supplies directory listings and file contents
///
/// # Example
///
/// ```ignore
/// let source = FsArtifactSource::new();
/// let files = source.list(Path::new("speech-assets/dialogflow/production/intents")).await?;
/// ```
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// File names directly inside `dir`, sorted
    async fn list(&self, dir: &Path) -> Result<Vec<String>>;

    /// Full UTF-8 content of `path`
    async fn read(&self, path: &Path) -> Result<String>;
}

fn read_error(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::FileRead {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Reads artifacts from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsArtifactSource;

impl FsArtifactSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArtifactSource for FsArtifactSource {
    async fn list(&self, dir: &Path) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| read_error(dir, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| read_error(dir, e))? {
            // Follows symlinks
            let metadata = tokio::fs::metadata(entry.path())
                .await
                .map_err(|e| read_error(&entry.path(), e))?;
            if metadata.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        tracing::trace!(dir = %dir.display(), count = names.len(), "Listed artifacts");
        Ok(names)
    }

    async fn read(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| read_error(path, e))
    }
}

/// In-memory artifacts keyed by full path
///
/// A directory exists when at least one file lives directly inside it.
#[derive(Debug, Default)]
pub struct InMemoryArtifactSource {
    files: RwLock<BTreeMap<PathBuf, String>>,
}

impl InMemoryArtifactSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.write().insert(path.into(), content.into());
    }

    pub fn remove(&self, path: &Path) -> Option<String> {
        self.files.write().remove(path)
    }

    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}

#[async_trait]
impl ArtifactSource for InMemoryArtifactSource {
    async fn list(&self, dir: &Path) -> Result<Vec<String>> {
        let files = self.files.read();
        let names: Vec<String> = files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();

        if names.is_empty() {
            return Err(read_error(dir, "no such directory"));
        }
        Ok(names)
    }

    async fn read(&self, path: &Path) -> Result<String> {
        self.files
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| read_error(path, "no such file"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_list_is_sorted_and_shallow() {
        let source = InMemoryArtifactSource::new()
            .with_file("out/intents/YesIntent_usersays_en.json", "[]")
            .with_file("out/intents/HelpIntent_usersays_en.json", "[]")
            .with_file("out/intents/nested/NoIntent_usersays_en.json", "[]")
            .with_file("out/agent.json", "{}");

        let names = source.list(Path::new("out/intents")).await.unwrap();
        assert_eq!(
            names,
            vec!["HelpIntent_usersays_en.json", "YesIntent_usersays_en.json"]
        );
        assert_eq!(source.len(), 4);
    }

    #[tokio::test]
    async fn test_in_memory_missing_entries() {
        let source = InMemoryArtifactSource::new().with_file("out/agent.json", "{}");

        let err = source.list(Path::new("out/intents")).await.unwrap_err();
        assert!(matches!(err, Error::FileRead { ref path, .. } if path == "out/intents"));

        let err = source.read(Path::new("out/other.json")).await.unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));

        assert_eq!(source.remove(Path::new("out/agent.json")).as_deref(), Some("{}"));
        assert!(source.is_empty());
    }

    #[tokio::test]
    async fn test_fs_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), "[]").unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"name":"a"}"#).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let source = FsArtifactSource::new();
        let names = source.list(dir.path()).await.unwrap();
        assert_eq!(names, vec!["a.json", "b.json"]);

        let content = source.read(&dir.path().join("a.json")).await.unwrap();
        assert_eq!(content, r#"{"name":"a"}"#);

        let err = source.read(&dir.path().join("missing.json")).await.unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
        assert!(source.list(&dir.path().join("nope")).await.is_err());
    }
}
