use std::{
  io,
  path::{Path, PathBuf},
};

use async_trait::async_trait;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::FileSystem;

/// File system backed by a map, for tests.
#[derive(Debug, Default)]
pub struct InMemoryFileSystem {
  files: RwLock<FxHashMap<PathBuf, String>>,
}

impl InMemoryFileSystem {
  pub fn write_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
    self.files.write().insert(path.into(), contents.into());
  }

  pub fn read_file(&self, path: &Path) -> Option<String> {
    self.files.read().get(path).cloned()
  }
}

#[async_trait]
impl FileSystem for InMemoryFileSystem {
  async fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self.read_file(path).ok_or_else(|| {
      io::Error::new(io::ErrorKind::NotFound, format!("{} does not exist", path.display()))
    })
  }

  async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
    self.write_file(path, contents);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn write_replaces_previous_content() {
    let fs = InMemoryFileSystem::default();
    let path = Path::new("/dist/entrypoints.json");

    fs.write(path, "first").await.unwrap();
    fs.write(path, "second").await.unwrap();

    assert_eq!(fs.read_to_string(path).await.unwrap(), "second");
  }

  #[tokio::test]
  async fn missing_file_is_not_found() {
    let fs = InMemoryFileSystem::default();
    let error = fs.read_to_string(Path::new("/nope")).await.unwrap_err();

    assert_eq!(error.kind(), io::ErrorKind::NotFound);
  }
}
