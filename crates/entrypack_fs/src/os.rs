use std::{io, path::Path};

use async_trait::async_trait;

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

#[async_trait]
impl FileSystem for OsFileSystem {
  async fn read_to_string(&self, path: &Path) -> io::Result<String> {
    tokio::fs::read_to_string(path).await
  }

  async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
    tokio::fs::write(path, contents).await
  }
}
