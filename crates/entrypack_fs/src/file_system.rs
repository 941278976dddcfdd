use std::{fmt::Debug, io, path::Path, sync::Arc};

use async_trait::async_trait;

pub type FileSystemRef = Arc<dyn FileSystem>;

/// The file operations the post-emit steps need.
///
/// Implementations must not block the calling task. Use `OsFileSystem` for real builds and
/// `InMemoryFileSystem` or `MockFileSystem` in tests.
#[mockall::automock]
#[async_trait]
pub trait FileSystem: Debug + Send + Sync {
  async fn read_to_string(&self, path: &Path) -> io::Result<String>;

  /// Replaces the whole content of `path`, creating the file if needed.
  async fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}
