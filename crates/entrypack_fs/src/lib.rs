mod file_system;
mod memory;
#[cfg(feature = "os")]
mod os;

pub use crate::{
  file_system::{FileSystem, FileSystemRef, MockFileSystem},
  memory::InMemoryFileSystem,
};
#[cfg(feature = "os")]
pub use os::OsFileSystem;
