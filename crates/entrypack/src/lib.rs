mod compiler;
mod plugins;
mod utils;

pub use crate::{
  compiler::Compiler,
  plugins::entry_files_manifest::EntryFilesManifestPlugin,
  utils::{commons_chunks::commons_chunks, other_named_chunk_groups::get_other_named_chunk_groups},
};
pub use entrypack_common::*;
pub use entrypack_error::{BuildError, BuildResult, ManifestError};
pub use entrypack_fs::{FileSystem, FileSystemRef, InMemoryFileSystem, OsFileSystem};
pub use entrypack_plugin::{
  AfterEmitContext, Logger, LoggerRef, Plugin, RecordingLogger, TracingLogger,
};
