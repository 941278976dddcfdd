use std::{borrow::Cow, path::Path};

use async_trait::async_trait;
use entrypack_common::BuildStatistics;
use entrypack_error::ManifestError;
use entrypack_fs::FileSystemRef;
use entrypack_plugin::{AfterEmitContext, LoggerRef, Plugin};
use rustc_hash::FxHashSet;
use serde_json::{Map, Value};

use crate::utils::other_named_chunk_groups::get_other_named_chunk_groups;

const ENTRYPOINTS_FIELD: &str = "entrypoints";

/// Completes the `entrypoints.json` file the bundler writes with the named chunk groups it
/// leaves out, e.g. shared vendor chunks and copied files.
///
/// Runs after emit so it sees the file of the current build. Every failure is reported through
/// the logger as a warning and leaves the file as it was: the manifest is a convenience
/// artifact and must never fail the build.
#[derive(Debug)]
pub struct EntryFilesManifestPlugin {
  fs: FileSystemRef,
  logger: LoggerRef,
}

impl EntryFilesManifestPlugin {
  pub fn new(fs: FileSystemRef, logger: LoggerRef) -> Self {
    Self { fs, logger }
  }

  /// Read-merge-write of `<outputPath>/entrypoints.json`.
  pub async fn update_manifest(&self, stats: &BuildStatistics) -> Result<(), ManifestError> {
    let path = stats.entrypoints_file_path();

    let content = self
      .fs
      .read_to_string(&path)
      .await
      .map_err(|source| ManifestError::Unreadable { path: path.clone(), source })?;

    let content = merge_other_named_chunk_groups(&path, &content, stats)?;

    self
      .fs
      .write(&path, &content)
      .await
      .map_err(|source| ManifestError::Unwritable { path: path.clone(), source })?;

    tracing::debug!(path = %path.display(), "updated entrypoints manifest");
    Ok(())
  }
}

#[async_trait]
impl Plugin for EntryFilesManifestPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed("EntryFilesManifestPlugin")
  }

  #[tracing::instrument(level = "debug", skip_all, fields(plugin = "EntryFilesManifestPlugin"))]
  async fn after_emit(&self, ctx: &AfterEmitContext<'_>) {
    if let Err(error) = self.update_manifest(ctx.stats).await {
      self.logger.warning(&error.to_string());
    }
  }
}

/// Adds the groups missing from the document's `entrypoints` and renders it back to text.
///
/// Groups already listed win over computed ones of the same name. Other top-level fields and
/// the key order of the document are kept.
fn merge_other_named_chunk_groups(
  path: &Path,
  content: &str,
  stats: &BuildStatistics,
) -> Result<String, ManifestError> {
  let mut document = serde_json::from_str::<Value>(content)
    .map_err(|source| ManifestError::Malformed { path: path.to_path_buf(), source })?;

  let Some(fields) = document.as_object_mut() else {
    return Err(ManifestError::NotAnObject { path: path.to_path_buf() });
  };

  let entrypoints = fields.entry(ENTRYPOINTS_FIELD).or_insert_with(|| Value::Object(Map::new()));
  if !entrypoints.is_object() {
    *entrypoints = Value::Object(Map::new());
  }

  if let Value::Object(entrypoints) = entrypoints {
    let others = {
      let known = entrypoints.keys().map(String::as_str).collect::<FxHashSet<_>>();
      get_other_named_chunk_groups(stats, &known)
    };

    for (name, assets) in others {
      let assets = assets.into_iter().map(|(category, urls)| (category, Value::from(urls)));
      entrypoints.entry(name).or_insert_with(|| Value::Object(assets.collect()));
    }
  }

  serde_json::to_string_pretty(&document).map_err(ManifestError::Serialize)
}
