use std::path::{Path, PathBuf};

use entrypack_utils::indexmap::FxIndexMap;
use serde::{Deserialize, Deserializer};

use crate::{ENTRYPOINTS_FILE_NAME, OneOrMany};

/// The part of the bundler's stats snapshot the manifest step reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStatistics {
  /// Absolute directory the build was emitted to.
  pub output_path: PathBuf,
  /// URL prefix emitted assets are served under. Empty when the bundler reports none.
  #[serde(default, deserialize_with = "deserialize_public_path")]
  pub public_path: String,
  #[serde(default)]
  pub named_chunk_groups: FxIndexMap<String, ChunkGroup>,
}

impl BuildStatistics {
  pub fn new(output_path: impl Into<PathBuf>, public_path: impl Into<String>) -> Self {
    Self {
      output_path: output_path.into(),
      public_path: public_path.into(),
      named_chunk_groups: FxIndexMap::default(),
    }
  }

  #[must_use]
  pub fn with_chunk_group<I, S>(mut self, name: impl Into<String>, assets: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let assets = assets.into_iter().map(Into::into).collect();
    self.named_chunk_groups.insert(name.into(), ChunkGroup { assets });
    self
  }

  pub fn entrypoints_file_path(&self) -> PathBuf {
    entrypoints_file_path(&self.output_path)
  }
}

pub fn entrypoints_file_path(output_path: &Path) -> PathBuf {
  output_path.join(ENTRYPOINTS_FILE_NAME)
}

/// A named chunk group with its asset list already normalized to a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChunkGroup {
  #[serde(default, deserialize_with = "deserialize_assets")]
  pub assets: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AssetRef {
  Name(String),
  Detailed { name: String },
}

impl AssetRef {
  fn into_name(self) -> String {
    match self {
      Self::Name(name) | Self::Detailed { name } => name,
    }
  }
}

fn deserialize_assets<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
  let assets = OneOrMany::<AssetRef>::deserialize(deserializer)?;
  Ok(assets.into_vec().into_iter().map(AssetRef::into_name).collect())
}

fn deserialize_public_path<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn deserializes_classic_stats() {
    let stats: BuildStatistics = serde_json::from_str(
      r#"{
        "outputPath": "/app/public/build",
        "publicPath": "/build/",
        "namedChunkGroups": {
          "main": { "chunks": [0], "assets": ["main.js", "main.css"] },
          "vendor": { "assets": "vendor.js" }
        }
      }"#,
    )
    .unwrap();

    assert_eq!(stats.output_path, PathBuf::from("/app/public/build"));
    assert_eq!(stats.public_path, "/build/");
    assert_eq!(stats.named_chunk_groups["main"].assets, vec!["main.js", "main.css"]);
    assert_eq!(stats.named_chunk_groups["vendor"].assets, vec!["vendor.js"]);
    assert_eq!(stats.named_chunk_groups.keys().collect::<Vec<_>>(), vec!["main", "vendor"]);
  }

  #[test]
  fn deserializes_detailed_asset_entries() {
    let stats: BuildStatistics = serde_json::from_str(
      r#"{
        "outputPath": "/dist",
        "publicPath": null,
        "namedChunkGroups": {
          "runtime": { "assets": [{ "name": "runtime.js", "size": 1024 }] },
          "styles": { "assets": { "name": "styles.css" } }
        }
      }"#,
    )
    .unwrap();

    assert_eq!(stats.public_path, "");
    assert_eq!(stats.named_chunk_groups["runtime"].assets, vec!["runtime.js"]);
    assert_eq!(stats.named_chunk_groups["styles"].assets, vec!["styles.css"]);
  }

  #[test]
  fn missing_optional_fields_default_to_empty() {
    let stats: BuildStatistics = serde_json::from_str(r#"{ "outputPath": "/dist" }"#).unwrap();

    assert_eq!(stats.public_path, "");
    assert!(stats.named_chunk_groups.is_empty());
    assert_eq!(stats.entrypoints_file_path(), PathBuf::from("/dist/entrypoints.json"));
  }
}
