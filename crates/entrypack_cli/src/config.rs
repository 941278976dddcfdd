use std::path::Path;

use anyhow::Context;
use entrypack::{ExtractionRuleOptions, FileSystem, OneOrMany, OsFileSystem, SharedEntry};
use serde::Deserialize;

/// Content of `entrypack.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntrypackConfig {
  #[serde(default)]
  pub shared_entries: Vec<SharedEntryConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SharedEntryConfig {
  pub name: String,
  #[serde(default)]
  pub files: OneOrMany<String>,
  #[serde(default)]
  pub options: ExtractionRuleOptions,
}

impl SharedEntryConfig {
  pub fn into_shared_entry(self) -> SharedEntry {
    let Self { name, files, options } = self;
    let entry = SharedEntry::new(name, files);

    if options.is_empty() {
      entry
    } else {
      entry.with_options(move |builder| options.apply_to(builder))
    }
  }
}

impl EntrypackConfig {
  pub fn into_shared_entries(self) -> Vec<SharedEntry> {
    self.shared_entries.into_iter().map(SharedEntryConfig::into_shared_entry).collect()
  }
}

pub async fn load_config(path: &Path) -> anyhow::Result<EntrypackConfig> {
  let content = OsFileSystem
    .read_to_string(path)
    .await
    .with_context(|| format!("Failed to read the configuration file {}", path.display()))?;

  serde_json::from_str(&content)
    .with_context(|| format!("Invalid configuration in {}", path.display()))
}

#[cfg(test)]
mod tests {
  use entrypack::{commons_chunks, MinChunks};
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;

  fn parse(value: serde_json::Value) -> EntrypackConfig {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn options_become_the_callback() {
    let config = parse(json!({
      "sharedEntries": [
        { "name": "vendor", "files": ["react", "react-dom"] },
        {
          "name": "admin",
          "files": "admin.js",
          "options": { "chunks": ["admin", "reports"], "minChunks": 2 }
        }
      ]
    }));

    let shared_entries = config.into_shared_entries();
    assert_eq!(shared_entries[0].files, vec!["react", "react-dom"]);
    assert!(shared_entries[0].options_callback.is_none());
    assert!(shared_entries[1].options_callback.is_some());

    let rules = commons_chunks(&shared_entries);
    let names = rules.iter().map(|rule| rule.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["vendor", "admin", "manifest"]);
    assert_eq!(rules[0].min_chunks, MinChunks::Always);
    assert_eq!(rules[1].chunks, Some(vec!["admin".to_string(), "reports".to_string()]));
    assert_eq!(rules[1].min_chunks, MinChunks::Count(2));
  }

  #[test]
  fn empty_config_plans_nothing() {
    assert!(commons_chunks(&parse(json!({})).into_shared_entries()).is_empty());
  }

  #[test]
  fn unknown_keys_are_rejected() {
    let error =
      serde_json::from_value::<EntrypackConfig>(json!({ "sharedEntry": [] })).unwrap_err();
    assert!(error.to_string().contains("sharedEntry"));
  }

  #[tokio::test]
  async fn loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entrypack.json");
    std::fs::write(&path, r#"{ "sharedEntries": [{ "name": "vendor", "files": "jquery" }] }"#)
      .unwrap();

    let config = load_config(&path).await.unwrap();
    assert_eq!(config.shared_entries.len(), 1);
    assert_eq!(config.shared_entries[0].name, "vendor");

    let error = load_config(&dir.path().join("missing.json")).await.unwrap_err();
    assert!(error.to_string().starts_with("Failed to read the configuration file"));
  }
}
