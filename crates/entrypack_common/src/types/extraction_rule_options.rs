use serde::Deserialize;

use crate::{Async, ExtractionRuleBuilder, MinChunks};

/// Declarative rule overrides, as written in a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtractionRuleOptions {
  pub chunks: Option<Vec<String>>,
  pub min_chunks: Option<MinChunks>,
  pub filename: Option<String>,
  pub children: Option<bool>,
  pub deep_children: Option<bool>,
  #[serde(rename = "async")]
  pub async_chunk: Option<Async>,
  pub min_size: Option<u64>,
}

impl ExtractionRuleOptions {
  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }

  pub fn apply_to(&self, builder: &mut ExtractionRuleBuilder) {
    if let Some(chunks) = &self.chunks {
      builder.chunks(chunks.iter().cloned());
    }
    if let Some(min_chunks) = self.min_chunks {
      builder.min_chunks(min_chunks);
    }
    if let Some(filename) = &self.filename {
      builder.filename(filename.clone());
    }
    if let Some(children) = self.children {
      builder.children(children);
    }
    if let Some(deep_children) = self.deep_children {
      builder.deep_children(deep_children);
    }
    if let Some(async_chunk) = &self.async_chunk {
      builder.async_chunk(async_chunk.clone());
    }
    if let Some(min_size) = self.min_size {
      builder.min_size(min_size);
    }
  }
}

#[test]
fn test_apply_only_touches_given_fields() {
  let options: ExtractionRuleOptions =
    serde_json::from_str(r#"{ "minChunks": 3, "async": true }"#).unwrap();

  let mut builder = ExtractionRuleBuilder::new("vendor");
  builder.chunks(["vendor"]);
  options.apply_to(&mut builder);
  let rule = builder.build();

  assert_eq!(rule.chunks, Some(vec!["vendor".to_string()]));
  assert_eq!(rule.min_chunks, MinChunks::Count(3));
  assert_eq!(rule.async_chunk, Some(Async::Enabled(true)));
  assert_eq!(rule.filename, None);
}

#[test]
fn test_rejects_unknown_fields() {
  assert!(serde_json::from_str::<ExtractionRuleOptions>(r#"{ "minChunk": 3 }"#).is_err());
}
