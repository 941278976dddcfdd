use std::fmt;

use serde::{Deserialize, Serialize};

/// How many entry chunks must share a module before it is moved into the extracted chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MinChunksRepr", into = "MinChunksRepr")]
pub enum MinChunks {
  /// Never pull modules in by usage count. Only the modules the chunk was declared with end up
  /// in it.
  #[default]
  Always,
  Count(u32),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum MinChunksRepr {
  Count(u32),
  Named(String),
}

const INFINITY: &str = "Infinity";

impl TryFrom<MinChunksRepr> for MinChunks {
  type Error = String;

  fn try_from(value: MinChunksRepr) -> Result<Self, Self::Error> {
    match value {
      MinChunksRepr::Count(count) => Ok(Self::Count(count)),
      MinChunksRepr::Named(name) if name == INFINITY => Ok(Self::Always),
      MinChunksRepr::Named(name) => {
        Err(format!("expected a chunk count or \"{INFINITY}\", found \"{name}\""))
      }
    }
  }
}

impl From<MinChunks> for MinChunksRepr {
  fn from(value: MinChunks) -> Self {
    match value {
      MinChunks::Always => Self::Named(INFINITY.to_string()),
      MinChunks::Count(count) => Self::Count(count),
    }
  }
}

impl fmt::Display for MinChunks {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Always => f.write_str(INFINITY),
      Self::Count(count) => write!(f, "{count}"),
    }
  }
}

/// Whether the extracted chunk is loaded on demand, optionally under its own name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Async {
  Enabled(bool),
  Named(String),
}

/// One finalized shared-chunk extraction rule, in the shape the bundler's commons mechanism
/// takes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRule {
  pub name: String,
  /// Chunks the rule selects from. `None` selects every entry chunk.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chunks: Option<Vec<String>>,
  pub min_chunks: MinChunks,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub filename: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub children: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub deep_children: Option<bool>,
  #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
  pub async_chunk: Option<Async>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub min_size: Option<u64>,
}

/// Mutable view of a rule handed to shared-entry customization callbacks.
///
/// Only the parameters listed here can be changed, and the name is fixed once the builder exists.
#[derive(Debug, Clone)]
pub struct ExtractionRuleBuilder {
  name: String,
  chunks: Option<Vec<String>>,
  min_chunks: MinChunks,
  filename: Option<String>,
  children: Option<bool>,
  deep_children: Option<bool>,
  async_chunk: Option<Async>,
  min_size: Option<u64>,
}

impl ExtractionRuleBuilder {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      chunks: None,
      min_chunks: MinChunks::Always,
      filename: None,
      children: None,
      deep_children: None,
      async_chunk: None,
      min_size: None,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn threshold(&self) -> MinChunks {
    self.min_chunks
  }

  pub fn chunks<I, S>(&mut self, chunks: I) -> &mut Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.chunks = Some(chunks.into_iter().map(Into::into).collect());
    self
  }

  pub fn min_chunks(&mut self, min_chunks: MinChunks) -> &mut Self {
    self.min_chunks = min_chunks;
    self
  }

  pub fn filename(&mut self, filename: impl Into<String>) -> &mut Self {
    self.filename = Some(filename.into());
    self
  }

  pub fn children(&mut self, children: bool) -> &mut Self {
    self.children = Some(children);
    self
  }

  pub fn deep_children(&mut self, deep_children: bool) -> &mut Self {
    self.deep_children = Some(deep_children);
    self
  }

  pub fn async_chunk(&mut self, async_chunk: Async) -> &mut Self {
    self.async_chunk = Some(async_chunk);
    self
  }

  pub fn min_size(&mut self, min_size: u64) -> &mut Self {
    self.min_size = Some(min_size);
    self
  }

  pub fn build(self) -> ExtractionRule {
    ExtractionRule {
      name: self.name,
      chunks: self.chunks,
      min_chunks: self.min_chunks,
      filename: self.filename,
      children: self.children,
      deep_children: self.deep_children,
      async_chunk: self.async_chunk,
      min_size: self.min_size,
    }
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;

  #[test]
  fn min_chunks_serializes_always_as_infinity() {
    assert_eq!(serde_json::to_value(MinChunks::Always).unwrap(), json!("Infinity"));
    assert_eq!(serde_json::to_value(MinChunks::Count(2)).unwrap(), json!(2));
    assert_eq!(serde_json::from_value::<MinChunks>(json!("Infinity")).unwrap(), MinChunks::Always);
    assert_eq!(serde_json::from_value::<MinChunks>(json!(3)).unwrap(), MinChunks::Count(3));
    assert!(serde_json::from_value::<MinChunks>(json!("Many")).is_err());
  }

  #[test]
  fn builder_defaults_to_always_without_selector() {
    let rule = ExtractionRuleBuilder::new("manifest").build();

    assert_eq!(rule.name, "manifest");
    assert_eq!(rule.chunks, None);
    assert_eq!(rule.min_chunks, MinChunks::Always);
    assert_eq!(
      serde_json::to_value(&rule).unwrap(),
      json!({ "name": "manifest", "minChunks": "Infinity" })
    );
  }

  #[test]
  fn builder_applies_every_override() {
    let mut builder = ExtractionRuleBuilder::new("vendor");
    builder
      .chunks(["app", "admin"])
      .min_chunks(MinChunks::Count(2))
      .filename("vendor.[chunkhash].js")
      .children(true)
      .deep_children(false)
      .async_chunk(Async::Named("vendor-async".to_string()))
      .min_size(10_000);

    assert_eq!(
      serde_json::to_value(builder.build()).unwrap(),
      json!({
        "name": "vendor",
        "chunks": ["app", "admin"],
        "minChunks": 2,
        "filename": "vendor.[chunkhash].js",
        "children": true,
        "deepChildren": false,
        "async": "vendor-async",
        "minSize": 10000
      })
    );
  }
}
