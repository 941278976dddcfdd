use std::fmt;

use crate::{ExtractionRuleBuilder, OneOrMany};

pub type OptionsCallback = Box<dyn Fn(&mut ExtractionRuleBuilder) + Send + Sync>;

/// A shared ("commons") entry: modules bundled into their own long-cached chunk that other
/// entries load instead of embedding.
pub struct SharedEntry {
  pub name: String,
  pub files: Vec<String>,
  pub options_callback: Option<OptionsCallback>,
}

impl SharedEntry {
  pub fn new(name: impl Into<String>, files: impl Into<OneOrMany<String>>) -> Self {
    Self { name: name.into(), files: files.into().into_vec(), options_callback: None }
  }

  #[must_use]
  pub fn with_options<F>(mut self, callback: F) -> Self
  where
    F: Fn(&mut ExtractionRuleBuilder) + Send + Sync + 'static,
  {
    self.options_callback = Some(Box::new(callback));
    self
  }
}

impl fmt::Debug for SharedEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SharedEntry")
      .field("name", &self.name)
      .field("files", &self.files)
      .field("has_options_callback", &self.options_callback.is_some())
      .finish()
  }
}

#[test]
fn test_shared_entry_files_normalization() {
  assert_eq!(SharedEntry::new("foo", "foo.js").files, vec!["foo.js"]);
  assert_eq!(SharedEntry::new("bar", ["bar.js", "baz.js"]).files, vec!["bar.js", "baz.js"]);
  assert!(SharedEntry::new("empty", Vec::<String>::new()).files.is_empty());
}
