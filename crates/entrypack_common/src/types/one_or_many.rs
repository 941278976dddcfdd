use serde::{Deserialize, Serialize};

/// A field the bundler writes either as a single value or as a list.
///
/// Normalize with [`OneOrMany::into_vec`] right at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
  // Tried first: a struct-shaped `T` would otherwise also accept a one-element sequence.
  Many(Vec<T>),
  One(T),
}

impl<T> OneOrMany<T> {
  pub fn into_vec(self) -> Vec<T> {
    match self {
      Self::One(value) => vec![value],
      Self::Many(values) => values,
    }
  }
}

impl<T> Default for OneOrMany<T> {
  fn default() -> Self {
    Self::Many(Vec::new())
  }
}

impl From<&str> for OneOrMany<String> {
  fn from(value: &str) -> Self {
    Self::One(value.to_string())
  }
}

impl From<String> for OneOrMany<String> {
  fn from(value: String) -> Self {
    Self::One(value)
  }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
  fn from(values: Vec<T>) -> Self {
    Self::Many(values)
  }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
  fn from(values: [&str; N]) -> Self {
    Self::Many(values.iter().map(ToString::to_string).collect())
  }
}

#[test]
fn test_one_or_many_deserialize() {
  let one: OneOrMany<String> = serde_json::from_str(r#""vendor.js""#).unwrap();
  let many: OneOrMany<String> = serde_json::from_str(r#"["vendor.js", "vendor.css"]"#).unwrap();

  assert_eq!(one.into_vec(), vec!["vendor.js"]);
  assert_eq!(many.into_vec(), vec!["vendor.js", "vendor.css"]);
}
