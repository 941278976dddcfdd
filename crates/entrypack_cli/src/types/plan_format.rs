use clap::ValueEnum;
use serde::Serialize;

#[derive(PartialEq, Eq, Clone, Copy, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum PlanFormat {
  Pretty,
  Compact,
}

impl PlanFormat {
  pub fn render<T: Serialize + ?Sized>(self, value: &T) -> serde_json::Result<String> {
    match self {
      PlanFormat::Pretty => serde_json::to_string_pretty(value),
      PlanFormat::Compact => serde_json::to_string(value),
    }
  }
}

#[test]
fn test_render() {
  let value = serde_json::json!({ "name": "manifest" });

  assert_eq!(PlanFormat::Compact.render(&value).unwrap(), r#"{"name":"manifest"}"#);
  assert_eq!(PlanFormat::Pretty.render(&value).unwrap(), "{\n  \"name\": \"manifest\"\n}");
}
