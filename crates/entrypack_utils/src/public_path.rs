/// Prefixes an emitted asset name with the public path it is served under.
///
/// An empty public path leaves the asset untouched. A public path without a trailing slash gets
/// one inserted.
pub fn with_public_path(public_path: &str, asset: &str) -> String {
  if public_path.is_empty() || public_path.ends_with('/') {
    format!("{public_path}{asset}")
  } else {
    format!("{public_path}/{asset}")
  }
}

#[test]
fn test_with_public_path() {
  assert_eq!(with_public_path("", "app.js"), "app.js");
  assert_eq!(with_public_path("/build", "app.js"), "/build/app.js");
  assert_eq!(with_public_path("/build/", "app.js"), "/build/app.js");
  assert_eq!(
    with_public_path("https://cdn.example.com", "app.js"),
    "https://cdn.example.com/app.js"
  );
}
