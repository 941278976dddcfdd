use std::{path::Path, sync::LazyLock};

use inflector::Inflector;
use url::Url;

// Only used to resolve relative asset names so the query string and fragment can be split off.
static DUMMY_BASE: LazyLock<Url> = LazyLock::new(|| Url::parse("http://foo").unwrap());

/// Returns the extension of an asset path without the leading dot.
///
/// Query strings and fragments are ignored, so `app.js?v=3` has the extension `js`. Paths
/// without an extension (including dot-files such as `.htaccess`) yield an empty string.
pub fn file_extension(asset: &str) -> String {
  let pathname = match DUMMY_BASE.join(asset) {
    Ok(url) => url.path().to_string(),
    Err(_) => asset.split(['?', '#']).next().unwrap_or_default().to_string(),
  };

  Path::new(&pathname)
    .extension()
    .map(|extension| extension.to_string_lossy().into_owned())
    .unwrap_or_default()
}

/// Derives the manifest category key of an asset from its extension, e.g. `js` or `css`.
///
/// Assets without an extension share the `""` category. Non-ASCII extensions are
/// percent-encoded by the URL resolution before camel-casing, so `app.жс` lands in `d0B6D181`.
pub fn classify(asset: &str) -> String {
  file_extension(asset).to_camel_case()
}

#[test]
fn test_file_extension() {
  assert_eq!(file_extension("build/app.js"), "js");
  assert_eq!(file_extension("/build/app.min.js"), "js");
  assert_eq!(file_extension("app.css?v=1"), "css");
  assert_eq!(file_extension("fonts/icons.svg#regular"), "svg");
  assert_eq!(file_extension("https://cdn.example.com/build/vendor.js?x=1"), "js");
  assert_eq!(file_extension("LICENSE"), "");
  assert_eq!(file_extension(".htaccess"), "");
  assert_eq!(file_extension("dir.v2/README"), "");
}

#[test]
fn test_classify() {
  assert_eq!(classify("/build/vendor.js"), "js");
  assert_eq!(classify("/build/vendor.css"), "css");
  assert_eq!(classify("/build/vendor.js.map"), "map");
  assert_eq!(classify("/build/vendor.js?x=1"), classify("/build/vendor.js"));
  assert_eq!(classify("/build/images/logo.png?v=abc#top"), "png");
  assert_eq!(classify("/build/NOTICE"), "");
  assert_eq!(classify("/build/app.жс"), "d0B6D181");
}
