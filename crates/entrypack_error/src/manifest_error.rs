use std::{io, path::PathBuf};

/// Failures of the post-emit manifest step.
///
/// None of these abort a build. The aggregator reports each one as a warning and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
  #[error("An error occured when reading the entrypoints.json file: {source}")]
  Unreadable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("The entrypoints.json file does not contain valid JSON data")]
  Malformed {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("The entrypoints.json file does not contain a JSON object")]
  NotAnObject { path: PathBuf },

  #[error("An error occured while saving the entrypoints.json file: {source}")]
  Unwritable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to serialize the entrypoints manifest: {0}")]
  Serialize(#[source] serde_json::Error),
}
