use ansi_term::Colour;
use entrypack::Logger;

/// Prints plugin warnings to stderr, unless `--silent` was given.
#[derive(Debug)]
pub struct ConsoleLogger {
  silent: bool,
}

impl ConsoleLogger {
  pub fn new(silent: bool) -> Self {
    Self { silent }
  }
}

impl Logger for ConsoleLogger {
  fn warning(&self, message: &str) {
    tracing::debug!(target: "entrypack", "{message}");
    if !self.silent {
      eprintln!("{} {}", Colour::Yellow.paint("Warning:"), message);
    }
  }
}
