use std::{fmt::Debug, sync::Arc};

use parking_lot::Mutex;

/// Sink for non-fatal problems plugins want the user to see.
pub trait Logger: Debug + Send + Sync {
  fn warning(&self, message: &str);
}

pub type LoggerRef = Arc<dyn Logger>;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
  fn warning(&self, message: &str) {
    tracing::warn!(target: "entrypack", "{message}");
  }
}

/// Keeps every warning in memory. Handy for asserting on what a plugin reported.
#[derive(Debug, Default)]
pub struct RecordingLogger {
  warnings: Mutex<Vec<String>>,
}

impl RecordingLogger {
  pub fn warnings(&self) -> Vec<String> {
    self.warnings.lock().clone()
  }
}

impl Logger for RecordingLogger {
  fn warning(&self, message: &str) {
    self.warnings.lock().push(message.to_string());
  }
}

#[test]
fn test_recording_logger_keeps_order() {
  let logger = RecordingLogger::default();
  logger.warning("first");
  logger.warning("second");

  assert_eq!(logger.warnings(), vec!["first", "second"]);
}
