use std::sync::Arc;

use entrypack_common::BuildStatistics;
use entrypack_plugin::{AfterEmitContext, Plugin};

/// Host side of the post-emit lifecycle: holds the registered plugins and runs their
/// `after_emit` hooks once a build has been written.
#[derive(Debug, Default)]
pub struct Compiler {
  plugins: Vec<Arc<dyn Plugin>>,
}

impl Compiler {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn apply(&mut self, plugin: impl Plugin + 'static) -> &mut Self {
    self.plugins.push(Arc::new(plugin));
    self
  }

  pub fn plugin_names(&self) -> Vec<String> {
    self.plugins.iter().map(|plugin| plugin.name().into_owned()).collect()
  }

  /// Runs every `after_emit` hook in registration order, one after another.
  ///
  /// Resolves once the last hook has finished. Plugins handle their own failures, so this
  /// always completes.
  pub async fn after_emit(&self, stats: &BuildStatistics) {
    let ctx = AfterEmitContext { stats };

    for plugin in &self.plugins {
      tracing::debug!(plugin = %plugin.name(), "running after emit hook");
      plugin.after_emit(&ctx).await;
    }
  }
}

#[cfg(test)]
mod tests {
  use std::{borrow::Cow, sync::Arc};

  use async_trait::async_trait;
  use entrypack_fs::InMemoryFileSystem;
  use entrypack_plugin::RecordingLogger;
  use parking_lot::Mutex;
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::EntryFilesManifestPlugin;

  type Calls = Arc<Mutex<Vec<String>>>;

  #[derive(Debug)]
  struct NamedPlugin {
    name: &'static str,
    calls: Calls,
  }

  #[async_trait]
  impl Plugin for NamedPlugin {
    fn name(&self) -> Cow<'static, str> {
      Cow::Borrowed(self.name)
    }

    async fn after_emit(&self, ctx: &AfterEmitContext<'_>) {
      tokio::task::yield_now().await;
      self.calls.lock().push(format!("{}:{}", self.name, ctx.stats.output_path.display()));
    }
  }

  #[tokio::test]
  async fn runs_hooks_in_registration_order() {
    let calls = Calls::default();
    let mut compiler = Compiler::new();
    compiler
      .apply(NamedPlugin { name: "first", calls: Arc::clone(&calls) })
      .apply(NamedPlugin { name: "second", calls: Arc::clone(&calls) });

    compiler.after_emit(&BuildStatistics::new("/dist", "")).await;

    assert_eq!(compiler.plugin_names(), vec!["first", "second"]);
    assert_eq!(*calls.lock(), vec!["first:/dist", "second:/dist"]);
  }

  #[tokio::test]
  async fn completes_when_the_manifest_is_missing() {
    let logger = Arc::new(RecordingLogger::default());
    let calls = Calls::default();
    let mut compiler = Compiler::new();
    compiler
      .apply(EntryFilesManifestPlugin::new(
        Arc::new(InMemoryFileSystem::default()),
        Arc::<RecordingLogger>::clone(&logger),
      ))
      .apply(NamedPlugin { name: "after", calls: Arc::clone(&calls) });

    compiler.after_emit(&BuildStatistics::new("/dist", "")).await;

    assert_eq!(logger.warnings().len(), 1);
    assert_eq!(*calls.lock(), vec!["after:/dist"]);
  }
}
