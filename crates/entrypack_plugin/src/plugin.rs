use std::{borrow::Cow, fmt::Debug};

use async_trait::async_trait;
use entrypack_common::BuildStatistics;

pub struct AfterEmitContext<'a> {
  /// Stats of the build whose files were just written.
  pub stats: &'a BuildStatistics,
}

/// A step the host runs once all files of a build are on disk.
///
/// `after_emit` has no error channel: a plugin reports its own failures and the host treats the
/// returned future resolving as the plugin being done with this build.
#[async_trait]
pub trait Plugin: Debug + Send + Sync {
  fn name(&self) -> Cow<'static, str>;

  async fn after_emit(&self, ctx: &AfterEmitContext<'_>);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug)]
  struct TestPlugin;

  #[async_trait]
  impl Plugin for TestPlugin {
    fn name(&self) -> Cow<'static, str> {
      Cow::Borrowed("TestPlugin")
    }

    async fn after_emit(&self, _ctx: &AfterEmitContext<'_>) {}
  }

  #[test]
  fn can_be_dyn() {
    let plugin: Box<dyn Plugin> = Box::new(TestPlugin);
    assert_eq!(plugin.name(), "TestPlugin");
  }

  #[tokio::test]
  async fn after_emit_resolves() {
    let stats = BuildStatistics::new("/dist", "");
    TestPlugin.after_emit(&AfterEmitContext { stats: &stats }).await;
  }
}
