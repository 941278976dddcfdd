mod logger;
mod plugin;

pub use crate::{
  logger::{Logger, LoggerRef, RecordingLogger, TracingLogger},
  plugin::{AfterEmitContext, Plugin},
};
