use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::types::plan_format::PlanFormat;

#[derive(Subcommand)]
pub enum Command {
  /// Add the named chunk groups missing from `<outputPath>/entrypoints.json`
  Manifest(ManifestArgs),
  /// Print the shared-chunk extraction rules for the configured shared entries
  Commons(CommonsArgs),
}

#[derive(Args)]
pub struct ManifestArgs {
  /// Stats JSON written by the bundler (needs `outputPath`, `publicPath` and `namedChunkGroups`)
  #[clap(long, short = 's')]
  pub stats: PathBuf,

  /// Overrides the `outputPath` of the stats
  #[clap(long)]
  pub output_path: Option<PathBuf>,

  /// Overrides the `publicPath` of the stats
  #[clap(long)]
  pub public_path: Option<String>,
}

#[derive(Args)]
pub struct CommonsArgs {
  #[clap(long, short = 'c', default_value = "entrypack.json")]
  pub config: PathBuf,

  #[clap(long, default_value = "pretty")]
  pub format: PlanFormat,
}

#[derive(Args)]
pub struct LogArgs {
  #[clap(long, short = 'v', global = true)]
  pub verbose: bool,

  #[clap(long, global = true)]
  pub silent: bool,
}
