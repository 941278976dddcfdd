mod args;
mod config;
mod console_logger;
mod types;

use std::{process::ExitCode, sync::Arc, time::Instant};

use ansi_term::Colour;
use anyhow::Context;
use args::{Command, CommonsArgs, LogArgs, ManifestArgs};
use clap::Parser;
use itertools::Itertools;
use sugar_path::SugarPath;
use tracing_subscriber::EnvFilter;

use entrypack::{
  commons_chunks, BuildResult, BuildStatistics, Compiler, EntryFilesManifestPlugin, FileSystem,
  LoggerRef, OsFileSystem,
};

use crate::{config::load_config, console_logger::ConsoleLogger};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[command(subcommand)]
  command: Command,

  #[clap(flatten)]
  log: LogArgs,
}

fn init_tracing(verbose: bool) {
  let filter = EnvFilter::try_from_env("ENTRYPACK_LOG")
    .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

async fn manifest(args: ManifestArgs, logger: LoggerRef) -> BuildResult<()> {
  let content = OsFileSystem
    .read_to_string(&args.stats)
    .await
    .with_context(|| format!("Failed to read the stats file {}", args.stats.display()))?;
  let mut stats: BuildStatistics = serde_json::from_str(&content)
    .with_context(|| format!("Invalid stats in {}", args.stats.display()))?;

  if let Some(output_path) = args.output_path {
    stats.output_path = output_path.absolutize();
  }
  if let Some(public_path) = args.public_path {
    stats.public_path = public_path;
  }

  let mut compiler = Compiler::new();
  compiler.apply(EntryFilesManifestPlugin::new(Arc::new(OsFileSystem), logger));
  compiler.after_emit(&stats).await;

  Ok(())
}

async fn commons(args: CommonsArgs) -> BuildResult<()> {
  let config = load_config(&args.config).await?;
  let rules = commons_chunks(&config.into_shared_entries());

  let names = rules.iter().map(|rule| rule.name.as_str()).join(", ");
  tracing::info!(rules = %names, "planned extraction rules");

  let output = args.format.render(&rules).context("Failed to serialize the extraction rules")?;
  println!("{output}");

  Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
  let args = Commands::parse();
  init_tracing(args.log.verbose);

  let logger: LoggerRef = Arc::new(ConsoleLogger::new(args.log.silent));
  let start = Instant::now();

  let result = match args.command {
    Command::Manifest(manifest_args) => manifest(manifest_args, logger).await,
    Command::Commons(commons_args) => commons(commons_args).await,
  };

  match result {
    Ok(()) => {
      if !args.log.silent {
        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        let elapsed = Colour::White.bold().paint(elapsed);
        eprintln!("{} Finished in {}", Colour::Green.paint("✔"), elapsed);
      }
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}
