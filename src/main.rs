mod api;
mod app;
mod commands;
mod config;
mod event;
mod logging;
mod registry;
mod ui;

use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "empreg")]
#[command(about = "A terminal UI for an employee registry REST API")]
#[command(version)]
struct Args {
  /// Path to config file (default: $XDG_CONFIG_HOME/empreg/config.yaml)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// API base URL, overrides the config file and EMPREG_API_URL
  #[arg(short, long)]
  url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
  color_eyre::install()?;

  let args = Args::parse();

  let config = config::Config::load(args.config.as_deref(), args.url)?;

  // Flushes the log file on drop
  let _log_guard = logging::setup_logging(&config.log)?;

  let mut app = app::App::new(config)?;
  app.run().await?;

  Ok(())
}
