use std::path::PathBuf;

use clap::{
  ArgAction,
  Parser,
};

/// Runs a server with one simulated player driven from stdin.
#[derive(Debug, Parser)]
#[command(name = "the-server", long_about = None, version)]
pub struct Cli {
  /// Load configuration from a specific file instead of the user config
  #[arg(short = 'c', long = "config", value_name = "FILE")]
  pub config_file: Option<PathBuf>,

  /// Save logs to a specific file
  #[arg(long = "log", value_name = "FILE")]
  pub log_file: Option<PathBuf>,

  /// Also write logs to stderr
  #[arg(long)]
  pub log_stderr: bool,

  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count)]
  pub verbosity: u8,

  /// Name of the simulated player
  #[arg(long, default_value = "Steve")]
  pub player: String,

  /// Validate the configuration and plugins, then exit
  #[arg(long)]
  pub check: bool,
}
