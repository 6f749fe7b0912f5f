//! Game server host with a single simulated player.
//!
//! Loads the configuration, builds the enabled plugins, starts the server and
//! then drives one player from stdin so every event kind can be raised by
//! hand.

mod cli;
mod logging;
mod repl;

use std::io;

use anyhow::{
  Context,
  Result,
};
use clap::Parser;
use the_core::Vec3;
use the_lib::Server;
use the_loader::Config;

use crate::cli::Cli;

fn main() -> Result<()> {
  let cli = Cli::parse();

  the_loader::initialize_config_file(cli.config_file.clone());
  let config = Config::load_user().context("failed to load configuration")?;

  the_loader::initialize_log_file(cli.log_file.clone().or_else(|| config.log.file.clone()));
  let level = logging::level(cli.verbosity, config.log.level);
  logging::setup(level, &the_loader::log_file(), cli.log_stderr)?;

  let plugins =
    the_default::build_plugins(&config.plugins).context("failed to build plugins")?;
  let server = Server::start(&config.server, plugins).context("failed to start server")?;

  if cli.check {
    println!(
      "{}: {} plugin(s) [{}], commands: {}",
      server.name(),
      server.plugin_names().count(),
      server.plugin_names().collect::<Vec<_>>().join(", "),
      server.command_registry().names().join(", ")
    );
    return Ok(());
  }

  log::info!("listening on {} (simulated)", config.server.address);
  let mut session = server.join(cli.player, Vec3::new(0.5, 64.0, 0.5));
  repl::run(&mut session, io::stdin().lock(), io::stdout().lock())
}
