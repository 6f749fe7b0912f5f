//! Plugin lifecycle: identification and one-shot initialization.

use std::sync::Arc;

use the_core::{
  CommandDescriptor,
  CommandError,
  CommandRegistry,
};
use thiserror::Error;

use crate::Observer;

#[derive(Debug, Error)]
pub enum PluginError {
  #[error(transparent)]
  Command(#[from] CommandError),
  #[error("invalid settings: {0}")]
  Settings(String),
}

/// A plugin failed to initialize.
#[derive(Debug, Error)]
#[error("failed to initialize plugin '{plugin}'")]
pub struct InitError {
  pub plugin: String,
  #[source]
  pub source: PluginError,
}

/// The server a plugin is being initialized in.
///
/// Only handed to [`Plugin::init`]; plugins must not keep it.
pub trait Host {
  fn server_name(&self) -> &str;

  fn commands(&mut self) -> &mut CommandRegistry;

  fn register_command(
    &mut self,
    command: CommandDescriptor,
  ) -> Result<Arc<CommandDescriptor>, CommandError> {
    self.commands().register(command)
  }
}

/// An extension loaded into the server.
///
/// Besides the two lifecycle hooks a plugin implements any subset of the
/// event handler traits and exposes them through [`Observer`], usually with
/// [`capabilities!`](crate::capabilities).
pub trait Plugin: Observer + Send + Sync {
  /// Display label, e.g. `"Coords v0.0.1"`.
  fn name(&self) -> &str;

  /// Called once at startup, in registration order, before any event is
  /// dispatched.
  fn init(&self, host: &mut dyn Host) -> Result<(), PluginError> {
    let _ = host;
    Ok(())
  }
}
