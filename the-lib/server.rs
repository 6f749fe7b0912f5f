//! Plugin startup and the handler every player shares.

use std::sync::Arc;

use the_core::{
  CommandDescriptor,
  CommandError,
  CommandRegistry,
  Player,
  Vec3,
};
use the_dispatch::{
  Capabilities,
  FaultPolicy,
  Handler,
  Host,
  InitError,
  Plugin,
  PluginRegistry,
  handler_for,
};
use the_loader::ServerConfig;
use thiserror::Error;

use crate::Session;

#[derive(Debug, Error)]
pub enum ServerError {
  #[error(transparent)]
  Init(#[from] InitError),
  #[error("failed to register built-in command")]
  Command(#[from] CommandError),
}

pub type Result<T> = std::result::Result<T, ServerError>;

/// Handle plugins get during [`Plugin::init`].
struct ServerHost<'a> {
  name:     &'a str,
  commands: &'a mut CommandRegistry,
}

impl Host for ServerHost<'_> {
  fn server_name(&self) -> &str {
    self.name
  }

  fn commands(&mut self) -> &mut CommandRegistry {
    &mut *self.commands
  }
}

/// A running server: initialized plugins, frozen command set, and the handler
/// players dispatch through.
pub struct Server {
  name:         String,
  registry:     Arc<PluginRegistry>,
  commands:     Arc<CommandRegistry>,
  handler:      Arc<dyn Handler>,
  fault_policy: FaultPolicy,
}

impl Server {
  /// Initializes `plugins` in order and selects the handler.
  ///
  /// Fails on the first plugin whose init fails; nothing is dispatched to any
  /// plugin in that case.
  pub fn start(config: &ServerConfig, plugins: impl IntoIterator<Item = Arc<dyn Plugin>>) -> Result<Self> {
    let mut commands = CommandRegistry::new();
    commands.register(
      CommandDescriptor::new("help", "Lists the available commands")
        .with_aliases(["?"])
        .with_usage("[command]"),
    )?;

    let registry = Arc::new(PluginRegistry::new(plugins));
    let mut host = ServerHost {
      name:     &config.name,
      commands: &mut commands,
    };
    registry.initialize(&mut host)?;

    let handler = handler_for(Arc::clone(&registry), config.fault_policy);
    log::info!(
      "{} started with {} plugin(s): {}",
      config.name,
      registry.len(),
      registry.names().collect::<Vec<_>>().join(", ")
    );

    Ok(Self {
      name: config.name.clone(),
      registry,
      commands: Arc::new(commands),
      handler,
      fault_policy: config.fault_policy,
    })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Connects a player at `spawn`, already dispatching through the plugins.
  pub fn join(&self, name: impl Into<String>, spawn: Vec3) -> Session {
    let mut session = Session::new(name, Arc::clone(&self.commands), spawn);
    session.handle(Arc::clone(&self.handler));
    log::info!("{} joined {}", session.name(), self.name);
    session
  }

  pub fn command_registry(&self) -> &CommandRegistry {
    &self.commands
  }

  pub fn plugin_names(&self) -> impl Iterator<Item = &str> {
    self.registry.names()
  }

  /// Every capability some plugin handles.
  pub fn capabilities(&self) -> Capabilities {
    self.registry.capabilities()
  }

  pub fn handler(&self) -> &Arc<dyn Handler> {
    &self.handler
  }

  pub fn fault_policy(&self) -> FaultPolicy {
    self.fault_policy
  }
}
