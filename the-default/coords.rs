use the_core::{
  CommandDescriptor,
  Player,
};
use the_dispatch::{
  CommandExecutionHandler,
  EventContext,
  Host,
  Plugin,
  PluginError,
  capabilities,
};

/// Registers `/coords`, which shows the player's coordinates on screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoordsPlugin;

impl Plugin for CoordsPlugin {
  fn name(&self) -> &str {
    "coords"
  }

  fn init(&self, host: &mut dyn Host) -> Result<(), PluginError> {
    host.register_command(CommandDescriptor::new("coords", "View your coordinates"))?;
    Ok(())
  }
}

impl CommandExecutionHandler for CoordsPlugin {
  fn handle_command_execution(
    &self,
    p: &mut dyn Player,
    _ctx: &mut EventContext,
    command: &CommandDescriptor,
    _args: &[String],
  ) {
    if command.name == "coords" {
      p.show_coordinates();
    }
  }
}

capabilities!(CoordsPlugin => CommandExecution);
