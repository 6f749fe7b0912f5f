use serde::{
  Deserialize,
  Serialize,
};
use the_core::{
  Block,
  BlockPos,
  Player,
};
use the_dispatch::{
  BlockBreakHandler,
  BlockPlaceHandler,
  EventContext,
  Host,
  Plugin,
  PluginError,
  StartBreakHandler,
  capabilities,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProtectionSettings {
  pub center:  BlockPos,
  #[serde(default = "default_radius")]
  pub radius:  f64,
  /// Told to players whose edit was refused.
  #[serde(default)]
  pub message: Option<String>,
}

fn default_radius() -> f64 {
  16.0
}

/// Refuses block changes within a radius of a point, such as a spawn area.
#[derive(Debug, Clone)]
pub struct Protection {
  settings: ProtectionSettings,
}

impl Protection {
  pub fn new(settings: ProtectionSettings) -> Self {
    Self { settings }
  }

  /// Whether `pos` lies within the protected radius, measured between block
  /// centres.
  pub fn protects(&self, pos: BlockPos) -> bool {
    pos.center().distance(self.settings.center.center()) <= self.settings.radius
  }

  fn refuse(&self, p: &mut dyn Player, ctx: &mut EventContext, pos: BlockPos) {
    if !self.protects(pos) {
      return;
    }
    log::debug!("refused edit by {} at {pos}", p.name());
    ctx.cancel();
    if let Some(message) = &self.settings.message {
      p.send_message(message);
    }
  }
}

impl Plugin for Protection {
  fn name(&self) -> &str {
    "protection"
  }

  fn init(&self, _host: &mut dyn Host) -> Result<(), PluginError> {
    let radius = self.settings.radius;
    if !radius.is_finite() || radius < 0.0 {
      return Err(PluginError::Settings(format!("radius must be a non-negative number, got {radius}")));
    }
    Ok(())
  }
}

impl StartBreakHandler for Protection {
  fn handle_start_break(&self, p: &mut dyn Player, ctx: &mut EventContext, pos: BlockPos) {
    self.refuse(p, ctx, pos);
  }
}

impl BlockBreakHandler for Protection {
  fn handle_block_break(&self, p: &mut dyn Player, ctx: &mut EventContext, pos: BlockPos) {
    self.refuse(p, ctx, pos);
  }
}

impl BlockPlaceHandler for Protection {
  fn handle_block_place(&self, p: &mut dyn Player, ctx: &mut EventContext, pos: BlockPos, _block: &Block) {
    self.refuse(p, ctx, pos);
  }
}

capabilities!(Protection => StartBreak, BlockBreak, BlockPlace);
