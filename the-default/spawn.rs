use serde::{
  Deserialize,
  Serialize,
};
use the_core::{
  Player,
  Vec3,
};
use the_dispatch::{
  Plugin,
  RespawnHandler,
  capabilities,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpawnSettings {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

/// Respawns every player at one configured position.
#[derive(Debug, Clone, Copy)]
pub struct SpawnPlugin {
  spawn: Vec3,
}

impl SpawnPlugin {
  pub fn new(settings: SpawnSettings) -> Self {
    Self {
      spawn: Vec3::new(settings.x, settings.y, settings.z),
    }
  }

  pub fn spawn(&self) -> Vec3 {
    self.spawn
  }
}

impl Plugin for SpawnPlugin {
  fn name(&self) -> &str {
    "spawn"
  }
}

impl RespawnHandler for SpawnPlugin {
  fn handle_respawn(&self, p: &mut dyn Player, pos: &mut Vec3) {
    log::debug!("respawning {} at {} instead of {}", p.name(), self.spawn, pos);
    *pos = self.spawn;
  }
}

capabilities!(SpawnPlugin => Respawn);
