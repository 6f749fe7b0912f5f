use std::fmt;

use serde::{
  Deserialize,
  Serialize,
};

use crate::math::Vec3;

/// Integer coordinates of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPos {
  pub x: i32,
  pub y: i32,
  pub z: i32,
}

impl BlockPos {
  #[must_use]
  pub const fn new(x: i32, y: i32, z: i32) -> Self {
    Self { x, y, z }
  }

  #[must_use]
  pub fn center(self) -> Vec3 {
    Vec3::new(
      f64::from(self.x) + 0.5,
      f64::from(self.y) + 0.5,
      f64::from(self.z) + 0.5,
    )
  }
}

impl fmt::Display for BlockPos {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {} {}", self.x, self.y, self.z)
  }
}

/// Face of a block that was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
  Down,
  Up,
  North,
  South,
  West,
  East,
}

/// A block type, identified by its namespaced name (`"minecraft:stone"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
  pub name: String,
}

impl Block {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }

  pub fn air() -> Self {
    Self::new("minecraft:air")
  }

  pub fn is_air(&self) -> bool {
    self.name == "minecraft:air"
  }
}

impl fmt::Display for Block {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.name)
  }
}

/// Runtime id of an entity in a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
  Player,
  Mob,
  Item,
  Projectile,
  Other,
}

impl EntityKind {
  /// Whether the entity has health and can therefore be damaged or knocked
  /// back by an attack.
  #[must_use]
  pub const fn is_living(self) -> bool {
    matches!(self, EntityKind::Player | EntityKind::Mob)
  }
}

/// Read-only snapshot of an entity handed to plugins.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
  pub id:       EntityId,
  pub kind:     EntityKind,
  pub name:     String,
  pub position: Vec3,
}

impl Entity {
  pub fn new(id: EntityId, kind: EntityKind, name: impl Into<String>, position: Vec3) -> Self {
    Self {
      id,
      kind,
      name: name.into(),
      position,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_players_and_mobs_are_living() {
    assert!(EntityKind::Player.is_living());
    assert!(EntityKind::Mob.is_living());
    assert!(!EntityKind::Item.is_living());
    assert!(!EntityKind::Projectile.is_living());
  }
}
