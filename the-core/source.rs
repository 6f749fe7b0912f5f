//! Causes of damage and healing.

use std::fmt;

use crate::world::EntityId;

/// What dealt damage to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
  /// Melee attack by another entity.
  Attack { attacker: EntityId },
  /// Hit by a projectile; `shooter` is `None` for dispensers and the like.
  Projectile { shooter: Option<EntityId> },
  Fall,
  Fire,
  Lava,
  Drowning,
  Starvation,
  Suffocation,
  Void,
  /// Damage dealt through a command or plugin.
  Custom,
}

impl fmt::Display for DamageSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DamageSource::Attack { attacker } => write!(f, "attacked by {attacker}"),
      DamageSource::Projectile { shooter: Some(shooter) } => write!(f, "shot by {shooter}"),
      DamageSource::Projectile { shooter: None } => f.write_str("shot"),
      DamageSource::Fall => f.write_str("fell"),
      DamageSource::Fire => f.write_str("burned"),
      DamageSource::Lava => f.write_str("tried to swim in lava"),
      DamageSource::Drowning => f.write_str("drowned"),
      DamageSource::Starvation => f.write_str("starved"),
      DamageSource::Suffocation => f.write_str("suffocated"),
      DamageSource::Void => f.write_str("fell out of the world"),
      DamageSource::Custom => f.write_str("died"),
    }
  }
}

/// What healed a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealingSource {
  /// Natural regeneration from a full food bar.
  Food,
  /// The regeneration effect.
  Regeneration,
  /// Instant health potions.
  InstantHealth,
  /// Healing applied through a command or plugin.
  Custom,
}

impl fmt::Display for HealingSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      HealingSource::Food => "food",
      HealingSource::Regeneration => "regeneration",
      HealingSource::InstantHealth => "instant health",
      HealingSource::Custom => "custom",
    };
    f.write_str(name)
  }
}
