use std::fmt;

use bitflags::bitflags;

use crate::{
  Capability,
  Observer,
};

bitflags! {
  /// Set of capabilities a plugin implements, resolved once at registration.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
  pub struct Capabilities: u32 {
    const MOVE               = 1 << Capability::Move as u32;
    const TELEPORT           = 1 << Capability::Teleport as u32;
    const CHAT               = 1 << Capability::Chat as u32;
    const FOOD_LOSS          = 1 << Capability::FoodLoss as u32;
    const HEAL               = 1 << Capability::Heal as u32;
    const HURT               = 1 << Capability::Hurt as u32;
    const DEATH              = 1 << Capability::Death as u32;
    const RESPAWN            = 1 << Capability::Respawn as u32;
    const START_BREAK        = 1 << Capability::StartBreak as u32;
    const BLOCK_BREAK        = 1 << Capability::BlockBreak as u32;
    const BLOCK_PLACE        = 1 << Capability::BlockPlace as u32;
    const BLOCK_PICK         = 1 << Capability::BlockPick as u32;
    const ITEM_USE           = 1 << Capability::ItemUse as u32;
    const ITEM_USE_ON_BLOCK  = 1 << Capability::ItemUseOnBlock as u32;
    const ITEM_USE_ON_ENTITY = 1 << Capability::ItemUseOnEntity as u32;
    const ATTACK_ENTITY      = 1 << Capability::AttackEntity as u32;
    const ITEM_DAMAGE        = 1 << Capability::ItemDamage as u32;
    const ITEM_PICKUP        = 1 << Capability::ItemPickup as u32;
    const ITEM_DROP          = 1 << Capability::ItemDrop as u32;
    const TRANSFER           = 1 << Capability::Transfer as u32;
    const COMMAND_EXECUTION  = 1 << Capability::CommandExecution as u32;
    const QUIT               = 1 << Capability::Quit as u32;
  }
}

impl Capabilities {
  /// Probes every capability of `observer`.
  pub fn of(observer: &dyn Observer) -> Self {
    Capability::ALL
      .iter()
      .copied()
      .filter(|cap| cap.is_implemented_by(observer))
      .map(Self::from)
      .collect()
  }

  pub fn has(self, capability: Capability) -> bool {
    self.contains(Self::from(capability))
  }

  /// The capabilities in the set, in declaration order.
  pub fn capabilities(self) -> impl Iterator<Item = Capability> {
    Capability::ALL
      .iter()
      .copied()
      .filter(move |cap| self.has(*cap))
  }
}

impl From<Capability> for Capabilities {
  fn from(capability: Capability) -> Self {
    Self::from_bits_retain(1 << capability as u32)
  }
}

impl fmt::Display for Capabilities {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_empty() {
      return f.write_str("none");
    }
    for (i, cap) in self.capabilities().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      f.write_str(cap.name())?;
    }
    Ok(())
  }
}
