use std::fmt;

use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  math::Vec3,
  world::EntityId,
};

/// A stack of items as held in an inventory or lying on the ground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
  pub item:           String,
  pub count:          u32,
  /// Remaining durability of the top item for tools and armour, `None` for
  /// items that do not wear out.
  #[serde(default)]
  pub durability:     Option<u32>,
  /// Durability of a fresh item, restored when the top item breaks.
  #[serde(default)]
  pub max_durability: Option<u32>,
}

impl ItemStack {
  pub fn new(item: impl Into<String>, count: u32) -> Self {
    Self {
      item: item.into(),
      count,
      durability: None,
      max_durability: None,
    }
  }

  #[must_use]
  pub fn with_durability(mut self, durability: u32) -> Self {
    self.durability = Some(durability);
    self.max_durability = Some(durability);
    self
  }

  pub fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// Applies `amount` points of wear to the top item. Returns `true` when it
  /// broke; the next item in the stack then starts fresh.
  pub fn damage(&mut self, amount: u32) -> bool {
    let Some(durability) = self.durability.as_mut() else {
      return false;
    };
    *durability = durability.saturating_sub(amount);
    if *durability > 0 {
      return false;
    }
    self.count = self.count.saturating_sub(1);
    if self.count > 0 {
      self.durability = self.max_durability;
    }
    true
  }
}

impl fmt::Display for ItemStack {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}x {}", self.count, self.item)
  }
}

/// An item entity created when a player drops a stack.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedItem {
  pub entity:   EntityId,
  pub stack:    ItemStack,
  pub position: Vec3,
}
