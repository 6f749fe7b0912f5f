//! Shared vocabulary of the server: world values, event sources, the player
//! boundary and command descriptors.
//!
//! Nothing in here knows about plugins. `the-dispatch` builds the event
//! capability set on top of these types and the host crates implement the
//! [`Player`] boundary.

pub mod command;
pub mod command_line;
pub mod item;
pub mod math;
pub mod player;
pub mod source;
pub mod world;

pub use command::{
  CommandDescriptor,
  CommandError,
  CommandRegistry,
};
pub use command_line::CommandLine;
pub use item::{
  DroppedItem,
  ItemStack,
};
pub use math::Vec3;
pub use player::Player;
pub use source::{
  DamageSource,
  HealingSource,
};
pub use world::{
  Block,
  BlockPos,
  Entity,
  EntityId,
  EntityKind,
  Face,
};
