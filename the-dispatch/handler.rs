//! The capability set: one single-method handler trait per event a player
//! raises, and the aggregate [`Handler`] contract that unites them.

use std::net::SocketAddr;

use the_core::{
  Block,
  BlockPos,
  CommandDescriptor,
  DamageSource,
  DroppedItem,
  Entity,
  Face,
  HealingSource,
  ItemStack,
  Player,
  Vec3,
};

use crate::{
  EventContext,
  PluginHandler,
};

/// Handler that ignores every event. Players start out with this handler, so
/// they never need to check whether plugins are attached before dispatching.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopHandler;

define_capabilities! {
  /// Handles the movement of a player. `ctx.cancel()` keeps the player at the
  /// old position and rotation.
  Move(ctx: &mut EventContext, new_pos: Vec3, new_yaw: f64, new_pitch: f64);

  /// Handles the teleportation of a player. `ctx.cancel()` prevents it.
  Teleport(ctx: &mut EventContext, pos: Vec3);

  /// Handles a chat message sent by a player. `ctx.cancel()` keeps the message
  /// from being broadcast; assigning to `*message` changes what is sent.
  Chat(ctx: &mut EventContext, message: &mut String);

  /// Handles the food bar depleting naturally, for example from sprinting.
  /// `ctx.cancel()` keeps the food level at `from`.
  FoodLoss(ctx: &mut EventContext, from: i32, to: i32);

  /// Handles the player being healed. `ctx.cancel()` prevents the healing;
  /// assigning to `*health` changes the amount healed.
  Heal(ctx: &mut EventContext, health: &mut f64, source: HealingSource);

  /// Handles the player being hurt. `ctx.cancel()` prevents the damage;
  /// assigning to `*damage` changes the amount dealt.
  Hurt(ctx: &mut EventContext, damage: &mut f64, source: DamageSource);

  /// Handles the player dying. This is a notification only.
  Death(source: DamageSource);

  /// Handles the player respawning. Assigning to `*pos` changes where the
  /// player spawns.
  Respawn(pos: &mut Vec3);

  /// Handles the player starting to break a block. `ctx.cancel()` stops the
  /// player from breaking it at all.
  StartBreak(ctx: &mut EventContext, pos: BlockPos);

  /// Handles a block being broken by the player. `ctx.cancel()` keeps the
  /// block in place.
  BlockBreak(ctx: &mut EventContext, pos: BlockPos);

  /// Handles the player placing `block` at `pos`. `ctx.cancel()` prevents the
  /// placement.
  BlockPlace(ctx: &mut EventContext, pos: BlockPos, block: &Block);

  /// Handles the player picking `block` at `pos` into the hotbar.
  /// `ctx.cancel()` prevents the pick.
  BlockPick(ctx: &mut EventContext, pos: BlockPos, block: &Block);

  /// Handles the player using the held item in the air. Not raised when the
  /// player holds nothing. `ctx.cancel()` prevents the use, for example a
  /// snowball being thrown.
  ItemUse(ctx: &mut EventContext);

  /// Handles the player using the held item on the block at `pos`. `face` is
  /// the clicked face and `click_pos` the click position relative to the
  /// block, each component in `[0, 1]`. Also raised with an empty hand.
  ItemUseOnBlock(ctx: &mut EventContext, pos: BlockPos, face: Face, click_pos: Vec3);

  /// Handles the player using the held item on an entity, whether or not the
  /// item does anything with it. Also raised with an empty hand.
  ItemUseOnEntity(ctx: &mut EventContext, target: &Entity);

  /// Handles the player attacking an entity. `ctx.cancel()` cancels both the
  /// damage and the knock-back. The target may not be living or may be
  /// immune, in which case neither is applied anyway.
  AttackEntity(ctx: &mut EventContext, target: &Entity);

  /// Handles a held item or worn armour taking `damage` points of wear.
  /// `ctx.cancel()` keeps the item intact.
  ItemDamage(ctx: &mut EventContext, stack: &ItemStack, damage: u32);

  /// Handles the player picking up a stack lying on the ground.
  /// `ctx.cancel()` leaves it on the ground.
  ItemPickup(ctx: &mut EventContext, stack: &ItemStack);

  /// Handles the player dropping an item. `ctx.cancel()` keeps the stack in
  /// the inventory.
  ItemDrop(ctx: &mut EventContext, item: &DroppedItem);

  /// Handles the player being transferred to another server. `ctx.cancel()`
  /// keeps the player here; assigning to `*addr` changes the destination.
  Transfer(ctx: &mut EventContext, addr: &mut SocketAddr);

  /// Handles the player executing a registered command with the given
  /// arguments. `ctx.cancel()` cancels the execution.
  CommandExecution(ctx: &mut EventContext, command: &CommandDescriptor, args: &[String]);

  /// Handles the player leaving. Always raised on disconnect, whatever the
  /// reason.
  Quit();
}

impl Capability {
  /// Whether the event carries an [`EventContext`] plugins may cancel.
  pub const fn is_cancelable(self) -> bool {
    !matches!(
      self,
      Capability::Death | Capability::Respawn | Capability::Quit
    )
  }
}
