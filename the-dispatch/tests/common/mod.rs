#![allow(dead_code)]

use std::{
  net::SocketAddr,
  sync::Arc,
};

use parking_lot::Mutex;
use the_core::{
  Block,
  BlockPos,
  CommandDescriptor,
  DamageSource,
  DroppedItem,
  Entity,
  EntityId,
  EntityKind,
  Face,
  HealingSource,
  ItemStack,
  Player,
  Vec3,
};
use the_dispatch::*;

pub type Log = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> Log {
  Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &Log) -> Vec<String> {
  log.lock().clone()
}

#[derive(Default)]
pub struct TestPlayer {
  pub messages: Vec<String>,
}

impl Player for TestPlayer {
  fn name(&self) -> &str {
    "Tester"
  }

  fn position(&self) -> Vec3 {
    Vec3::new(0.5, 64.0, 0.5)
  }

  fn rotation(&self) -> (f64, f64) {
    (0.0, 0.0)
  }

  fn health(&self) -> f64 {
    20.0
  }

  fn food(&self) -> i32 {
    20
  }

  fn send_message(&mut self, message: &str) {
    self.messages.push(message.to_string());
  }

  fn show_coordinates(&mut self) {}
}

/// Implements every capability and records `label:Capability` per call.
pub struct Everything {
  pub label:  &'static str,
  pub log:    Log,
  pub cancel: bool,
}

impl Everything {
  pub fn new(label: &'static str, log: &Log) -> Self {
    Self {
      label,
      log: log.clone(),
      cancel: false,
    }
  }

  pub fn canceling(label: &'static str, log: &Log) -> Self {
    Self {
      cancel: true,
      ..Self::new(label, log)
    }
  }

  fn record(&self, cap: Capability, ctx: Option<&mut EventContext>) {
    let seen = match &ctx {
      Some(ctx) if ctx.canceled() => "(canceled)",
      _ => "",
    };
    self
      .log
      .lock()
      .push(format!("{}:{}{seen}", self.label, cap.name()));
    if let Some(ctx) = ctx
      && self.cancel
    {
      ctx.cancel();
    }
  }
}

impl Plugin for Everything {
  fn name(&self) -> &str {
    self.label
  }
}

capabilities!(
  Everything => Move, Teleport, Chat, FoodLoss, Heal, Hurt, Death, Respawn, StartBreak, BlockBreak,
  BlockPlace, BlockPick, ItemUse, ItemUseOnBlock, ItemUseOnEntity, AttackEntity, ItemDamage,
  ItemPickup, ItemDrop, Transfer, CommandExecution, Quit
);

impl MoveHandler for Everything {
  fn handle_move(&self, _p: &mut dyn Player, ctx: &mut EventContext, _pos: Vec3, _yaw: f64, _pitch: f64) {
    self.record(Capability::Move, Some(ctx));
  }
}

impl TeleportHandler for Everything {
  fn handle_teleport(&self, _p: &mut dyn Player, ctx: &mut EventContext, _pos: Vec3) {
    self.record(Capability::Teleport, Some(ctx));
  }
}

impl ChatHandler for Everything {
  fn handle_chat(&self, _p: &mut dyn Player, ctx: &mut EventContext, _message: &mut String) {
    self.record(Capability::Chat, Some(ctx));
  }
}

impl FoodLossHandler for Everything {
  fn handle_food_loss(&self, _p: &mut dyn Player, ctx: &mut EventContext, _from: i32, _to: i32) {
    self.record(Capability::FoodLoss, Some(ctx));
  }
}

impl HealHandler for Everything {
  fn handle_heal(&self, _p: &mut dyn Player, ctx: &mut EventContext, _health: &mut f64, _source: HealingSource) {
    self.record(Capability::Heal, Some(ctx));
  }
}

impl HurtHandler for Everything {
  fn handle_hurt(&self, _p: &mut dyn Player, ctx: &mut EventContext, _damage: &mut f64, _source: DamageSource) {
    self.record(Capability::Hurt, Some(ctx));
  }
}

impl DeathHandler for Everything {
  fn handle_death(&self, _p: &mut dyn Player, _source: DamageSource) {
    self.record(Capability::Death, None);
  }
}

impl RespawnHandler for Everything {
  fn handle_respawn(&self, _p: &mut dyn Player, _pos: &mut Vec3) {
    self.record(Capability::Respawn, None);
  }
}

impl StartBreakHandler for Everything {
  fn handle_start_break(&self, _p: &mut dyn Player, ctx: &mut EventContext, _pos: BlockPos) {
    self.record(Capability::StartBreak, Some(ctx));
  }
}

impl BlockBreakHandler for Everything {
  fn handle_block_break(&self, _p: &mut dyn Player, ctx: &mut EventContext, _pos: BlockPos) {
    self.record(Capability::BlockBreak, Some(ctx));
  }
}

impl BlockPlaceHandler for Everything {
  fn handle_block_place(&self, _p: &mut dyn Player, ctx: &mut EventContext, _pos: BlockPos, _block: &Block) {
    self.record(Capability::BlockPlace, Some(ctx));
  }
}

impl BlockPickHandler for Everything {
  fn handle_block_pick(&self, _p: &mut dyn Player, ctx: &mut EventContext, _pos: BlockPos, _block: &Block) {
    self.record(Capability::BlockPick, Some(ctx));
  }
}

impl ItemUseHandler for Everything {
  fn handle_item_use(&self, _p: &mut dyn Player, ctx: &mut EventContext) {
    self.record(Capability::ItemUse, Some(ctx));
  }
}

impl ItemUseOnBlockHandler for Everything {
  fn handle_item_use_on_block(
    &self,
    _p: &mut dyn Player,
    ctx: &mut EventContext,
    _pos: BlockPos,
    _face: Face,
    _click_pos: Vec3,
  ) {
    self.record(Capability::ItemUseOnBlock, Some(ctx));
  }
}

impl ItemUseOnEntityHandler for Everything {
  fn handle_item_use_on_entity(&self, _p: &mut dyn Player, ctx: &mut EventContext, _target: &Entity) {
    self.record(Capability::ItemUseOnEntity, Some(ctx));
  }
}

impl AttackEntityHandler for Everything {
  fn handle_attack_entity(&self, _p: &mut dyn Player, ctx: &mut EventContext, _target: &Entity) {
    self.record(Capability::AttackEntity, Some(ctx));
  }
}

impl ItemDamageHandler for Everything {
  fn handle_item_damage(&self, _p: &mut dyn Player, ctx: &mut EventContext, _stack: &ItemStack, _damage: u32) {
    self.record(Capability::ItemDamage, Some(ctx));
  }
}

impl ItemPickupHandler for Everything {
  fn handle_item_pickup(&self, _p: &mut dyn Player, ctx: &mut EventContext, _stack: &ItemStack) {
    self.record(Capability::ItemPickup, Some(ctx));
  }
}

impl ItemDropHandler for Everything {
  fn handle_item_drop(&self, _p: &mut dyn Player, ctx: &mut EventContext, _item: &DroppedItem) {
    self.record(Capability::ItemDrop, Some(ctx));
  }
}

impl TransferHandler for Everything {
  fn handle_transfer(&self, _p: &mut dyn Player, ctx: &mut EventContext, _addr: &mut SocketAddr) {
    self.record(Capability::Transfer, Some(ctx));
  }
}

impl CommandExecutionHandler for Everything {
  fn handle_command_execution(
    &self,
    _p: &mut dyn Player,
    ctx: &mut EventContext,
    _command: &CommandDescriptor,
    _args: &[String],
  ) {
    self.record(Capability::CommandExecution, Some(ctx));
  }
}

impl QuitHandler for Everything {
  fn handle_quit(&self, _p: &mut dyn Player) {
    self.record(Capability::Quit, None);
  }
}

/// Plugin without any capability.
pub struct Silent;

impl Plugin for Silent {
  fn name(&self) -> &str {
    "silent"
  }
}

capabilities!(Silent =>);

/// Outcome of raising one event: whether it was canceled and the final value
/// of its mutable slot, rendered as text.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
  pub canceled: bool,
  pub slot:     Option<String>,
}

/// Raises `cap` through `handler` with fixed sample payloads.
pub fn raise(handler: &dyn Handler, p: &mut dyn Player, cap: Capability) -> Outcome {
  let mut ctx = EventContext::new();
  let pos = BlockPos::new(1, 2, 3);
  let stone = Block::new("minecraft:stone");
  let stack = ItemStack::new("minecraft:stick", 1);
  let target = Entity::new(EntityId(7), EntityKind::Mob, "zombie", Vec3::new(1.0, 64.0, 1.0));
  let mut slot = None;

  match cap {
    Capability::Move => handler.handle_move(p, &mut ctx, Vec3::new(1.0, 2.0, 3.0), 90.0, 0.0),
    Capability::Teleport => handler.handle_teleport(p, &mut ctx, Vec3::ZERO),
    Capability::Chat => {
      let mut message = String::from("hello");
      handler.handle_chat(p, &mut ctx, &mut message);
      slot = Some(message);
    },
    Capability::FoodLoss => handler.handle_food_loss(p, &mut ctx, 20, 19),
    Capability::Heal => {
      let mut health = 2.0;
      handler.handle_heal(p, &mut ctx, &mut health, HealingSource::Food);
      slot = Some(health.to_string());
    },
    Capability::Hurt => {
      let mut damage = 5.0;
      handler.handle_hurt(p, &mut ctx, &mut damage, DamageSource::Fall);
      slot = Some(damage.to_string());
    },
    Capability::Death => handler.handle_death(p, DamageSource::Void),
    Capability::Respawn => {
      let mut spawn = Vec3::new(0.0, 64.0, 0.0);
      handler.handle_respawn(p, &mut spawn);
      slot = Some(spawn.to_string());
    },
    Capability::StartBreak => handler.handle_start_break(p, &mut ctx, pos),
    Capability::BlockBreak => handler.handle_block_break(p, &mut ctx, pos),
    Capability::BlockPlace => handler.handle_block_place(p, &mut ctx, pos, &stone),
    Capability::BlockPick => handler.handle_block_pick(p, &mut ctx, pos, &stone),
    Capability::ItemUse => handler.handle_item_use(p, &mut ctx),
    Capability::ItemUseOnBlock => {
      handler.handle_item_use_on_block(p, &mut ctx, pos, Face::Up, Vec3::new(0.5, 1.0, 0.5))
    },
    Capability::ItemUseOnEntity => handler.handle_item_use_on_entity(p, &mut ctx, &target),
    Capability::AttackEntity => handler.handle_attack_entity(p, &mut ctx, &target),
    Capability::ItemDamage => handler.handle_item_damage(p, &mut ctx, &stack, 1),
    Capability::ItemPickup => handler.handle_item_pickup(p, &mut ctx, &stack),
    Capability::ItemDrop => {
      let dropped = DroppedItem {
        entity:   EntityId(9),
        stack:    stack.clone(),
        position: Vec3::ZERO,
      };
      handler.handle_item_drop(p, &mut ctx, &dropped);
    },
    Capability::Transfer => {
      let mut addr: SocketAddr = ([127, 0, 0, 1], 19132).into();
      handler.handle_transfer(p, &mut ctx, &mut addr);
      slot = Some(addr.to_string());
    },
    Capability::CommandExecution => {
      let command = CommandDescriptor::new("coords", "View your coordinates");
      handler.handle_command_execution(p, &mut ctx, &command, &["a".to_string()]);
    },
    Capability::Quit => handler.handle_quit(p),
  }

  Outcome {
    canceled: ctx.canceled(),
    slot,
  }
}
