//! A connected player, reduced to the state the event set touches.
//!
//! Every action follows the same steps: build the payload and a fresh
//! [`EventContext`], dispatch through the attached handler, then either drop
//! the change (canceled) or apply it with the slot values plugins left
//! behind.

use std::{
  collections::HashMap,
  net::SocketAddr,
  sync::Arc,
};

use the_core::{
  Block,
  BlockPos,
  CommandLine,
  CommandRegistry,
  DamageSource,
  DroppedItem,
  Entity,
  EntityId,
  Face,
  HealingSource,
  ItemStack,
  Player,
  Vec3,
};
use the_dispatch::{
  Capability,
  EventContext,
  Handler,
  NopHandler,
};

pub const MAX_HEALTH: f64 = 20.0;
pub const MAX_FOOD: i32 = 20;

pub struct Session {
  name:                  String,
  handler:               Arc<dyn Handler>,
  commands:              Arc<CommandRegistry>,
  position:              Vec3,
  yaw:                   f64,
  pitch:                 f64,
  health:                f64,
  food:                  i32,
  spawn:                 Vec3,
  dead:                  bool,
  connected:             bool,
  coordinates_requested: bool,
  held:                  Option<ItemStack>,
  inventory:             Vec<ItemStack>,
  world:                 HashMap<BlockPos, Block>,
  transferred_to:        Option<SocketAddr>,
  messages:              Vec<String>,
  next_entity:           u64,
}

impl Session {
  /// A player at `spawn` dispatching through [`NopHandler`] until
  /// [`Session::handle`] attaches plugins.
  pub fn new(name: impl Into<String>, commands: Arc<CommandRegistry>, spawn: Vec3) -> Self {
    Self {
      name: name.into(),
      handler: Arc::new(NopHandler),
      commands,
      position: spawn,
      yaw: 0.0,
      pitch: 0.0,
      health: MAX_HEALTH,
      food: MAX_FOOD,
      spawn,
      dead: false,
      connected: true,
      coordinates_requested: false,
      held: None,
      inventory: Vec::new(),
      world: HashMap::new(),
      transferred_to: None,
      messages: Vec::new(),
      next_entity: 1,
    }
  }

  /// Replaces the handler every later event is dispatched through.
  pub fn handle(&mut self, handler: Arc<dyn Handler>) {
    self.handler = handler;
  }

  pub fn is_dead(&self) -> bool {
    self.dead
  }

  pub fn is_connected(&self) -> bool {
    self.connected
  }

  /// Whether a plugin asked to show the coordinates since the last
  /// [`Session::take_coordinates_request`].
  pub fn coordinates_requested(&self) -> bool {
    self.coordinates_requested
  }

  /// Consumes a pending request to show the coordinates.
  pub fn take_coordinates_request(&mut self) -> bool {
    std::mem::take(&mut self.coordinates_requested)
  }

  pub fn held(&self) -> Option<&ItemStack> {
    self.held.as_ref()
  }

  /// Puts `stack` in the player's hand, replacing what was there.
  pub fn hold(&mut self, stack: Option<ItemStack>) {
    self.held = stack;
  }

  pub fn inventory(&self) -> &[ItemStack] {
    &self.inventory
  }

  pub fn spawn_point(&self) -> Vec3 {
    self.spawn
  }

  pub fn transferred_to(&self) -> Option<SocketAddr> {
    self.transferred_to
  }

  /// Block at `pos`, air where nothing was placed.
  pub fn block_at(&self, pos: BlockPos) -> Block {
    self.world.get(&pos).cloned().unwrap_or_else(Block::air)
  }

  /// Sets a block without raising any event.
  pub fn set_block(&mut self, pos: BlockPos, block: Block) {
    if block.is_air() {
      self.world.remove(&pos);
    } else {
      self.world.insert(pos, block);
    }
  }

  /// Messages sent to the player so far.
  pub fn messages(&self) -> &[String] {
    &self.messages
  }

  pub fn take_messages(&mut self) -> Vec<String> {
    std::mem::take(&mut self.messages)
  }

  pub fn move_to(&mut self, pos: Vec3, yaw: f64, pitch: f64) -> bool {
    if self.dead {
      return false;
    }
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_move(self, &mut ctx, pos, yaw, pitch);
    if self.vetoed(&ctx, Capability::Move) {
      return false;
    }
    self.position = pos;
    self.yaw = yaw;
    self.pitch = pitch;
    true
  }

  pub fn teleport(&mut self, pos: Vec3) -> bool {
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_teleport(self, &mut ctx, pos);
    if self.vetoed(&ctx, Capability::Teleport) {
      return false;
    }
    self.position = pos;
    true
  }

  /// Sends a chat message. Returns the text that was broadcast, which plugins
  /// may have rewritten, or `None` if the message was canceled.
  pub fn chat(&mut self, message: &str) -> Option<String> {
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    let mut message = message.to_string();
    handler.handle_chat(self, &mut ctx, &mut message);
    if self.vetoed(&ctx, Capability::Chat) {
      return None;
    }
    log::info!("<{}> {message}", self.name);
    let line = format!("<{}> {message}", self.name);
    self.send_message(&line);
    Some(message)
  }

  /// Lowers the food bar to `to`. Raises nothing unless the level drops.
  pub fn exhaust(&mut self, to: i32) -> bool {
    let from = self.food;
    let to = to.clamp(0, MAX_FOOD);
    if to >= from {
      return false;
    }
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_food_loss(self, &mut ctx, from, to);
    if self.vetoed(&ctx, Capability::FoodLoss) {
      return false;
    }
    self.food = to;
    true
  }

  /// Heals the player. Returns the health actually gained.
  pub fn heal(&mut self, amount: f64, source: HealingSource) -> f64 {
    if self.dead || amount <= 0.0 {
      return 0.0;
    }
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    let mut amount = amount;
    handler.handle_heal(self, &mut ctx, &mut amount, source);
    if self.vetoed(&ctx, Capability::Heal) {
      return 0.0;
    }
    let before = self.health;
    self.health = (self.health + amount.max(0.0)).min(MAX_HEALTH);
    self.health - before
  }

  /// Hurts the player, killing them when health runs out. Returns the damage
  /// actually dealt.
  pub fn hurt(&mut self, damage: f64, source: DamageSource) -> f64 {
    if self.dead {
      return 0.0;
    }
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    let mut damage = damage;
    handler.handle_hurt(self, &mut ctx, &mut damage, source);
    if self.vetoed(&ctx, Capability::Hurt) {
      return 0.0;
    }
    let dealt = damage.max(0.0).min(self.health);
    self.health -= dealt;
    if self.health <= 0.0 {
      self.kill(source);
    }
    dealt
  }

  /// Kills the player outright. Plugins are notified but cannot prevent it.
  pub fn kill(&mut self, source: DamageSource) {
    if self.dead {
      return;
    }
    self.health = 0.0;
    self.dead = true;
    let handler = Arc::clone(&self.handler);
    handler.handle_death(self, source);
    let message = format!("{} {source}", self.name);
    self.send_message(&message);
  }

  /// Brings a dead player back. Returns where they spawned.
  pub fn respawn(&mut self) -> Option<Vec3> {
    if !self.dead {
      return None;
    }
    let handler = Arc::clone(&self.handler);
    let mut pos = self.spawn;
    handler.handle_respawn(self, &mut pos);
    self.position = pos;
    self.health = MAX_HEALTH;
    self.food = MAX_FOOD;
    self.dead = false;
    Some(pos)
  }

  pub fn start_break(&mut self, pos: BlockPos) -> bool {
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_start_break(self, &mut ctx, pos);
    !self.vetoed(&ctx, Capability::StartBreak)
  }

  pub fn break_block(&mut self, pos: BlockPos) -> bool {
    if self.block_at(pos).is_air() {
      return false;
    }
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_block_break(self, &mut ctx, pos);
    if self.vetoed(&ctx, Capability::BlockBreak) {
      return false;
    }
    self.world.remove(&pos);
    true
  }

  pub fn place_block(&mut self, pos: BlockPos, block: Block) -> bool {
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_block_place(self, &mut ctx, pos, &block);
    if self.vetoed(&ctx, Capability::BlockPlace) {
      return false;
    }
    self.set_block(pos, block);
    true
  }

  /// Picks the block at `pos` into the player's hand.
  pub fn pick_block(&mut self, pos: BlockPos) -> bool {
    let block = self.block_at(pos);
    if block.is_air() {
      return false;
    }
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_block_pick(self, &mut ctx, pos, &block);
    if self.vetoed(&ctx, Capability::BlockPick) {
      return false;
    }
    self.held = Some(ItemStack::new(block.name, 1));
    true
  }

  /// Uses the held item in the air. Nothing is raised with an empty hand.
  pub fn use_item(&mut self) -> bool {
    if self.held.is_none() {
      return false;
    }
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_item_use(self, &mut ctx);
    !self.vetoed(&ctx, Capability::ItemUse)
  }

  /// Uses the held item on a block face. `click_pos` is relative to the
  /// block and must lie in `[0, 1]` on every axis; a click outside it raises
  /// nothing.
  pub fn use_item_on_block(&mut self, pos: BlockPos, face: Face, click_pos: Vec3) -> bool {
    if !click_pos.in_unit_cube() {
      log::debug!("{} clicked {pos} outside the block at {click_pos}", self.name);
      return false;
    }
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_item_use_on_block(self, &mut ctx, pos, face, click_pos);
    !self.vetoed(&ctx, Capability::ItemUseOnBlock)
  }

  pub fn use_item_on_entity(&mut self, target: &Entity) -> bool {
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_item_use_on_entity(self, &mut ctx, target);
    !self.vetoed(&ctx, Capability::ItemUseOnEntity)
  }

  /// Attacks `target`. Returns whether damage and knock-back apply, which
  /// also requires a living target.
  pub fn attack(&mut self, target: &Entity) -> bool {
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_attack_entity(self, &mut ctx, target);
    !self.vetoed(&ctx, Capability::AttackEntity) && target.kind.is_living()
  }

  /// Wears down the held item. Returns whether the wear was applied; a stack
  /// that breaks leaves the hand empty.
  pub fn damage_held_item(&mut self, damage: u32) -> bool {
    let Some(stack) = self.held.clone() else {
      return false;
    };
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_item_damage(self, &mut ctx, &stack, damage);
    if self.vetoed(&ctx, Capability::ItemDamage) {
      return false;
    }
    let broke = self
      .held
      .as_mut()
      .is_some_and(|held| held.damage(damage) && held.is_empty());
    if broke {
      self.held = None;
    }
    true
  }

  pub fn pick_up(&mut self, stack: ItemStack) -> bool {
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_item_pickup(self, &mut ctx, &stack);
    if self.vetoed(&ctx, Capability::ItemPickup) {
      return false;
    }
    self.inventory.push(stack);
    true
  }

  /// Drops the held stack at the player's feet.
  pub fn drop_held(&mut self) -> Option<DroppedItem> {
    let stack = self.held.clone()?;
    let item = DroppedItem {
      entity: self.allocate_entity(),
      stack,
      position: self.position,
    };
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_item_drop(self, &mut ctx, &item);
    if self.vetoed(&ctx, Capability::ItemDrop) {
      return None;
    }
    self.held = None;
    Some(item)
  }

  /// Sends the player to another server. Returns the address they were sent
  /// to, which plugins may have changed.
  pub fn transfer(&mut self, addr: SocketAddr) -> Option<SocketAddr> {
    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    let mut addr = addr;
    handler.handle_transfer(self, &mut ctx, &mut addr);
    if self.vetoed(&ctx, Capability::Transfer) {
      return None;
    }
    log::info!("transferring {} to {addr}", self.name);
    self.transferred_to = Some(addr);
    Some(addr)
  }

  /// Executes a command line such as `/coords`. Returns whether a registered
  /// command ran.
  ///
  /// Unknown commands get an error reply and raise nothing.
  pub fn execute(&mut self, line: &str) -> bool {
    let Some(line) = CommandLine::parse(line) else {
      return false;
    };
    let Some(command) = self.commands.get(&line.name).cloned() else {
      log::debug!("{} ran unknown command /{}", self.name, line.name);
      let message = format!("Unknown command: /{}", line.name);
      self.send_message(&message);
      return false;
    };

    let handler = Arc::clone(&self.handler);
    let mut ctx = EventContext::new();
    handler.handle_command_execution(self, &mut ctx, &command, &line.args);
    if self.vetoed(&ctx, Capability::CommandExecution) {
      return false;
    }

    if command.name == "help" {
      let commands = Arc::clone(&self.commands);
      match line.args.first().and_then(|name| commands.get(name)) {
        Some(topic) => {
          for doc_line in topic.generate_doc().lines() {
            self.send_message(doc_line);
          }
        },
        None => {
          for name in commands.names() {
            if let Some(cmd) = commands.get(name) {
              let message = format!("/{} - {}", cmd.name, cmd.description);
              self.send_message(&message);
            }
          }
        },
      }
    }
    true
  }

  /// Disconnects the player. Quit is raised exactly once.
  pub fn quit(&mut self) {
    if !self.connected {
      return;
    }
    self.connected = false;
    let handler = Arc::clone(&self.handler);
    handler.handle_quit(self);
    log::info!("{} left", self.name);
  }

  fn vetoed(&self, ctx: &EventContext, capability: Capability) -> bool {
    if ctx.canceled() {
      log::debug!("{} canceled for {}", capability.name(), self.name);
    }
    ctx.canceled()
  }

  fn allocate_entity(&mut self) -> EntityId {
    let id = EntityId(self.next_entity);
    self.next_entity += 1;
    id
  }
}

impl Player for Session {
  fn name(&self) -> &str {
    &self.name
  }

  fn position(&self) -> Vec3 {
    self.position
  }

  fn rotation(&self) -> (f64, f64) {
    (self.yaw, self.pitch)
  }

  fn health(&self) -> f64 {
    self.health
  }

  fn food(&self) -> i32 {
    self.food
  }

  fn send_message(&mut self, message: &str) {
    self.messages.push(message.to_string());
  }

  fn show_coordinates(&mut self) {
    self.coordinates_requested = true;
  }
}

#[cfg(test)]
mod tests {
  use parking_lot::Mutex;
  use the_core::{
    CommandDescriptor,
    EntityKind,
  };
  use the_dispatch::{
    ChatHandler,
    CommandExecutionHandler,
    DeathHandler,
    HurtHandler,
    ItemDropHandler,
    ItemUseOnBlockHandler,
    Plugin,
    PluginHandler,
    PluginRegistry,
    QuitHandler,
    RespawnHandler,
    TransferHandler,
    capabilities,
  };

  use super::*;

  type Log = Arc<Mutex<Vec<String>>>;

  // Cancels everything it can see.
  struct Veto;

  impl Plugin for Veto {
    fn name(&self) -> &str {
      "veto"
    }
  }

  impl ChatHandler for Veto {
    fn handle_chat(&self, _p: &mut dyn Player, ctx: &mut EventContext, _message: &mut String) {
      ctx.cancel();
    }
  }

  impl HurtHandler for Veto {
    fn handle_hurt(&self, _p: &mut dyn Player, ctx: &mut EventContext, _damage: &mut f64, _source: DamageSource) {
      ctx.cancel();
    }
  }

  impl ItemDropHandler for Veto {
    fn handle_item_drop(&self, _p: &mut dyn Player, ctx: &mut EventContext, _item: &DroppedItem) {
      ctx.cancel();
    }
  }

  impl CommandExecutionHandler for Veto {
    fn handle_command_execution(
      &self,
      _p: &mut dyn Player,
      ctx: &mut EventContext,
      _command: &CommandDescriptor,
      _args: &[String],
    ) {
      ctx.cancel();
    }
  }

  capabilities!(Veto => Chat, Hurt, ItemDrop, CommandExecution);

  // Rewrites every slot it can see.
  struct Rewrite;

  impl Plugin for Rewrite {
    fn name(&self) -> &str {
      "rewrite"
    }
  }

  impl ChatHandler for Rewrite {
    fn handle_chat(&self, _p: &mut dyn Player, _ctx: &mut EventContext, message: &mut String) {
      *message = message.to_uppercase();
    }
  }

  impl HurtHandler for Rewrite {
    fn handle_hurt(&self, _p: &mut dyn Player, _ctx: &mut EventContext, damage: &mut f64, _source: DamageSource) {
      *damage *= 2.0;
    }
  }

  impl RespawnHandler for Rewrite {
    fn handle_respawn(&self, _p: &mut dyn Player, pos: &mut Vec3) {
      *pos = Vec3::new(0.0, 100.0, 0.0);
    }
  }

  impl TransferHandler for Rewrite {
    fn handle_transfer(&self, _p: &mut dyn Player, _ctx: &mut EventContext, addr: &mut SocketAddr) {
      addr.set_port(19133);
    }
  }

  capabilities!(Rewrite => Chat, Hurt, Respawn, Transfer);

  // Records notices and shows coordinates for `/coords`.
  struct Recorder {
    log: Log,
  }

  impl Plugin for Recorder {
    fn name(&self) -> &str {
      "recorder"
    }
  }

  impl DeathHandler for Recorder {
    fn handle_death(&self, p: &mut dyn Player, source: DamageSource) {
      self.log.lock().push(format!("death {} {source}", p.name()));
    }
  }

  impl QuitHandler for Recorder {
    fn handle_quit(&self, p: &mut dyn Player) {
      self.log.lock().push(format!("quit {}", p.name()));
    }
  }

  impl CommandExecutionHandler for Recorder {
    fn handle_command_execution(
      &self,
      p: &mut dyn Player,
      _ctx: &mut EventContext,
      command: &CommandDescriptor,
      args: &[String],
    ) {
      self.log.lock().push(format!("command {} {}", command.name, args.join(",")));
      if command.name == "coords" {
        p.show_coordinates();
      }
    }
  }

  impl ItemUseOnBlockHandler for Recorder {
    fn handle_item_use_on_block(
      &self,
      _p: &mut dyn Player,
      _ctx: &mut EventContext,
      pos: BlockPos,
      face: Face,
      _click_pos: Vec3,
    ) {
      self.log.lock().push(format!("use on {pos} {face:?}"));
    }
  }

  capabilities!(Recorder => Death, Quit, CommandExecution, ItemUseOnBlock);

  fn commands() -> Arc<CommandRegistry> {
    let mut commands = CommandRegistry::new();
    commands
      .register(CommandDescriptor::new("help", "Lists the commands").with_aliases(["?"]))
      .unwrap();
    commands
      .register(CommandDescriptor::new("coords", "View your coordinates"))
      .unwrap();
    Arc::new(commands)
  }

  fn session(plugins: Vec<Arc<dyn Plugin>>) -> Session {
    let mut session = Session::new("Steve", commands(), Vec3::new(0.5, 64.0, 0.5));
    session.handle(Arc::new(PluginHandler::new(PluginRegistry::new(plugins))));
    session
  }

  #[test]
  fn nop_handler_applies_everything() {
    let mut session = Session::new("Steve", commands(), Vec3::ZERO);

    assert_eq!(session.chat("hi").as_deref(), Some("hi"));
    assert!(session.move_to(Vec3::new(1.0, 2.0, 3.0), 90.0, 10.0));
    assert_eq!(session.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(session.rotation(), (90.0, 10.0));
    assert_eq!(session.hurt(5.0, DamageSource::Fall), 5.0);
    assert_eq!(session.heal(2.0, HealingSource::Food), 2.0);
    assert_eq!(session.health(), 17.0);
    assert!(session.exhaust(18));
    assert_eq!(session.food(), 18);
    assert!(session.execute("/coords"));
    assert!(!session.coordinates_requested());
  }

  #[test]
  fn canceled_events_leave_state_alone() {
    let mut session = session(vec![Arc::new(Veto)]);

    assert_eq!(session.chat("hi"), None);
    assert_eq!(session.hurt(5.0, DamageSource::Fall), 0.0);
    assert_eq!(session.health(), MAX_HEALTH);

    session.hold(Some(ItemStack::new("minecraft:stone", 3)));
    assert!(session.drop_held().is_none());
    assert_eq!(session.held().map(|s| s.count), Some(3));

    assert!(!session.execute("/help"));
    assert!(session.messages().is_empty());
  }

  #[test]
  fn slots_are_read_back_after_dispatch() {
    let mut session = session(vec![Arc::new(Rewrite)]);

    assert_eq!(session.chat("hello").as_deref(), Some("HELLO"));
    assert_eq!(session.messages(), ["<Steve> HELLO"]);
    assert_eq!(session.hurt(3.0, DamageSource::Fire), 6.0);
    assert_eq!(session.health(), 14.0);

    let addr: SocketAddr = "10.0.0.1:19132".parse().unwrap();
    assert_eq!(session.transfer(addr), Some("10.0.0.1:19133".parse().unwrap()));
    assert_eq!(session.transferred_to(), Some("10.0.0.1:19133".parse().unwrap()));
  }

  #[test]
  fn cancel_wins_over_rewrite_in_either_order() {
    for plugins in [
      vec![Arc::new(Rewrite) as Arc<dyn Plugin>, Arc::new(Veto)],
      vec![Arc::new(Veto) as Arc<dyn Plugin>, Arc::new(Rewrite)],
    ] {
      let mut session = session(plugins);
      assert_eq!(session.chat("hello"), None);
      assert_eq!(session.hurt(3.0, DamageSource::Fire), 0.0);
    }
  }

  #[test]
  fn lethal_damage_kills_and_respawn_uses_slot() {
    let log = Log::default();
    let mut session = session(vec![
      Arc::new(Rewrite),
      Arc::new(Recorder { log: log.clone() }),
    ]);

    assert_eq!(session.hurt(15.0, DamageSource::Lava), MAX_HEALTH);
    assert!(session.is_dead());
    assert_eq!(session.health(), 0.0);
    assert_eq!(*log.lock(), ["death Steve tried to swim in lava"]);

    assert!(!session.move_to(Vec3::ZERO, 0.0, 0.0));
    assert_eq!(session.hurt(1.0, DamageSource::Fall), 0.0);

    assert_eq!(session.respawn(), Some(Vec3::new(0.0, 100.0, 0.0)));
    assert!(!session.is_dead());
    assert_eq!(session.health(), MAX_HEALTH);
    assert_eq!(session.respawn(), None);
  }

  #[test]
  fn commands_reach_plugins() {
    let log = Log::default();
    let mut session = session(vec![Arc::new(Recorder { log: log.clone() })]);

    assert!(session.execute("coords a \"b c\""));
    assert!(session.coordinates_requested());
    assert_eq!(*log.lock(), ["command coords a,b c"]);

    assert!(session.take_coordinates_request());
    assert!(!session.coordinates_requested());
    assert!(!session.take_coordinates_request());
  }

  #[test]
  fn unknown_command_raises_nothing() {
    let log = Log::default();
    let mut session = session(vec![Arc::new(Recorder { log: log.clone() })]);

    assert!(!session.execute("/fly"));
    assert_eq!(session.messages(), ["Unknown command: /fly"]);
    assert!(log.lock().is_empty());
    assert!(!session.execute("   "));
  }

  #[test]
  fn help_lists_commands() {
    let mut session = Session::new("Steve", commands(), Vec3::ZERO);

    assert!(session.execute("/?"));
    assert_eq!(
      session.take_messages(),
      ["/coords - View your coordinates", "/help - Lists the commands"]
    );

    assert!(session.execute("/help coords"));
    assert_eq!(session.take_messages(), ["/coords - View your coordinates"]);
  }

  #[test]
  fn quit_is_raised_once() {
    let log = Log::default();
    let mut session = session(vec![Arc::new(Recorder { log: log.clone() })]);

    session.quit();
    session.quit();
    assert!(!session.is_connected());
    assert_eq!(*log.lock(), ["quit Steve"]);
  }

  #[test]
  fn blocks_and_items() {
    let mut session = Session::new("Steve", commands(), Vec3::ZERO);
    let pos = BlockPos::new(1, 64, 1);

    assert!(!session.break_block(pos));
    assert!(session.place_block(pos, Block::new("minecraft:dirt")));
    assert!(session.pick_block(pos));
    assert_eq!(session.held(), Some(&ItemStack::new("minecraft:dirt", 1)));
    assert!(session.break_block(pos));
    assert!(session.block_at(pos).is_air());
    assert!(!session.pick_block(pos));

    session.hold(Some(ItemStack::new("minecraft:wooden_sword", 1).with_durability(2)));
    assert!(session.damage_held_item(1));
    assert!(session.held().is_some());
    assert!(session.damage_held_item(1));
    assert!(session.held().is_none());
    assert!(!session.use_item());
    assert!(!session.damage_held_item(1));

    assert!(session.pick_up(ItemStack::new("minecraft:apple", 2)));
    assert_eq!(session.inventory().len(), 1);

    let zombie = Entity::new(EntityId(3), EntityKind::Mob, "zombie", Vec3::ZERO);
    let arrow = Entity::new(EntityId(4), EntityKind::Projectile, "arrow", Vec3::ZERO);
    assert!(session.attack(&zombie));
    assert!(!session.attack(&arrow));
    assert!(session.use_item_on_entity(&arrow));
    assert!(session.use_item_on_block(pos, Face::Up, Vec3::new(0.5, 1.0, 0.5)));
  }

  #[test]
  fn clicks_outside_the_block_raise_nothing() {
    let log = Log::default();
    let mut session = session(vec![Arc::new(Recorder { log: log.clone() })]);
    let pos = BlockPos::new(1, 64, 1);

    assert!(!session.use_item_on_block(pos, Face::North, Vec3::new(0.5, 1.5, 0.0)));
    assert!(!session.use_item_on_block(pos, Face::North, Vec3::new(-0.1, 0.5, 0.0)));
    assert!(log.lock().is_empty());

    assert!(session.use_item_on_block(pos, Face::North, Vec3::new(0.5, 0.5, 0.0)));
    assert_eq!(*log.lock(), ["use on 1 64 1 North"]);
  }

  #[test]
  fn food_only_raised_on_loss() {
    let mut session = Session::new("Steve", commands(), Vec3::ZERO);
    assert!(!session.exhaust(MAX_FOOD));
    assert!(session.exhaust(-5));
    assert_eq!(session.food(), 0);
  }

  quickcheck::quickcheck! {
      fn prop_health_stays_in_range(hits: Vec<(u8, bool)>) -> bool {
          let mut session = Session::new("Steve", commands(), Vec3::ZERO);
          hits.into_iter().all(|(amount, heal)| {
              let amount = f64::from(amount % 12);
              if heal {
                  session.heal(amount, HealingSource::Regeneration);
              } else if session.hurt(amount, DamageSource::Custom) > 0.0 && session.is_dead() {
                  session.respawn();
              }
              (0.0..=MAX_HEALTH).contains(&session.health())
          })
      }
  }
}
