//! # the-dispatch
//!
//! Capability-gated event dispatch from players to plugins.
//!
//! A player raises events through exactly one [`Handler`]. Plugins implement
//! only the single-method handler traits they care about ([`ChatHandler`],
//! [`HurtHandler`], ...) and advertise them through [`Observer`]. The
//! [`PluginRegistry`] probes every plugin once, and [`PluginHandler`] fans
//! each event out to the plugins that handle it, in registration order.
//!
//! ## Core Concepts
//!
//! - **Capability**: one event kind a plugin may react to
//! - **Event context**: per-dispatch cancellation token ([`EventContext`])
//! - **Mutable slot**: a payload field passed as `&mut` that every later
//!   plugin sees, e.g. the chat message or the damage dealt
//! - **Fan-out**: every capable plugin is invoked, even after one of them
//!   canceled the event
//! - **Null handler**: [`NopHandler`] ignores every event and is what players
//!   hold before plugins are attached
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use the_core::{
//!   Player,
//!   Vec3,
//! };
//! use the_dispatch::{
//!   ChatHandler,
//!   EventContext,
//!   Handler,
//!   Plugin,
//!   PluginHandler,
//!   PluginRegistry,
//!   capabilities,
//! };
//!
//! struct Shout;
//!
//! impl Plugin for Shout {
//!   fn name(&self) -> &str {
//!     "shout"
//!   }
//! }
//!
//! impl ChatHandler for Shout {
//!   fn handle_chat(&self, _p: &mut dyn Player, _ctx: &mut EventContext, message: &mut String) {
//!     *message = message.to_uppercase();
//!   }
//! }
//!
//! capabilities!(Shout => Chat);
//!
//! struct Steve;
//!
//! impl Player for Steve {
//!   fn name(&self) -> &str {
//!     "Steve"
//!   }
//!   fn position(&self) -> Vec3 {
//!     Vec3::ZERO
//!   }
//!   fn rotation(&self) -> (f64, f64) {
//!     (0.0, 0.0)
//!   }
//!   fn health(&self) -> f64 {
//!     20.0
//!   }
//!   fn food(&self) -> i32 {
//!     20
//!   }
//!   fn send_message(&mut self, _message: &str) {}
//!   fn show_coordinates(&mut self) {}
//! }
//!
//! let plugins: Vec<Arc<dyn Plugin>> = vec![Arc::new(Shout)];
//! let handler = PluginHandler::new(PluginRegistry::new(plugins));
//!
//! let mut ctx = EventContext::new();
//! let mut message = String::from("hello");
//! handler.handle_chat(&mut Steve, &mut ctx, &mut message);
//!
//! assert_eq!(message, "HELLO");
//! assert!(!ctx.canceled());
//! ```

#[macro_use]
mod define;

mod capability;
mod composite;
mod context;
mod handler;
mod plugin;
mod registry;

pub use paste;

pub use capability::Capabilities;
pub use composite::{
  FaultPolicy,
  PluginHandler,
  handler_for,
};
pub use context::EventContext;
pub use handler::*;
pub use plugin::{
  Host,
  InitError,
  Plugin,
  PluginError,
};
pub use registry::{
  PluginEntry,
  PluginRegistry,
};
