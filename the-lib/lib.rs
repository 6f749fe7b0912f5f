//! Host side of the plugin layer.
//!
//! [`Server`] owns the plugins and the command registry and picks the handler
//! players dispatch through. [`Session`] is a minimal connected player: it
//! raises every event kind, lets the plugins veto or rewrite it, and then
//! applies whatever outcome is left.

pub mod server;
pub mod session;

pub use server::{
  Server,
  ServerError,
};
pub use session::{
  MAX_FOOD,
  MAX_HEALTH,
  Session,
};
