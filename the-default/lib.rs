//! Built-in plugins and the catalog that builds them from configuration.
//!
//! Each plugin lives in its own module and handles only the events it needs.
//! [`build_plugins`] turns the `[plugins]` section of the server config into
//! the ordered plugin list the server registers.

mod catalog;
mod chat_filter;
mod coords;
mod protection;
mod spawn;

pub use catalog::{
  BUILTIN_PLUGINS,
  BuiltinPlugin,
  CatalogError,
  build_plugin,
  build_plugins,
};
pub use chat_filter::{
  ChatFilter,
  ChatFilterSettings,
};
pub use coords::CoordsPlugin;
pub use protection::{
  Protection,
  ProtectionSettings,
};
pub use spawn::{
  SpawnPlugin,
  SpawnSettings,
};
