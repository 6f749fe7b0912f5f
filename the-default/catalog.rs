use std::sync::Arc;

use serde::de::DeserializeOwned;
use the_dispatch::Plugin;
use the_loader::PluginsConfig;
use thiserror::Error;
use toml::Value;

use crate::{
  ChatFilter,
  CoordsPlugin,
  Protection,
  SpawnPlugin,
};

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("unknown plugin '{0}'")]
  Unknown(String),
  #[error("plugin '{0}' is enabled more than once")]
  Duplicate(String),
  #[error("plugin '{0}' requires a [plugins.settings.{0}] table")]
  MissingSettings(String),
  #[error("invalid settings for plugin '{plugin}'")]
  Settings {
    plugin: String,
    #[source]
    source: toml::de::Error,
  },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

type Build = fn(Option<&Value>) -> Result<Arc<dyn Plugin>>;

/// A plugin shipped with the server, enabled by name from the config.
pub struct BuiltinPlugin {
  pub name: &'static str,
  pub doc:  &'static str,
  build:    Build,
}

impl BuiltinPlugin {
  const fn new(name: &'static str, doc: &'static str, build: Build) -> Self {
    Self { name, doc, build }
  }

  pub fn build(&self, settings: Option<&Value>) -> Result<Arc<dyn Plugin>> {
    (self.build)(settings)
  }
}

pub static BUILTIN_PLUGINS: &[BuiltinPlugin] = &[
  BuiltinPlugin::new(
    "coords",
    "Adds /coords to show the player's coordinates",
    build_coords,
  ),
  BuiltinPlugin::new(
    "chat-filter",
    "Masks configured words in chat",
    build_chat_filter,
  ),
  BuiltinPlugin::new(
    "spawn",
    "Respawns players at a fixed position",
    build_spawn,
  ),
  BuiltinPlugin::new(
    "protection",
    "Keeps blocks around a point from changing",
    build_protection,
  ),
];

/// Builds one built-in plugin by name.
pub fn build_plugin(name: &str, settings: Option<&Value>) -> Result<Arc<dyn Plugin>> {
  BUILTIN_PLUGINS
    .iter()
    .find(|plugin| plugin.name == name)
    .ok_or_else(|| CatalogError::Unknown(name.to_string()))?
    .build(settings)
}

/// Builds every enabled plugin, in `enabled` order.
pub fn build_plugins(config: &PluginsConfig) -> Result<Vec<Arc<dyn Plugin>>> {
  let mut plugins = Vec::with_capacity(config.enabled.len());
  for (i, name) in config.enabled.iter().enumerate() {
    if config.enabled[..i].contains(name) {
      return Err(CatalogError::Duplicate(name.clone()));
    }
    plugins.push(build_plugin(name, config.settings_for(name))?);
  }

  for name in config.settings.keys() {
    if !config.enabled.contains(name) {
      log::warn!("settings for plugin '{name}' are ignored, it is not enabled");
    }
  }
  Ok(plugins)
}

fn build_coords(_settings: Option<&Value>) -> Result<Arc<dyn Plugin>> {
  Ok(Arc::new(CoordsPlugin))
}

fn build_chat_filter(settings: Option<&Value>) -> Result<Arc<dyn Plugin>> {
  let settings = settings_or_default("chat-filter", settings)?;
  Ok(Arc::new(ChatFilter::new(settings)))
}

fn build_spawn(settings: Option<&Value>) -> Result<Arc<dyn Plugin>> {
  let settings = required_settings("spawn", settings)?;
  Ok(Arc::new(SpawnPlugin::new(settings)))
}

fn build_protection(settings: Option<&Value>) -> Result<Arc<dyn Plugin>> {
  let settings = required_settings("protection", settings)?;
  Ok(Arc::new(Protection::new(settings)))
}

fn parse_settings<T: DeserializeOwned>(plugin: &str, settings: &Value) -> Result<T> {
  settings.clone().try_into().map_err(|source| {
    CatalogError::Settings {
      plugin: plugin.to_string(),
      source,
    }
  })
}

fn settings_or_default<T: DeserializeOwned + Default>(plugin: &str, settings: Option<&Value>) -> Result<T> {
  settings.map_or_else(|| Ok(T::default()), |settings| parse_settings(plugin, settings))
}

fn required_settings<T: DeserializeOwned>(plugin: &str, settings: Option<&Value>) -> Result<T> {
  let settings = settings.ok_or_else(|| CatalogError::MissingSettings(plugin.to_string()))?;
  parse_settings(plugin, settings)
}
