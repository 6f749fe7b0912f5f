use std::{
  fmt,
  sync::Arc,
};

use crate::{
  Capabilities,
  Capability,
  Host,
  InitError,
  Plugin,
};

/// A registered plugin and the capabilities resolved for it.
pub struct PluginEntry {
  plugin:       Arc<dyn Plugin>,
  name:         String,
  capabilities: Capabilities,
}

impl PluginEntry {
  pub fn plugin(&self) -> &dyn Plugin {
    self.plugin.as_ref()
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn capabilities(&self) -> Capabilities {
    self.capabilities
  }
}

impl fmt::Debug for PluginEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PluginEntry")
      .field("name", &self.name)
      .field("capabilities", &self.capabilities)
      .finish()
  }
}

/// Ordered, immutable set of plugins.
///
/// Registration order is dispatch order. Every plugin is probed once here;
/// dispatch then walks a per-capability list of positions instead of probing
/// each plugin for each event.
#[derive(Debug)]
pub struct PluginRegistry {
  entries: Vec<PluginEntry>,
  index:   [Vec<usize>; Capability::COUNT],
}

impl PluginRegistry {
  pub fn new(plugins: impl IntoIterator<Item = Arc<dyn Plugin>>) -> Self {
    let mut index: [Vec<usize>; Capability::COUNT] = std::array::from_fn(|_| Vec::new());

    let entries: Vec<_> = plugins
      .into_iter()
      .enumerate()
      .map(|(position, plugin)| {
        let capabilities = Capabilities::of(plugin.as_ref());
        for cap in capabilities.capabilities() {
          index[cap as usize].push(position);
        }

        let name = plugin.name().to_string();
        log::debug!("registered plugin '{name}' handling {capabilities}");
        PluginEntry {
          plugin,
          name,
          capabilities,
        }
      })
      .collect();

    Self { entries, index }
  }

  pub fn empty() -> Self {
    Self::new(std::iter::empty())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn entries(&self) -> &[PluginEntry] {
    &self.entries
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(PluginEntry::name)
  }

  /// Capabilities of the plugin registered at `position`.
  pub fn capabilities_of(&self, position: usize) -> Option<Capabilities> {
    self.entries.get(position).map(PluginEntry::capabilities)
  }

  /// Plugins implementing `capability`, in registration order.
  pub fn capable(&self, capability: Capability) -> impl Iterator<Item = &PluginEntry> {
    self.index[capability as usize]
      .iter()
      .map(move |&position| &self.entries[position])
  }

  /// Union of the capabilities of every plugin.
  pub fn capabilities(&self) -> Capabilities {
    self
      .entries
      .iter()
      .fold(Capabilities::empty(), |acc, entry| acc | entry.capabilities)
  }

  /// Runs [`Plugin::init`] for every plugin in registration order, stopping
  /// at the first failure.
  pub fn initialize(&self, host: &mut dyn Host) -> Result<(), InitError> {
    for entry in &self.entries {
      entry.plugin.init(host).map_err(|source| {
        InitError {
          plugin: entry.name.clone(),
          source,
        }
      })?;
      log::info!("initialized plugin '{}'", entry.name);
    }
    Ok(())
  }
}

impl Default for PluginRegistry {
  fn default() -> Self {
    Self::empty()
  }
}
