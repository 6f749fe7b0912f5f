//! Server configuration: `[server]`, `[log]` and `[plugins]`.

use std::{
  collections::BTreeMap,
  fs,
  io,
  net::{
    Ipv4Addr,
    SocketAddr,
  },
  path::{
    Path,
    PathBuf,
  },
};

use log::LevelFilter;
use serde::{
  Deserialize,
  Serialize,
};
use the_dispatch::FaultPolicy;
use thiserror::Error;
use toml::Value;

use crate::merge_toml_values;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read {}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("failed to parse {}", path.display())]
  Parse {
    path:   PathBuf,
    #[source]
    source: toml::de::Error,
  },
  #[error("invalid configuration: {0}")]
  Invalid(#[source] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct Config {
  pub server:  ServerConfig,
  pub log:     LogConfig,
  pub plugins: PluginsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ServerConfig {
  /// Name plugins see through their host.
  pub name:         String,
  pub address:      SocketAddr,
  pub fault_policy: FaultPolicy,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      name:         "the-server".to_string(),
      address:      SocketAddr::from((Ipv4Addr::UNSPECIFIED, 19132)),
      fault_policy: FaultPolicy::default(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct LogConfig {
  pub level: LevelFilter,
  /// Defaults to [`crate::default_log_file`].
  pub file:  Option<PathBuf>,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: LevelFilter::Info,
      file:  None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct PluginsConfig {
  /// Plugins to load, in registration order.
  pub enabled:  Vec<String>,
  /// Per-plugin settings tables, keyed by plugin name. Each plugin validates
  /// its own table.
  pub settings: BTreeMap<String, Value>,
}

impl PluginsConfig {
  pub fn settings_for(&self, plugin: &str) -> Option<&Value> {
    self.settings.get(plugin)
  }
}

impl Default for PluginsConfig {
  fn default() -> Self {
    Self {
      enabled:  vec!["coords".to_string()],
      settings: BTreeMap::new(),
    }
  }
}

/// Deep enough to merge inside a plugin's settings, down to inline tables
/// such as `plugins.settings.protection.center`.
const MERGE_DEPTH: usize = 5;

impl Config {
  /// Builds the configuration from the global and workspace-local documents,
  /// the latter merged on top. Absent documents contribute nothing.
  pub fn load(global: Option<Value>, local: Option<Value>) -> Result<Config> {
    let merged = match (global, local) {
      (None, None) => return Ok(Config::default()),
      (Some(value), None) | (None, Some(value)) => value,
      (Some(global), Some(local)) => merge_toml_values(global, local, MERGE_DEPTH),
    };
    merged.try_into().map_err(ConfigError::Invalid)
  }

  /// Loads the global config file and the workspace-local one on top of it.
  pub fn load_paths(global: &Path, local: &Path) -> Result<Config> {
    Self::load(read_document(global)?, read_document(local)?)
  }

  /// Loads [`crate::config_file`] and [`crate::workspace_config_file`].
  pub fn load_user() -> Result<Config> {
    Self::load_paths(&crate::config_file(), &crate::workspace_config_file())
  }
}

/// Reads and parses a TOML document. A missing file is `None`.
fn read_document(path: &Path) -> Result<Option<Value>> {
  let text = match fs::read_to_string(path) {
    Ok(text) => text,
    Err(err) if err.kind() == io::ErrorKind::NotFound => {
      log::debug!("no config at {}", path.display());
      return Ok(None);
    },
    Err(source) => {
      return Err(ConfigError::Io {
        path: path.to_owned(),
        source,
      });
    },
  };

  toml::from_str(&text).map(Some).map_err(|source| {
    ConfigError::Parse {
      path: path.to_owned(),
      source,
    }
  })
}
