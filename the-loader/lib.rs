//! Where the server keeps its files, and how its configuration is read.

pub mod config;

use std::{
  path::{
    Path,
    PathBuf,
  },
  sync::OnceLock,
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};

pub use config::{
  Config,
  ConfigError,
  LogConfig,
  PluginsConfig,
  ServerConfig,
};

static CONFIG_FILE: OnceLock<PathBuf> = OnceLock::new();

static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Name of the directory holding workspace-local configuration.
pub const WORKSPACE_DIR: &str = ".the-server";

pub fn initialize_config_file(specified_file: Option<PathBuf>) {
  let config_file = specified_file.unwrap_or_else(default_config_file);
  CONFIG_FILE.set(config_file).ok();
}

pub fn initialize_log_file(specified_file: Option<PathBuf>) {
  let log_file = specified_file.unwrap_or_else(default_log_file);
  ensure_parent_dir(&log_file);
  LOG_FILE.set(log_file).ok();
}

/// User configuration directory, `THE_SERVER_CONFIG_DIR` if set.
pub fn config_dir() -> PathBuf {
  if let Ok(dir) = std::env::var("THE_SERVER_CONFIG_DIR") {
    return expand_tilde(Path::new(&dir));
  }
  let mut path = choose_base_strategy()
    .map(|strategy| strategy.config_dir())
    .unwrap_or_default();
  path.push("the-server");
  path
}

/// Cache directory, `THE_SERVER_CACHE_DIR` if set. The default log file lives
/// here.
pub fn cache_dir() -> PathBuf {
  if let Ok(dir) = std::env::var("THE_SERVER_CACHE_DIR") {
    return expand_tilde(Path::new(&dir));
  }
  let mut path = choose_base_strategy()
    .map(|strategy| strategy.cache_dir())
    .unwrap_or_default();
  path.push("the-server");
  path
}

pub fn config_file() -> PathBuf {
  CONFIG_FILE.get_or_init(default_config_file).clone()
}

pub fn log_file() -> PathBuf {
  LOG_FILE
    .get_or_init(|| {
      let path = default_log_file();
      ensure_parent_dir(&path);
      path
    })
    .clone()
}

pub fn workspace_config_file() -> PathBuf {
  find_workspace().0.join(WORKSPACE_DIR).join("config.toml")
}

pub fn default_log_file() -> PathBuf {
  cache_dir().join("the-server.log")
}

/// Merge two TOML documents, merging values from `right` onto `left`.
///
/// Tables present on both sides are merged key by key, recursing up to
/// `merge_depth` levels. Past that depth, and for every other kind of value,
/// including arrays, the right value replaces the left one.
///
/// `merge_toml_values(global, local, 4)` on
///
/// ```toml
/// # global
/// [plugins.settings.spawn]
/// x = 0.0
/// y = 64.0
///
/// # local
/// [plugins.settings.spawn]
/// y = 80.0
/// ```
///
/// keeps `x = 0.0` and takes `y = 80.0`.
pub fn merge_toml_values(left: toml::Value, right: toml::Value, merge_depth: usize) -> toml::Value {
  use toml::Value;

  match (left, right) {
    (Value::Table(mut left_map), Value::Table(right_map)) => {
      if merge_depth > 0 {
        for (rname, rvalue) in right_map {
          match left_map.remove(&rname) {
            Some(lvalue) => {
              let merged_value = merge_toml_values(lvalue, rvalue, merge_depth - 1);
              left_map.insert(rname, merged_value);
            },
            None => {
              left_map.insert(rname, rvalue);
            },
          }
        }
        Value::Table(left_map)
      } else {
        Value::Table(right_map)
      }
    },
    (_, value) => value,
  }
}

/// Finds the current workspace folder.
///
/// Searches upward from the CWD and returns the first directory that contains
/// `.git`, `.jj` or `.the-server`. If no workspace was found returns
/// `(CWD, true)`, otherwise `(workspace, false)`.
pub fn find_workspace() -> (PathBuf, bool) {
  match std::env::current_dir() {
    Ok(current_dir) => find_workspace_in(current_dir),
    Err(_) => (PathBuf::new(), true),
  }
}

pub fn find_workspace_in(dir: impl AsRef<Path>) -> (PathBuf, bool) {
  let dir = dir.as_ref();
  for ancestor in dir.ancestors() {
    if ancestor.join(".git").exists()
      || ancestor.join(".jj").exists()
      || ancestor.join(WORKSPACE_DIR).exists()
    {
      return (ancestor.to_owned(), false);
    }
  }

  (dir.to_owned(), true)
}

fn default_config_file() -> PathBuf {
  config_dir().join("config.toml")
}

fn ensure_parent_dir(path: &Path) {
  if let Some(parent) = path.parent()
    && !parent.exists()
  {
    std::fs::create_dir_all(parent).ok();
  }
}

fn expand_tilde(path: &Path) -> PathBuf {
  match path.strip_prefix("~") {
    Ok(rest) => {
      etcetera::home_dir()
        .map(|home| home.join(rest))
        .unwrap_or_else(|_| path.to_owned())
    },
    Err(_) => path.to_owned(),
  }
}

#[cfg(test)]
mod tests {
  use toml::Value;

  use super::*;

  #[test]
  fn merge_keeps_untouched_keys() {
    let global: Value = toml::from_str(
      r#"
        [server]
        name = "lobby"
        address = "0.0.0.0:19132"

        [plugins.settings.spawn]
        x = 0.0
        y = 64.0
      "#,
    )
    .unwrap();
    let local: Value = toml::from_str(
      r#"
        [server]
        name = "dev"

        [plugins.settings.spawn]
        y = 80.0
      "#,
    )
    .unwrap();

    let merged = merge_toml_values(global, local, 4);
    assert_eq!(merged["server"]["name"].as_str(), Some("dev"));
    assert_eq!(merged["server"]["address"].as_str(), Some("0.0.0.0:19132"));
    assert_eq!(merged["plugins"]["settings"]["spawn"]["x"].as_float(), Some(0.0));
    assert_eq!(merged["plugins"]["settings"]["spawn"]["y"].as_float(), Some(80.0));
  }

  #[test]
  fn merge_replaces_arrays() {
    let global: Value = toml::from_str("[plugins]\nenabled = [\"coords\", \"spawn\"]").unwrap();
    let local: Value = toml::from_str("[plugins]\nenabled = [\"chat-filter\"]").unwrap();

    let merged = merge_toml_values(global, local, 3);
    assert_eq!(
      merged["plugins"]["enabled"],
      Value::Array(vec![Value::String("chat-filter".into())])
    );
  }

  #[test]
  fn merge_depth_zero_replaces_tables() {
    let global: Value = toml::from_str("a = 1\nb = 2").unwrap();
    let local: Value = toml::from_str("b = 3").unwrap();

    let merged = merge_toml_values(global, local, 0);
    assert!(merged.get("a").is_none());
    assert_eq!(merged["b"].as_integer(), Some(3));
  }

  #[test]
  fn workspace_is_nearest_marked_ancestor() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir(root.path().join(WORKSPACE_DIR)).unwrap();
    let nested = root.path().join("worlds").join("overworld");
    std::fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_workspace_in(&nested), (root.path().to_owned(), false));
  }

  #[test]
  fn workspace_falls_back_to_start_dir() {
    let root = tempfile::tempdir().unwrap();
    let (dir, fallback) = find_workspace_in(root.path());
    // A marker further up, e.g. a checkout containing the temp dir, is fine too.
    if fallback {
      assert_eq!(dir, root.path());
    }
  }
}
