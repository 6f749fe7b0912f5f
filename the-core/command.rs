//! Command descriptors and the registry the host resolves them from.
//!
//! Descriptors carry no behaviour: executing a command means raising the
//! command execution event with the resolved descriptor, and plugins decide
//! what the command does.

use std::{
  collections::HashMap,
  fmt::{
    self,
    Write,
  },
  sync::Arc,
};

use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
  #[error("command name must not be empty")]
  EmptyName,
  #[error("command name '{0}' contains whitespace")]
  InvalidName(String),
  #[error("'{name}' is already registered by command '{owner}'")]
  Duplicate { name: String, owner: String },
}

/// Describes a command players can run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
  pub name:        String,
  pub description: String,
  pub aliases:     SmallVec<[String; 2]>,
  pub usage:       Option<String>,
}

impl CommandDescriptor {
  pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      name:        name.into(),
      description: description.into(),
      aliases:     SmallVec::new(),
      usage:       None,
    }
  }

  #[must_use]
  pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.aliases.extend(aliases.into_iter().map(Into::into));
    self
  }

  #[must_use]
  pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
    self.usage = Some(usage.into());
    self
  }

  /// Whether `name` refers to this command, either directly or through an
  /// alias.
  pub fn matches(&self, name: &str) -> bool {
    self.name == name || self.aliases.iter().any(|alias| alias == name)
  }

  pub fn generate_doc(&self) -> String {
    let mut doc = String::new();

    let _ = writeln!(doc, "/{} - {}", self.name, self.description);
    if !self.aliases.is_empty() {
      let _ = writeln!(doc, "Aliases: {}", self.aliases.join(", "));
    }
    if let Some(usage) = &self.usage {
      let _ = writeln!(doc, "Usage: /{} {usage}", self.name);
    }

    doc
  }
}

impl fmt::Display for CommandDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "/{}", self.name)
  }
}

/// Commands known to the server, keyed by name and alias.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
  commands: HashMap<String, Arc<CommandDescriptor>>,
}

impl CommandRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a command under its name and all of its aliases.
  ///
  /// Fails without registering anything if the name or any alias is already
  /// taken.
  pub fn register(&mut self, command: CommandDescriptor) -> Result<Arc<CommandDescriptor>, CommandError> {
    validate_name(&command.name)?;
    for alias in &command.aliases {
      validate_name(alias)?;
    }

    let keys = std::iter::once(&command.name).chain(command.aliases.iter());
    for key in keys {
      if let Some(owner) = self.commands.get(key) {
        return Err(CommandError::Duplicate {
          name:  key.clone(),
          owner: owner.name.clone(),
        });
      }
    }

    let cmd = Arc::new(command);
    self.commands.insert(cmd.name.clone(), cmd.clone());
    for alias in &cmd.aliases {
      self.commands.insert(alias.clone(), cmd.clone());
    }
    log::debug!("registered command {cmd}");
    Ok(cmd)
  }

  pub fn get(&self, name: &str) -> Option<&Arc<CommandDescriptor>> {
    self.commands.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.commands.contains_key(name)
  }

  /// Primary command names, sorted.
  pub fn names(&self) -> Vec<&str> {
    let mut names: Vec<_> = self.commands.values().map(|cmd| cmd.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names
  }

  /// Number of distinct commands, not counting aliases.
  pub fn len(&self) -> usize {
    self
      .commands
      .iter()
      .filter(|(key, cmd)| **key == cmd.name)
      .count()
  }

  pub fn is_empty(&self) -> bool {
    self.commands.is_empty()
  }
}

fn validate_name(name: &str) -> Result<(), CommandError> {
  if name.is_empty() {
    return Err(CommandError::EmptyName);
  }
  if name.chars().any(char::is_whitespace) {
    return Err(CommandError::InvalidName(name.to_string()));
  }
  Ok(())
}
