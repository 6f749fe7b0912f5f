use serde::{
  Deserialize,
  Serialize,
};
use the_core::Player;
use the_dispatch::{
  ChatHandler,
  EventContext,
  Plugin,
  capabilities,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ChatFilterSettings {
  /// Words to mask, matched ignoring ASCII case.
  pub words:       Vec<String>,
  pub replacement: String,
}

impl Default for ChatFilterSettings {
  fn default() -> Self {
    Self {
      words:       Vec::new(),
      replacement: "****".to_string(),
    }
  }
}

/// Masks configured words in chat messages and drops messages left blank.
#[derive(Debug, Clone)]
pub struct ChatFilter {
  words:       Vec<String>,
  replacement: String,
}

impl ChatFilter {
  pub fn new(settings: ChatFilterSettings) -> Self {
    let words = settings
      .words
      .into_iter()
      .filter(|word| !word.is_empty())
      .map(|word| word.to_ascii_lowercase())
      .collect();
    Self {
      words,
      replacement: settings.replacement,
    }
  }

  /// Returns `message` with every filtered word replaced.
  pub fn filter(&self, message: &str) -> String {
    self
      .words
      .iter()
      .fold(message.to_string(), |message, word| {
        replace_ignore_ascii_case(&message, word, &self.replacement)
      })
  }
}

impl Plugin for ChatFilter {
  fn name(&self) -> &str {
    "chat-filter"
  }
}

impl ChatHandler for ChatFilter {
  fn handle_chat(&self, p: &mut dyn Player, ctx: &mut EventContext, message: &mut String) {
    let filtered = self.filter(message);
    if filtered != *message {
      log::debug!("filtered chat from {}", p.name());
      *message = filtered;
    }
    if message.trim().is_empty() {
      ctx.cancel();
    }
  }
}

capabilities!(ChatFilter => Chat);

// `needle` must already be lowercase.
fn replace_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
  let lower = haystack.to_ascii_lowercase();
  let mut out = String::with_capacity(haystack.len());
  let mut last = 0;
  for (start, _) in lower.match_indices(needle) {
    out.push_str(&haystack[last..start]);
    out.push_str(replacement);
    last = start + needle.len();
  }
  out.push_str(&haystack[last..]);
  out
}
