//! Splitting of raw command lines typed by players.

/// A command line split into the command name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
  pub name: String,
  pub args: Vec<String>,
}

impl CommandLine {
  /// Parses `/name arg "quoted arg"`.
  ///
  /// The leading slash is optional. Arguments are separated by spaces or tabs;
  /// single or double quotes group an argument, and an unterminated quote
  /// extends to the end of the line. Returns `None` for a line without a
  /// command name.
  pub fn parse(line: &str) -> Option<Self> {
    let line = line.trim();
    let line = line.strip_prefix('/').unwrap_or(line);

    let mut tokens = tokenize(line).into_iter();
    let name = tokens.next()?;
    if name.is_empty() {
      return None;
    }

    Some(Self {
      name,
      args: tokens.collect(),
    })
  }
}

fn tokenize(input: &str) -> Vec<String> {
  let mut tokens = Vec::new();
  let mut current = String::new();
  let mut in_token = false;
  let mut quote: Option<char> = None;

  for ch in input.chars() {
    match quote {
      Some(q) if ch == q => quote = None,
      Some(_) => current.push(ch),
      None => {
        match ch {
          ' ' | '\t' => {
            if in_token {
              tokens.push(std::mem::take(&mut current));
              in_token = false;
            }
          },
          '"' | '\'' => {
            quote = Some(ch);
            in_token = true;
          },
          _ => {
            current.push(ch);
            in_token = true;
          },
        }
      },
    }
  }

  if in_token {
    tokens.push(current);
  }
  tokens
}
