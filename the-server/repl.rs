//! Line-based driver for the simulated player.
//!
//! `/name args` runs a command, `!action args` raises one of the other
//! events, and anything else is chat.

use std::{
  io::{
    BufRead,
    Write,
  },
  net::SocketAddr,
};

use anyhow::{
  Context,
  Result,
  bail,
};
use the_core::{
  Block,
  BlockPos,
  DamageSource,
  HealingSource,
  ItemStack,
  Player,
  Vec3,
};
use the_lib::Session;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  Command(String),
  Chat(String),
  Move(Vec3),
  Teleport(Vec3),
  Hurt(f64),
  Heal(f64),
  Starve(i32),
  Die,
  Respawn,
  Break(BlockPos),
  Place(BlockPos, Block),
  Pick(BlockPos),
  Hold(ItemStack),
  Use,
  Drop,
  Transfer(SocketAddr),
  Status,
  Quit,
}

impl Action {
  /// Parses one input line. Blank lines are `None`.
  pub fn parse(line: &str) -> Result<Option<Action>> {
    let line = line.trim();
    if line.is_empty() {
      return Ok(None);
    }
    if line == "/quit" {
      return Ok(Some(Action::Quit));
    }
    if line.starts_with('/') {
      return Ok(Some(Action::Command(line.to_string())));
    }
    let Some(rest) = line.strip_prefix('!') else {
      return Ok(Some(Action::Chat(line.to_string())));
    };

    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();
    let action = match (name, args.as_slice()) {
      ("move", [x, y, z]) => Action::Move(parse_vec3(x, y, z)?),
      ("tp", [x, y, z]) => Action::Teleport(parse_vec3(x, y, z)?),
      ("hurt", [amount]) => Action::Hurt(parse(amount, "damage")?),
      ("heal", [amount]) => Action::Heal(parse(amount, "health")?),
      ("starve", [food]) => Action::Starve(parse(food, "food level")?),
      ("die", []) => Action::Die,
      ("respawn", []) => Action::Respawn,
      ("break", [x, y, z]) => Action::Break(parse_block_pos(x, y, z)?),
      ("place", [x, y, z, block]) => Action::Place(parse_block_pos(x, y, z)?, Block::new(*block)),
      ("pick", [x, y, z]) => Action::Pick(parse_block_pos(x, y, z)?),
      ("hold", [item]) => Action::Hold(ItemStack::new(*item, 1)),
      ("hold", [item, count]) => Action::Hold(ItemStack::new(*item, parse(count, "count")?)),
      ("use", []) => Action::Use,
      ("drop", []) => Action::Drop,
      ("transfer", [addr]) => Action::Transfer(parse(addr, "address")?),
      ("status", []) => Action::Status,
      _ => bail!("unknown action: !{rest}"),
    };
    Ok(Some(action))
  }
}

fn parse<T>(value: &str, what: &str) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  value
    .parse()
    .with_context(|| format!("invalid {what}: {value}"))
}

fn parse_vec3(x: &str, y: &str, z: &str) -> Result<Vec3> {
  Ok(Vec3::new(
    parse(x, "coordinate")?,
    parse(y, "coordinate")?,
    parse(z, "coordinate")?,
  ))
}

fn parse_block_pos(x: &str, y: &str, z: &str) -> Result<BlockPos> {
  Ok(BlockPos::new(
    parse(x, "coordinate")?,
    parse(y, "coordinate")?,
    parse(z, "coordinate")?,
  ))
}

/// Applies `action` to the session and describes the outcome.
pub fn apply(session: &mut Session, action: Action) -> String {
  fn verdict(applied: bool) -> String {
    if applied { "ok".into() } else { "canceled".into() }
  }

  match action {
    Action::Command(line) => {
      if session.execute(&line) { "ok".into() } else { "not run".into() }
    },
    Action::Chat(message) => {
      match session.chat(&message) {
        Some(_) => "sent".into(),
        None => "canceled".into(),
      }
    },
    Action::Move(pos) => {
      let (yaw, pitch) = session.rotation();
      verdict(session.move_to(pos, yaw, pitch))
    },
    Action::Teleport(pos) => verdict(session.teleport(pos)),
    Action::Hurt(amount) => {
      let dealt = session.hurt(amount, DamageSource::Custom);
      format!("took {dealt} damage, health {}", session.health())
    },
    Action::Heal(amount) => {
      let healed = session.heal(amount, HealingSource::Custom);
      format!("healed {healed}, health {}", session.health())
    },
    Action::Starve(food) => verdict(session.exhaust(food)),
    Action::Die => {
      session.kill(DamageSource::Custom);
      "dead".into()
    },
    Action::Respawn => {
      match session.respawn() {
        Some(pos) => format!("respawned at {pos}"),
        None => "not dead".into(),
      }
    },
    Action::Break(pos) => verdict(session.start_break(pos) && session.break_block(pos)),
    Action::Place(pos, block) => verdict(session.place_block(pos, block)),
    Action::Pick(pos) => verdict(session.pick_block(pos)),
    Action::Hold(stack) => {
      let reply = format!("holding {stack}");
      session.hold(Some(stack));
      reply
    },
    Action::Use => verdict(session.use_item()),
    Action::Drop => {
      match session.drop_held() {
        Some(item) => format!("dropped {}", item.stack),
        None => "nothing dropped".into(),
      }
    },
    Action::Transfer(addr) => {
      match session.transfer(addr) {
        Some(addr) => format!("transferred to {addr}"),
        None => "canceled".into(),
      }
    },
    Action::Status => {
      let (yaw, pitch) = session.rotation();
      format!(
        "{} at {} facing {yaw:.0}/{pitch:.0}, health {}, food {}",
        session.name(),
        session.position(),
        session.health(),
        session.food()
      )
    },
    Action::Quit => {
      session.quit();
      "bye".into()
    },
  }
}

/// Reads actions from `input` until EOF or `/quit`, which both disconnect the
/// player.
pub fn run(session: &mut Session, input: impl BufRead, mut output: impl Write) -> Result<()> {
  for line in input.lines() {
    let line = line.context("failed to read input")?;
    let action = match Action::parse(&line) {
      Ok(Some(action)) => action,
      Ok(None) => continue,
      Err(err) => {
        writeln!(output, "error: {err:#}")?;
        continue;
      },
    };

    let quit = action == Action::Quit;
    let reply = apply(session, action);
    for message in session.take_messages() {
      writeln!(output, "{message}")?;
    }
    if session.take_coordinates_request() {
      writeln!(output, "position: {}", session.position())?;
    }
    writeln!(output, "> {reply}")?;
    if quit {
      return Ok(());
    }
  }

  session.quit();
  writeln!(output, "> bye")?;
  output.flush()?;
  Ok(())
}
