use std::path::Path;

use anyhow::{
  Context,
  Result,
};
use log::LevelFilter;

/// Level from `-v` flags, falling back to the configured one.
pub fn level(verbosity: u8, configured: LevelFilter) -> LevelFilter {
  match verbosity {
    0 => configured,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

pub fn setup(level: LevelFilter, log_file: &Path, stderr: bool) -> Result<()> {
  let mut dispatch = fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.target(),
        record.level(),
        message
      ))
    })
    .level(level)
    .chain(
      fern::log_file(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?,
    );

  if stderr {
    dispatch = dispatch.chain(std::io::stderr());
  }

  dispatch.apply().context("failed to install logger")?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn verbosity_overrides_config() {
    assert_eq!(level(0, LevelFilter::Warn), LevelFilter::Warn);
    assert_eq!(level(1, LevelFilter::Warn), LevelFilter::Debug);
    assert_eq!(level(3, LevelFilter::Off), LevelFilter::Trace);
  }
}
