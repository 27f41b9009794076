use colored::Colorize;
use log::Level;
use std::sync::OnceLock;

#[derive(Clone)]
pub struct Logger {
  level: Level,
}

impl Logger {
  pub fn new(level: Level) -> Self {
    Logger { level }
  }

  fn format_level(level: Level) -> colored::ColoredString {
    match level {
      Level::Error => "ERROR".red(),
      Level::Warn => "WARN".yellow(),
      Level::Info => "INFO".green(),
      Level::Debug => "DEBUG".blue(),
      Level::Trace => "TRACE".dimmed(),
    }
  }
}

impl log::Log for Logger {
  fn enabled(&self, metadata: &log::Metadata) -> bool {
    metadata.level() <= self.level
  }

  fn log(&self, record: &log::Record) {
    if !self.enabled(record.metadata()) {
      return;
    }

    let time = chrono::Local::now()
      .format("%Y-%m-%d %H:%M:%S")
      .to_string()
      .magenta();

    let level = Self::format_level(record.level());

    let target = record.target().cyan();

    let line = format!("{} {} {} {}", time, level, target, record.args());

    // warn and error go to stderr
    if record.level() <= Level::Warn {
      eprintln!("{}", line);
    } else {
      println!("{}", line);
    }
  }

  fn flush(&self) {}
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn init_logger() {
  init_logger_with_level(Level::Info);
}

/// Installs the console logger once per process. Later calls are no-ops, so
/// every test can call this without coordinating with the others.
pub fn init_logger_with_level(level: Level) {
  if LOGGER.get().is_some() {
    return;
  }

  let logger = LOGGER.get_or_init(|| Logger::new(level));

  if log::set_logger(logger).is_ok() {
    log::set_max_level(level.to_level_filter());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use log::{LevelFilter, Log};

  #[test]
  fn test_enabled() {
    let logger = Logger::new(Level::Info);

    let info = log::Metadata::builder().level(Level::Info).build();
    let debug = log::Metadata::builder().level(Level::Debug).build();
    let error = log::Metadata::builder().level(Level::Error).build();

    assert!(logger.enabled(&info));
    assert!(logger.enabled(&error));
    assert!(!logger.enabled(&debug));
  }

  #[test]
  fn test_init_twice() {
    init_logger_with_level(Level::Debug);
    init_logger_with_level(Level::Error);

    assert_eq!(log::max_level(), LevelFilter::Debug);
  }
}
