use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
  Error,
  Warn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleLine {
  pub level: ConsoleLevel,
  pub message: String,
}

#[derive(Default)]
struct SharedState {
  lines: Vec<ConsoleLine>,
}

/// Console handed to the discovery sandbox. Lines are only ever appended and
/// keep the order they were written in; clones share the same buffer.
#[derive(Clone, Default)]
pub struct RuntimeConsole {
  state: Arc<Mutex<SharedState>>,
}

impl RuntimeConsole {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn error(&self, message: impl Into<String>) {
    self.push(ConsoleLevel::Error, message.into());
  }

  pub fn warn(&self, message: impl Into<String>) {
    self.push(ConsoleLevel::Warn, message.into());
  }

  /// Plain output is traced but not kept.
  pub fn log(&self, message: impl Into<String>) {
    log::trace!("Runtime console: {}", message.into());
  }

  fn push(&self, level: ConsoleLevel, message: String) {
    self.state.lock().lines.push(ConsoleLine { level, message });
  }

  pub fn lines(&self) -> Vec<ConsoleLine> {
    self.state.lock().lines.clone()
  }

  pub fn errors(&self) -> Vec<String> {
    self.messages(ConsoleLevel::Error)
  }

  pub fn warnings(&self) -> Vec<String> {
    self.messages(ConsoleLevel::Warn)
  }

  fn messages(&self, level: ConsoleLevel) -> Vec<String> {
    self
      .state
      .lock()
      .lines
      .iter()
      .filter(|line| line.level == level)
      .map(|line| line.message.clone())
      .collect()
  }
}
