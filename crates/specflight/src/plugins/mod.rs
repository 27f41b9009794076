mod plugin;

use crate::{Spec, TaskState};
pub use plugin::*;
use std::sync::Arc;

/// Presentation hooks. Plugins observe a run, they can not change it.
pub trait Plugin: Send + Sync {
  fn name(&self) -> &'static str;
  fn on_state_change(&self, _state: TaskState) {}
  fn on_spec_listed(&self, _spec: Spec) {}
}

pub type SharedPluginDriver = Arc<PluginDriver>;

pub struct PluginDriver {
  pub(crate) plugins: Vec<Box<dyn Plugin>>,
}

impl PluginDriver {
  pub fn new(plugins: Vec<Box<dyn Plugin>>) -> Self {
    PluginDriver { plugins }
  }

  pub fn on_state_change(&self, state: TaskState) {
    log::trace!("Task state changed to {}: {}", state.status(), state.title());

    for plugin in &self.plugins {
      plugin.on_state_change(state.clone());
    }
  }

  pub fn on_spec_listed(&self, spec: Spec) {
    for plugin in &self.plugins {
      plugin.on_spec_listed(spec.clone());
    }
  }

  pub fn names(&self) -> Vec<&'static str> {
    self.plugins.iter().map(|plugin| plugin.name()).collect()
  }
}
