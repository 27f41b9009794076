use crate::{Plugin, Spec, TaskState};

type OnStateChange = dyn Fn(TaskState) + Send + Sync;
type OnSpecListed = dyn Fn(Spec) + Send + Sync;

pub struct PluginBuilder {
  name: &'static str,
  on_state_change: Option<Box<OnStateChange>>,
  on_spec_listed: Option<Box<OnSpecListed>>,
}

impl PluginBuilder {
  fn new(name: &'static str) -> Self {
    PluginBuilder {
      name,
      on_state_change: None,
      on_spec_listed: None,
    }
  }

  pub fn on_state_change<T>(mut self, on_state_change: T) -> Self
  where
    T: Fn(TaskState) + 'static + Send + Sync,
  {
    self.on_state_change = Some(Box::new(on_state_change));
    self
  }

  pub fn on_spec_listed<T>(mut self, on_spec_listed: T) -> Self
  where
    T: Fn(Spec) + 'static + Send + Sync,
  {
    self.on_spec_listed = Some(Box::new(on_spec_listed));
    self
  }

  pub fn build(self) -> TaskPlugin {
    TaskPlugin {
      name: self.name,
      on_state_change: self.on_state_change,
      on_spec_listed: self.on_spec_listed,
    }
  }
}

/// Plugin assembled from closures.
pub struct TaskPlugin {
  name: &'static str,
  on_state_change: Option<Box<OnStateChange>>,
  on_spec_listed: Option<Box<OnSpecListed>>,
}

impl TaskPlugin {
  pub fn builder(name: &'static str) -> PluginBuilder {
    PluginBuilder::new(name)
  }
}

impl Plugin for TaskPlugin {
  fn name(&self) -> &'static str {
    self.name
  }

  fn on_state_change(&self, state: TaskState) {
    if let Some(on_state_change) = &self.on_state_change {
      on_state_change(state);
    }
  }

  fn on_spec_listed(&self, spec: Spec) {
    if let Some(on_spec_listed) = &self.on_spec_listed {
      on_spec_listed(spec);
    }
  }
}
