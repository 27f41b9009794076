use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Component {
  pub name: String,
}

/// A single renderable story, always owned by one component.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Spec {
  pub name: String,
  pub component: Component,
}

impl Spec {
  pub fn new(component_name: impl Into<String>, name: impl Into<String>) -> Self {
    Spec {
      name: name.into(),
      component: Component {
        name: component_name.into(),
      },
    }
  }

  pub fn component_name(&self) -> &str {
    &self.component.name
  }
}

impl std::fmt::Display for Spec {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", self.component.name, self.name)
  }
}

pub fn pluralize_specs(count: usize) -> String {
  if count == 1 {
    "1 spec".to_string()
  } else {
    format!("{} specs", count)
  }
}
