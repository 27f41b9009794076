use crate::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
  Initial,
  Pending,
  Success,
  Error,
}

impl std::fmt::Display for TaskStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let status = match self {
      TaskStatus::Initial => "initial",
      TaskStatus::Pending => "pending",
      TaskStatus::Success => "success",
      TaskStatus::Error => "error",
    };

    write!(f, "{}", status)
  }
}

/// Named states of the verify task, in the order a run can visit them:
/// `Initial`, `Pending`, then optionally `Listing` and/or `RunOnly`, then
/// exactly one of `Success`, `Failed` or `InvalidOnly`.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskState {
  Initial,
  Pending,
  Listing,
  RunOnly {
    component_name: String,
    story_name: String,
  },
  Success {
    context: Box<Context>,
    /// Presentation keeps this line as the task's final output.
    persist: bool,
  },
  Failed {
    reason: String,
  },
  InvalidOnly {
    reason: String,
  },
}

impl TaskState {
  pub fn status(&self) -> TaskStatus {
    match self {
      TaskState::Initial => TaskStatus::Initial,
      TaskState::Pending | TaskState::Listing | TaskState::RunOnly { .. } => TaskStatus::Pending,
      TaskState::Success { .. } => TaskStatus::Success,
      TaskState::Failed { .. } | TaskState::InvalidOnly { .. } => TaskStatus::Error,
    }
  }

  pub fn is_terminal(&self) -> bool {
    matches!(
      self,
      TaskState::Success { .. } | TaskState::Failed { .. } | TaskState::InvalidOnly { .. }
    )
  }

  pub fn title(&self) -> String {
    match self {
      TaskState::Initial => "Verify your specs".to_string(),
      TaskState::Pending => "Verifying your specs".to_string(),
      TaskState::Listing => "Listing available specs".to_string(),
      TaskState::RunOnly {
        component_name,
        story_name,
      } => format!(
        "Running only specs matching {}:{}",
        component_name, story_name
      ),
      TaskState::Success { context, .. } => match &context.build {
        Some(_) if context.is_publish_only => "Published your specs".to_string(),
        Some(build) if context.is_onboarding => format!("Started initial build {}", build.number),
        Some(build) => format!("Started build {}", build.number),
        None => "Verified your specs".to_string(),
      },
      TaskState::Failed { .. } => "Failed to verify your specs".to_string(),
      TaskState::InvalidOnly { .. } => "Invalid --only value".to_string(),
    }
  }

  pub fn output(&self) -> Option<String> {
    match self {
      TaskState::Pending => Some("This may take a few minutes".to_string()),
      TaskState::Success { context, .. } => {
        let build = context.build.as_ref()?;

        if context.is_onboarding {
          if let Some(setup_url) = &build.app.setup_url {
            return Some(format!("Continue setup at {}", setup_url));
          }
        }

        Some(format!("View build details at {}", build.web_url))
      }
      TaskState::Failed { reason } | TaskState::InvalidOnly { reason } => Some(reason.clone()),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Build;

  fn success(context: Context) -> TaskState {
    TaskState::Success {
      context: Box::new(context),
      persist: true,
    }
  }

  #[test]
  fn test_status() {
    assert_eq!(TaskState::Initial.status(), TaskStatus::Initial);
    assert_eq!(TaskState::Pending.status(), TaskStatus::Pending);
    assert_eq!(TaskState::Listing.status(), TaskStatus::Pending);
    assert_eq!(
      TaskState::Failed {
        reason: "boom".to_string()
      }
      .status(),
      TaskStatus::Error
    );
    assert_eq!(success(Context::default()).status(), TaskStatus::Success);
    assert_eq!(TaskStatus::Error.to_string(), "error");
  }

  #[test]
  fn test_is_terminal() {
    assert!(!TaskState::Initial.is_terminal());
    assert!(!TaskState::Pending.is_terminal());
    assert!(!TaskState::Listing.is_terminal());
    assert!(!TaskState::RunOnly {
      component_name: "Button".to_string(),
      story_name: "*".to_string(),
    }
    .is_terminal());
    assert!(success(Context::default()).is_terminal());
    assert!(TaskState::InvalidOnly {
      reason: "bad".to_string()
    }
    .is_terminal());
  }

  #[test]
  fn test_success_title() {
    let mut context = Context::default();
    context.build = Some(Build {
      number: 7,
      web_url: "https://example.test/7".to_string(),
      ..Default::default()
    });

    assert_eq!(success(context.clone()).title(), "Started build 7");
    assert_eq!(
      success(context.clone()).output(),
      Some("View build details at https://example.test/7".to_string())
    );

    context.is_publish_only = true;
    assert_eq!(success(context).title(), "Published your specs");
  }

  #[test]
  fn test_onboarding_output() {
    let mut context = Context::default();
    let mut build = Build {
      number: 1,
      ..Default::default()
    };
    build.app.setup_url = Some("https://example.test/setup".to_string());
    context.build = Some(build);
    context.is_onboarding = true;

    let state = success(context);
    assert_eq!(state.title(), "Started initial build 1");
    assert_eq!(
      state.output(),
      Some("Continue setup at https://example.test/setup".to_string())
    );
  }

  #[test]
  fn test_run_only_title() {
    let state = TaskState::RunOnly {
      component_name: "Button".to_string(),
      story_name: "*".to_string(),
    };

    assert_eq!(state.title(), "Running only specs matching Button:*");
    assert_eq!(state.output(), None);
  }
}
