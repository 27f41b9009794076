mod builder;

pub use builder::ContextBuilder;

use crate::{Build, GitInfo, LimitReason, Options, Spec, StorybookInfo};

/// Everything one verification run reads and produces. A run takes the
/// context by value and every stage hands it on to the next one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Context {
  pub options: Options,
  pub git: GitInfo,
  pub package_version: Option<String>,
  pub storybook: StorybookInfo,
  /// Full process environment, in enumeration order.
  pub process_environment: Vec<(String, String)>,

  /// Whitelisted environment, serialized as a JSON object.
  pub environment: Option<String>,
  pub runtime_errors: Vec<String>,
  pub runtime_warnings: Vec<String>,
  pub runtime_specs: Vec<Spec>,
  pub build: Option<Build>,
  /// `None` means the run continues normally.
  pub exit_code: Option<i32>,
  pub skip_snapshots: bool,
  pub is_publish_only: bool,
  pub is_onboarding: bool,
  /// Auto-accept decision computed locally from the current branch.
  pub auto_accept_changes: bool,
  pub limit_reason: Option<LimitReason>,
}

impl Context {
  pub fn builder() -> ContextBuilder {
    ContextBuilder::new()
  }

  pub fn branch(&self) -> &str {
    &self.git.branch
  }
}
