use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Features {
  pub ui_tests: bool,
  pub ui_review: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
  pub exceeded_threshold: bool,
  pub payment_required: bool,
  pub billing_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Repository {
  pub provider: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct App {
  pub account: Account,
  pub repository: Option<Repository>,
  pub setup_url: Option<String>,
}

/// Build record returned by the remote service after submission. Fields the
/// service leaves out take their default value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Build {
  pub id: String,
  /// Position in the project's build sequence, `1` is the first build ever.
  pub number: u64,
  pub spec_count: u64,
  pub snapshot_count: u64,
  pub component_count: u64,
  pub web_url: String,
  pub features: Features,
  pub was_limited: bool,
  pub app: App,
  /// Whether the service decided to auto-accept changes on this build.
  pub auto_accept_changes: bool,
}

impl Build {
  pub fn is_first(&self) -> bool {
    self.number == 1
  }

  pub fn is_publish_only(&self) -> bool {
    !self.features.ui_review && !self.features.ui_tests
  }
}
