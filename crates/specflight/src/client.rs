use crate::{Addon, Build, CommitInfo, Result, Spec};
use serde::{Deserialize, Serialize};

/// Input of the create-build call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuildRequest {
  #[serde(flatten)]
  pub commit_info: CommitInfo,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub only: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub patch_base_ref: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub patch_head_ref: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub preserve_missing_specs: Option<bool>,
  pub auto_accept_changes: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cached_url: Option<String>,
  pub environment: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub package_version: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub storybook_version: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub view_layer: Option<String>,
  pub addons: Vec<Addon>,
  pub runtime_specs: Vec<Spec>,
}

/// # Build client
/// Transport to the remote build service. Implementations own
/// authentication and any network-level retry; errors are returned as they
/// are and end the run.
#[async_trait::async_trait]
pub trait BuildClient: Send + Sync {
  async fn create_build(&self, request: CreateBuildRequest, isolator_url: &str) -> Result<Build>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_serialize_request() {
    let request = CreateBuildRequest {
      commit_info: CommitInfo {
        commit: "abc123".to_string(),
        branch: "main".to_string(),
        ..Default::default()
      },
      only: Some("Button:*".to_string()),
      auto_accept_changes: true,
      environment: "{}".to_string(),
      package_version: Some("1.0.0".to_string()),
      runtime_specs: vec![Spec::new("Button", "primary")],
      ..Default::default()
    };

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["commit"], "abc123");
    assert_eq!(json["branch"], "main");
    assert_eq!(json["only"], "Button:*");
    assert_eq!(json["autoAcceptChanges"], true);
    assert_eq!(json["packageVersion"], "1.0.0");
    assert_eq!(json["runtimeSpecs"][0]["component"]["name"], "Button");
    assert!(json.get("patchBaseRef").is_none());
    assert!(json.get("preserveMissingSpecs").is_none());
  }
}
