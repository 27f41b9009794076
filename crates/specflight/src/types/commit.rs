use serde::{Deserialize, Serialize};

/// Repository state as read by the local git reader.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitInfo {
  /// Version of the local git binary. Never sent to the service.
  pub version: Option<String>,
  pub commit: String,
  pub committed_at: i64,
  pub committer_email: Option<String>,
  pub committer_name: Option<String>,
  pub branch: String,
  pub slug: Option<String>,
  pub from_ci: bool,
  pub ci_service: Option<String>,
}

/// Commit metadata sent with a build.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommitInfo {
  pub commit: String,
  pub committed_at: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub committer_email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub committer_name: Option<String>,
  pub branch: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub slug: Option<String>,
  pub from_ci: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ci_service: Option<String>,
}

impl GitInfo {
  pub fn commit_info(&self) -> CommitInfo {
    let GitInfo {
      version: _,
      commit,
      committed_at,
      committer_email,
      committer_name,
      branch,
      slug,
      from_ci,
      ci_service,
    } = self.clone();

    CommitInfo {
      commit,
      committed_at,
      committer_email,
      committer_name,
      branch,
      slug,
      from_ci,
      ci_service,
    }
  }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
  pub name: String,
  pub package_name: Option<String>,
}

/// Component workshop tooling the specs were built with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StorybookInfo {
  pub version: Option<String>,
  pub view_layer: Option<String>,
  #[serde(default)]
  pub addons: Vec<Addon>,
}
