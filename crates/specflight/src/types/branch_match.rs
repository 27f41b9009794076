use crate::Matcher;
use serde::{Deserialize, Serialize};

/// Branch selector used by `auto-accept-changes` and `exit-once-uploaded`.
/// `true` selects every branch, a string is a branch glob.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum BranchMatch {
  Enabled(bool),
  Pattern(String),
}

impl BranchMatch {
  pub fn is_match(&self, branch: &str, matcher: &dyn Matcher) -> bool {
    match self {
      BranchMatch::Enabled(enabled) => *enabled,
      BranchMatch::Pattern(pattern) => matcher.is_match(branch, pattern),
    }
  }
}

impl From<bool> for BranchMatch {
  fn from(enabled: bool) -> Self {
    BranchMatch::Enabled(enabled)
  }
}

impl From<&str> for BranchMatch {
  fn from(pattern: &str) -> Self {
    BranchMatch::Pattern(pattern.to_string())
  }
}

/// An unset option never matches.
pub fn matches_branch(option: Option<&BranchMatch>, branch: &str, matcher: &dyn Matcher) -> bool {
  option.map_or(false, |option| option.is_match(branch, matcher))
}
