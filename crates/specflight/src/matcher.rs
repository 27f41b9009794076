/// Glob matching used for `--only` filters and branch options.
pub trait Matcher: Send + Sync {
  fn is_match(&self, candidate: &str, pattern: &str) -> bool;
}

/// Default matcher backed by the `glob` crate. Matching is case-sensitive and
/// a pattern without wildcards only matches itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobMatcher;

impl Matcher for GlobMatcher {
  fn is_match(&self, candidate: &str, pattern: &str) -> bool {
    match glob::Pattern::new(pattern) {
      Ok(pattern) => pattern.matches(candidate),
      Err(err) => {
        log::error!("Invalid glob pattern `{}`: {}", pattern, err);
        false
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn is_match_literal() {
    assert!(GlobMatcher.is_match("Button", "Button"));
    assert!(!GlobMatcher.is_match("Buttons", "Button"));
    assert!(!GlobMatcher.is_match("button", "Button"));
  }

  #[test]
  fn is_match_wildcards() {
    assert!(GlobMatcher.is_match("primary", "*"));
    assert!(GlobMatcher.is_match("Forms/Input", "Forms/*"));
    assert!(GlobMatcher.is_match("with icon", "with*"));
    assert!(GlobMatcher.is_match("Card", "C?rd"));
    assert!(!GlobMatcher.is_match("Input", "Button*"));
  }

  #[test]
  fn is_match_empty_pattern() {
    assert!(GlobMatcher.is_match("", ""));
    assert!(!GlobMatcher.is_match("primary", ""));
    assert!(GlobMatcher.is_match("", "*"));
  }

  #[test]
  fn is_match_branches() {
    assert!(GlobMatcher.is_match("feature/branch", "feature/*"));
    assert!(!GlobMatcher.is_match("feature", "feature/*"));
    assert!(!GlobMatcher.is_match("feature-branch", "feature/*"));
  }

  #[test]
  fn test_invalid_glob_pattern() {
    // `**` must form a whole path component
    assert!(!GlobMatcher.is_match("a/b", "a**/b"));
  }
}
