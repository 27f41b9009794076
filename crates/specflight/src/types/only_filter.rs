use crate::{Error, Matcher, Result, Spec};
use regex::Regex;

const ONLY_PATTERN: &str = r"^(.*):([^:]*)$";

/// Parsed `--only` value: `componentPattern:storyPattern`.
#[derive(Debug, Clone, PartialEq)]
pub struct OnlyFilter {
  pub component: String,
  pub story: String,
}

impl OnlyFilter {
  /// Splits at the last `:`. The component half may itself contain `:` but
  /// no line break, the story half never contains `:`.
  pub fn parse(value: &str) -> Result<Self> {
    let pattern = Regex::new(ONLY_PATTERN)
      .map_err(|err| Error::internal_runtime_error(format!("Invalid only pattern: {}", err)))?;

    let captures = pattern.captures(value).ok_or_else(|| {
      Error::invalid_only(format!(
        "`{}` must be of the form `ComponentName:StoryName`",
        value
      ))
    })?;

    Ok(OnlyFilter {
      component: captures[1].to_string(),
      story: captures[2].to_string(),
    })
  }

  pub fn is_match(&self, spec: &Spec, matcher: &dyn Matcher) -> bool {
    matcher.is_match(spec.component_name(), &self.component)
      && matcher.is_match(&spec.name, &self.story)
  }
}

impl std::str::FromStr for OnlyFilter {
  type Err = Error;

  fn from_str(value: &str) -> Result<Self> {
    Self::parse(value)
  }
}

impl std::fmt::Display for OnlyFilter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{}", self.component, self.story)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::GlobMatcher;

  #[test]
  fn test_parse() {
    assert_eq!(
      OnlyFilter::parse("Button:primary").unwrap(),
      OnlyFilter {
        component: "Button".to_string(),
        story: "primary".to_string(),
      }
    );
  }

  #[test]
  fn test_parse_splits_at_last_colon() {
    let filter = OnlyFilter::parse("Forms:Input:disabled").unwrap();

    assert_eq!(filter.component, "Forms:Input");
    assert_eq!(filter.story, "disabled");
  }

  #[test]
  fn test_parse_empty_segments() {
    let filter = OnlyFilter::parse(":").unwrap();
    assert_eq!(filter.component, "");
    assert_eq!(filter.story, "");

    let filter = OnlyFilter::parse("Button:").unwrap();
    assert_eq!(filter.component, "Button");
    assert_eq!(filter.story, "");
  }

  #[test]
  fn test_parse_without_colon() {
    let err = OnlyFilter::parse("Button").unwrap_err();

    assert_eq!(
      err,
      Error::invalid_only("`Button` must be of the form `ComponentName:StoryName`")
    );
  }

  #[test]
  fn test_parse_rejects_newline() {
    let err = OnlyFilter::parse("Button\nInput:primary").unwrap_err();

    assert_eq!(
      err,
      Error::invalid_only("`Button\nInput:primary` must be of the form `ComponentName:StoryName`")
    );
  }

  #[test]
  fn test_parse_story_may_span_lines() {
    let filter = OnlyFilter::parse("Button:primary\nlarge").unwrap();

    assert_eq!(filter.component, "Button");
    assert_eq!(filter.story, "primary\nlarge");
  }

  #[test]
  fn test_from_str_and_display() {
    let filter: OnlyFilter = "Button:*".parse().unwrap();

    assert_eq!(filter.to_string(), "Button:*");
  }

  #[test]
  fn test_is_match_requires_both() {
    let matcher = GlobMatcher;
    let filter = OnlyFilter::parse("Button:primary").unwrap();

    assert!(filter.is_match(&Spec::new("Button", "primary"), &matcher));
    assert!(!filter.is_match(&Spec::new("Button", "secondary"), &matcher));
    assert!(!filter.is_match(&Spec::new("Input", "primary"), &matcher));
  }

  #[test]
  fn test_is_match_case_sensitive() {
    let filter = OnlyFilter::parse("button:*").unwrap();

    assert!(!filter.is_match(&Spec::new("Button", "primary"), &GlobMatcher));
  }
}
