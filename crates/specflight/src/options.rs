use crate::{
  compile_whitelist, BranchMatch, Error, OnlyFilter, Result, DEFAULT_ENVIRONMENT_WHITELIST,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

fn default_environment_whitelist() -> Vec<String> {
  DEFAULT_ENVIRONMENT_WHITELIST
    .iter()
    .map(|pattern| pattern.to_string())
    .collect()
}

/// Options of a verification run, as given on the command line or in a
/// YAML config file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Options {
  /// `ComponentPattern:StoryPattern`
  pub only: Option<String>,
  #[serde(default)]
  pub list: bool,
  pub patch_base_ref: Option<String>,
  pub patch_head_ref: Option<String>,
  #[serde(default)]
  pub preserve_missing_specs: bool,
  pub auto_accept_changes: Option<BranchMatch>,
  pub exit_once_uploaded: Option<BranchMatch>,
  /// Regexes over variable names that may be forwarded to the service.
  #[serde(default = "default_environment_whitelist")]
  pub environment_whitelist: Vec<String>,
  #[serde(default)]
  pub isolator_url: String,
  pub cached_url: Option<String>,
}

impl Default for Options {
  fn default() -> Self {
    Options {
      only: None,
      list: false,
      patch_base_ref: None,
      patch_head_ref: None,
      preserve_missing_specs: false,
      auto_accept_changes: None,
      exit_once_uploaded: None,
      environment_whitelist: default_environment_whitelist(),
      isolator_url: String::new(),
      cached_url: None,
    }
  }
}

impl Options {
  fn validate(options: &Options) -> Result<()> {
    if let Some(only) = &options.only {
      OnlyFilter::parse(only)?;
    }

    if options.patch_base_ref.is_some() != options.patch_head_ref.is_some() {
      return Err(Error::invalid_options(
        "patch-base-ref and patch-head-ref must be given together",
      ));
    }

    options.whitelist()?;

    Ok(())
  }

  pub fn whitelist(&self) -> Result<Vec<Regex>> {
    compile_whitelist(&self.environment_whitelist)
  }

  pub fn only_filter(&self) -> Option<Result<OnlyFilter>> {
    self.only.as_deref().map(OnlyFilter::parse)
  }
}

impl TryFrom<&str> for Options {
  type Error = Error;

  fn try_from(value: &str) -> Result<Self> {
    let options = serde_yaml::from_str(value)
      .map_err(|e| Error::invalid_options(format!("Failed to parse options: {}", e)))?;

    Self::validate(&options)?;

    Ok(options)
  }
}

impl TryFrom<String> for Options {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> {
    Self::try_from(value.as_str())
  }
}
