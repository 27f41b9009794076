use crate::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;

/// Variables forwarded to the build service unless configured otherwise.
pub const DEFAULT_ENVIRONMENT_WHITELIST: [&str; 2] = ["^GERRIT", "^TRAVIS"];

pub type EnvironmentVariables = IndexMap<String, String>;

pub fn compile_whitelist<T: AsRef<str>>(patterns: &[T]) -> Result<Vec<Regex>> {
  patterns
    .iter()
    .map(|pattern| {
      Regex::new(pattern.as_ref()).map_err(|err| {
        Error::invalid_options(format!(
          "Invalid environment whitelist pattern `{}`: {}",
          pattern.as_ref(),
          err
        ))
      })
    })
    .collect()
}

/// Keeps the variables whose name matches at least one whitelist pattern.
/// The result preserves the enumeration order of `environment`.
pub fn whitelisted_environment<I, K, V>(
  environment: I,
  whitelist: &[Regex],
) -> EnvironmentVariables
where
  I: IntoIterator<Item = (K, V)>,
  K: Into<String>,
  V: Into<String>,
{
  environment
    .into_iter()
    .map(|(key, value)| (key.into(), value.into()))
    .filter(|(key, _)| whitelist.iter().any(|pattern| pattern.is_match(key)))
    .collect()
}

pub fn filter_environment<I, K, V>(environment: I, whitelist: &[Regex]) -> Result<String>
where
  I: IntoIterator<Item = (K, V)>,
  K: Into<String>,
  V: Into<String>,
{
  let variables = whitelisted_environment(environment, whitelist);

  let payload = serde_json::to_string(&variables)
    .map_err(|err| Error::serialization_error(format!("environment: {}", err)))?;

  log::debug!("Got environment {}", payload);

  Ok(payload)
}
