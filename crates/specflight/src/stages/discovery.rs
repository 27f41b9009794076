use crate::{
  pluralize_specs, Context, Error, Matcher, OnlyFilter, PluginDriver, Result, RuntimeConsole,
  Spec, SpecDiscovery, TaskState,
};

fn list_specs(specs: &[Spec], plugins: &PluginDriver) {
  plugins.on_state_change(TaskState::Listing);

  log::info!("Listing available specs:");
  for spec in specs {
    log::info!("  {}", spec);
    plugins.on_spec_listed(spec.clone());
  }
}

fn filter_specs(
  specs: Vec<Spec>,
  filter: &OnlyFilter,
  matcher: &dyn Matcher,
  plugins: &PluginDriver,
) -> Vec<Spec> {
  plugins.on_state_change(TaskState::RunOnly {
    component_name: filter.component.clone(),
    story_name: filter.story.clone(),
  });

  specs
    .into_iter()
    .filter(|spec| filter.is_match(spec, matcher))
    .collect()
}

pub async fn run(
  mut ctx: Context,
  discovery: &dyn SpecDiscovery,
  matcher: &dyn Matcher,
  plugins: &PluginDriver,
) -> Result<Context> {
  // Validated before the sandbox starts
  let only = ctx.options.only_filter().transpose()?;

  let console = RuntimeConsole::new();
  let specs = discovery.discover(console.clone()).await?;

  ctx.runtime_errors = console.errors();
  ctx.runtime_warnings = console.warnings();

  for error in &ctx.runtime_errors {
    log::warn!("Runtime error while discovering specs: {}", error);
  }
  for warning in &ctx.runtime_warnings {
    log::warn!("Runtime warning while discovering specs: {}", warning);
  }

  if ctx.options.list {
    list_specs(&specs, plugins);
  }

  let specs = match &only {
    Some(filter) => filter_specs(specs, filter, matcher, plugins),
    None => specs,
  };

  if specs.is_empty() {
    let message = match &only {
      Some(filter) => format!("No specs match `{}`", filter),
      None => "No specs were found".to_string(),
    };

    return Err(Error::no_matching_specs(message));
  }

  log::debug!("Found {}", pluralize_specs(specs.len()));

  ctx.runtime_specs = specs;

  Ok(ctx)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{GlobMatcher, Options};

  struct StaticDiscovery(Vec<Spec>);

  #[async_trait::async_trait]
  impl SpecDiscovery for StaticDiscovery {
    async fn discover(&self, console: RuntimeConsole) -> Result<Vec<Spec>> {
      console.error("Warning: Each child in a list should have a unique key");
      console.warn("Button: size is deprecated");

      Ok(self.0.clone())
    }
  }

  fn context(only: Option<&str>) -> Context {
    Context {
      options: Options {
        only: only.map(|only| only.to_string()),
        ..Default::default()
      },
      ..Default::default()
    }
  }

  async fn discover(only: Option<&str>, specs: Vec<Spec>) -> Result<Context> {
    run(
      context(only),
      &StaticDiscovery(specs),
      &GlobMatcher,
      &PluginDriver::new(vec![]),
    )
    .await
  }

  #[specflight_test::test]
  async fn test_collects_console_lines() {
    let ctx = discover(None, vec![Spec::new("Button", "primary")])
      .await
      .unwrap();

    assert_eq!(
      ctx.runtime_errors,
      vec!["Warning: Each child in a list should have a unique key"]
    );
    assert_eq!(ctx.runtime_warnings, vec!["Button: size is deprecated"]);
  }

  #[specflight_test::test]
  async fn test_literal_filter() {
    let ctx = discover(
      Some("Button:primary"),
      vec![
        Spec::new("Button", "primary"),
        Spec::new("Button", "primary large"),
        Spec::new("Buttons", "primary"),
      ],
    )
    .await
    .unwrap();

    assert_eq!(ctx.runtime_specs, vec![Spec::new("Button", "primary")]);
  }

  #[specflight_test::test]
  async fn test_empty_story_pattern() {
    let err = discover(Some("Button:"), vec![Spec::new("Button", "primary")])
      .await
      .unwrap_err();

    assert_eq!(err, Error::no_matching_specs("No specs match `Button:`"));
  }

  #[specflight_test::test]
  async fn test_empty_story_pattern_matches_empty_name() {
    let ctx = discover(Some("Button:"), vec![Spec::new("Button", "")])
      .await
      .unwrap();

    assert_eq!(ctx.runtime_specs.len(), 1);
  }

  #[specflight_test::test]
  async fn test_unfiltered_empty_discovery() {
    let err = discover(None, vec![]).await.unwrap_err();

    assert_eq!(err, Error::no_matching_specs("No specs were found"));
  }
}
