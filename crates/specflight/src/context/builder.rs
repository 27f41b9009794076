use crate::{Context, Error, GitInfo, Options, Result, StorybookInfo};

pub struct ContextBuilder {
  options: Option<Options>,
  git: Option<GitInfo>,
  package_version: Option<String>,
  storybook: Option<StorybookInfo>,
  process_environment: Option<Vec<(String, String)>>,
}

impl ContextBuilder {
  pub fn new() -> Self {
    ContextBuilder {
      options: None,
      git: None,
      package_version: None,
      storybook: None,
      process_environment: None,
    }
  }

  pub fn options(mut self, options: Options) -> Self {
    self.options = Some(options);
    self
  }

  pub fn git(mut self, git: GitInfo) -> Self {
    self.git = Some(git);
    self
  }

  pub fn package_version(mut self, version: impl Into<String>) -> Self {
    self.package_version = Some(version.into());
    self
  }

  pub fn storybook(mut self, storybook: StorybookInfo) -> Self {
    self.storybook = Some(storybook);
    self
  }

  pub fn process_environment<I, K, V>(mut self, environment: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    self.process_environment = Some(
      environment
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect(),
    );
    self
  }

  pub fn build(self) -> Result<Context> {
    let git = self.git.ok_or(Error::invalid_options(
      "Git info is not set in context builder",
    ))?;

    // Falls back to the environment of the current process
    let process_environment = self
      .process_environment
      .unwrap_or_else(|| std::env::vars().collect());

    let ctx = Context {
      options: self.options.unwrap_or_default(),
      git,
      package_version: self.package_version,
      storybook: self.storybook.unwrap_or_default(),
      process_environment,
      ..Default::default()
    };

    Ok(ctx)
  }
}

impl Default for ContextBuilder {
  fn default() -> Self {
    Self::new()
  }
}
