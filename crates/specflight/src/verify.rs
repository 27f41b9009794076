use crate::{
  stages, BuildClient, Context, Error, GlobMatcher, Matcher, Plugin, PluginDriver, Result,
  SharedPluginDriver, SpecDiscovery, TaskState,
};
use std::sync::Arc;

/// Drives one verification run: environment, discovery, then submission.
pub struct Verify {
  discovery: Arc<dyn SpecDiscovery>,
  client: Arc<dyn BuildClient>,
  matcher: Arc<dyn Matcher>,
  plugins: SharedPluginDriver,
}

impl Verify {
  pub fn builder() -> VerifyBuilder {
    VerifyBuilder::new()
  }

  /// Runs every stage in order. The first failing stage ends the run: the
  /// matching terminal state is reported to plugins and the error is
  /// returned as is.
  pub async fn run(&self, ctx: Context) -> Result<Context> {
    self.plugins.on_state_change(TaskState::Initial);
    self.plugins.on_state_change(TaskState::Pending);

    match self.run_stages(ctx).await {
      Ok(ctx) => {
        log::debug!(
          "Verification finished with exit code {:?}, skip snapshots: {}",
          ctx.exit_code,
          ctx.skip_snapshots
        );

        Ok(ctx)
      }
      Err(err) => {
        log::error!("Verification failed: {}", err);

        let reason = err.to_string();
        let state = match err {
          Error::InvalidOnly(_) => TaskState::InvalidOnly { reason },
          _ => TaskState::Failed { reason },
        };
        self.plugins.on_state_change(state);

        Err(err)
      }
    }
  }

  async fn run_stages(&self, ctx: Context) -> Result<Context> {
    let ctx = stages::environment::run(ctx)?;

    let ctx = stages::discovery::run(
      ctx,
      self.discovery.as_ref(),
      self.matcher.as_ref(),
      &self.plugins,
    )
    .await?;

    stages::submit::run(
      ctx,
      self.client.as_ref(),
      self.matcher.as_ref(),
      &self.plugins,
    )
    .await
  }
}

pub struct VerifyBuilder {
  discovery: Option<Arc<dyn SpecDiscovery>>,
  client: Option<Arc<dyn BuildClient>>,
  matcher: Option<Arc<dyn Matcher>>,
  plugins: Vec<Box<dyn Plugin>>,
}

impl VerifyBuilder {
  pub fn new() -> Self {
    VerifyBuilder {
      discovery: None,
      client: None,
      matcher: None,
      plugins: vec![],
    }
  }

  pub fn discovery<T: SpecDiscovery + 'static>(mut self, discovery: T) -> Self {
    self.discovery = Some(Arc::new(discovery));
    self
  }

  pub fn client<T: BuildClient + 'static>(mut self, client: T) -> Self {
    self.client = Some(Arc::new(client));
    self
  }

  pub fn matcher<T: Matcher + 'static>(mut self, matcher: T) -> Self {
    self.matcher = Some(Arc::new(matcher));
    self
  }

  pub fn plugin<T: Plugin + 'static>(mut self, plugin: T) -> Self {
    self.plugins.push(Box::new(plugin));
    self
  }

  pub fn build(self) -> Result<Verify> {
    let discovery = self.discovery.ok_or(Error::internal_runtime_error(
      "Spec discovery is not set in verify builder",
    ))?;

    let client = self.client.ok_or(Error::internal_runtime_error(
      "Build client is not set in verify builder",
    ))?;

    let matcher = self.matcher.unwrap_or_else(|| Arc::new(GlobMatcher));

    Ok(Verify {
      discovery,
      client,
      matcher,
      plugins: Arc::new(PluginDriver::new(self.plugins)),
    })
  }
}

impl Default for VerifyBuilder {
  fn default() -> Self {
    Self::new()
  }
}
