use crate::{
  exit_code, matches_branch, Account, Build, Context, Error, Matcher, PluginDriver, Result,
  TaskState,
};
use serde::{Deserialize, Serialize};

/// Why the service limited a build. A limited build still exists, the reason
/// only decides the exit code.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LimitReason {
  Quota,
  Payment,
  /// Limited for a reason this client does not know about yet.
  Unknown,
}

impl LimitReason {
  pub fn classify(build: &Build) -> Option<Self> {
    if !build.was_limited {
      return None;
    }

    let account = &build.app.account;
    let reason = if account.exceeded_threshold {
      LimitReason::Quota
    } else if account.payment_required {
      LimitReason::Payment
    } else {
      LimitReason::Unknown
    };

    Some(reason)
  }

  pub fn exit_code(&self) -> i32 {
    match self {
      LimitReason::Quota => exit_code::ACCOUNT_QUOTA_REACHED,
      LimitReason::Payment => exit_code::ACCOUNT_PAYMENT_REQUIRED,
      LimitReason::Unknown => exit_code::BUILD_WAS_LIMITED,
    }
  }

  pub fn message(&self, account: &Account) -> String {
    let billing = account
      .billing_url
      .as_ref()
      .map(|url| format!(" Visit {} to manage your plan.", url))
      .unwrap_or_default();

    match self {
      LimitReason::Quota => format!(
        "Your account has reached its snapshot quota, snapshots for this build were limited.{}",
        billing
      ),
      LimitReason::Payment => format!(
        "Your account requires a payment, snapshots for this build were limited.{}",
        billing
      ),
      LimitReason::Unknown => format!("This build was limited by the service.{}", billing),
    }
  }
}

fn classify_limit(mut ctx: Context, build: &Build) -> Context {
  if let Some(reason) = LimitReason::classify(build) {
    log::warn!("{}", reason.message(&build.app.account));
    ctx.exit_code = Some(reason.exit_code());
    ctx.limit_reason = Some(reason);
  }

  ctx
}

fn classify_mode(mut ctx: Context, build: &Build) -> Context {
  ctx.is_publish_only = build.is_publish_only();
  // First build ever, or the service auto-accepted where we would not have
  ctx.is_onboarding =
    build.is_first() || (build.auto_accept_changes && !ctx.auto_accept_changes);

  log::debug!(
    "Build {} publish only: {}, onboarding: {}",
    build.number,
    ctx.is_publish_only,
    ctx.is_onboarding
  );

  ctx
}

fn decide_early_exit(mut ctx: Context, matcher: &dyn Matcher) -> Context {
  let exit_once_uploaded = matches_branch(
    ctx.options.exit_once_uploaded.as_ref(),
    ctx.branch(),
    matcher,
  );

  if ctx.is_publish_only || exit_once_uploaded {
    log::info!("Build uploaded, skipping snapshot capture");
    ctx.exit_code = Some(exit_code::OK);
    ctx.skip_snapshots = true;
  }

  ctx
}

/// Interprets the build stored on the context. Fails when no build was
/// submitted yet.
pub fn apply(ctx: Context, matcher: &dyn Matcher, plugins: &PluginDriver) -> Result<Context> {
  let build = ctx
    .build
    .clone()
    .ok_or_else(|| Error::internal_runtime_error("No build to apply policy to"))?;

  let ctx = classify_limit(ctx, &build);
  let ctx = classify_mode(ctx, &build);

  plugins.on_state_change(TaskState::Success {
    context: Box::new(ctx.clone()),
    persist: true,
  });

  Ok(decide_early_exit(ctx, matcher))
}
