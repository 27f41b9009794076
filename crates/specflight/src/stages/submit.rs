use crate::{
  matches_branch, policy, BuildClient, Context, CreateBuildRequest, Matcher, PluginDriver, Result,
};

pub fn build_request(ctx: &Context) -> CreateBuildRequest {
  let options = &ctx.options;

  CreateBuildRequest {
    commit_info: ctx.git.commit_info(),
    only: options.only.clone(),
    patch_base_ref: options.patch_base_ref.clone(),
    patch_head_ref: options.patch_head_ref.clone(),
    preserve_missing_specs: options.preserve_missing_specs.then_some(true),
    auto_accept_changes: ctx.auto_accept_changes,
    cached_url: options.cached_url.clone(),
    environment: ctx.environment.clone().unwrap_or_else(|| "{}".to_string()),
    package_version: ctx.package_version.clone(),
    storybook_version: ctx.storybook.version.clone(),
    view_layer: ctx.storybook.view_layer.clone(),
    addons: ctx.storybook.addons.clone(),
    runtime_specs: ctx.runtime_specs.clone(),
  }
}

pub async fn run(
  mut ctx: Context,
  client: &dyn BuildClient,
  matcher: &dyn Matcher,
  plugins: &PluginDriver,
) -> Result<Context> {
  ctx.auto_accept_changes = matches_branch(
    ctx.options.auto_accept_changes.as_ref(),
    ctx.branch(),
    matcher,
  );

  let request = build_request(&ctx);

  log::debug!(
    "Creating build for commit {} on branch {}",
    request.commit_info.commit,
    request.commit_info.branch
  );

  let build = client
    .create_build(request, &ctx.options.isolator_url)
    .await?;

  log::info!("Created build {} ({})", build.number, build.id);

  ctx.build = Some(build);

  policy::apply(ctx, matcher, plugins)
}
