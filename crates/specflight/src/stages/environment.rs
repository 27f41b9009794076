use crate::{filter_environment, Context, Result};

pub fn run(mut ctx: Context) -> Result<Context> {
  let whitelist = ctx.options.whitelist()?;

  let environment = filter_environment(ctx.process_environment.iter().cloned(), &whitelist)?;
  ctx.environment = Some(environment);

  Ok(ctx)
}
