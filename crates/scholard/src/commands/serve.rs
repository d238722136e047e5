use super::*;

/// Arguments for [`Commands::Serve`].
#[derive(Args, Clone)]
pub struct ServeArgs {
  /// Address to listen on, overriding the configured one
  #[arg(long)]
  pub bind: Option<String>,
}

/// Function for the [`Commands::Serve`] in the CLI.
pub async fn serve<I: UserInteraction>(
  scholar: Scholar,
  interaction: &I,
  serve_args: ServeArgs,
) -> Result<()> {
  let Scholar { config, database } = scholar;
  let config = match serve_args.bind {
    Some(address) => config.with_bind_address(address),
    None => config,
  };

  interaction.reply(ResponseContent::Info(&format!(
    "Serving publications on http://{}",
    config.bind_address
  )))?;
  ::scholar::server::serve(&config, database).await?;
  Ok(())
}
