//! Module for setting up a [`scholar`] catalogue

use super::*;

/// Options for [`Commands::Init`].
#[derive(Args, Clone)]
pub struct InitOptions {
  /// Address the HTTP server should listen on
  #[arg(long)]
  pub bind_address: Option<String>,
}

/// Function for the [`Commands::Init`] in the CLI.
///
/// Writes the configuration file and creates the database it points to.
pub async fn init<I: UserInteraction>(
  cli: &Cli,
  interaction: &I,
  init_options: InitOptions,
) -> Result<()> {
  let config_path = cli.config_path();

  if config_path.exists()
    && !interaction.confirm(&format!(
      "A configuration already exists at {}, do you want to overwrite it?",
      config_path.display()
    ))?
  {
    interaction.reply(ResponseContent::Info(
      "Keeping the existing configuration. Pass --config to create one elsewhere.",
    ))?;
    return Ok(());
  }

  let config = if let Some(path) = &cli.path {
    Config::default().with_database_path(path)
  } else if !interaction.confirm(&format!(
    "Would you like to use the default path {} for storing the publication database?",
    Database::default_path().display(),
  ))? {
    interaction
      .reply(ResponseContent::Info("Please pass in your intended database path using --path"))?;
    return Ok(());
  } else {
    Config::default()
  };

  let config = match init_options.bind_address {
    Some(address) => config.with_bind_address(address),
    None => config,
  };

  let scholar = Scholar::builder().with_path(&config_path).with_config(config).build().await?;
  interaction.reply(ResponseContent::Success(&format!(
    "Catalogue initialized successfully\nConfig path: {}\nDatabase path: {}",
    config_path.display(),
    scholar.config.database_path.display(),
  )))?;
  Ok(())
}
