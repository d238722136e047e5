//! Module for abstracting the "clean" functionality to the [`scholar`] database.

use super::*;

/// Function for the [`Commands::Clean`] in the CLI.
///
/// Deletes the database file and its SQLite side files after confirmation.
pub async fn clean<I: UserInteraction>(cli: &Cli, interaction: &I) -> Result<()> {
  let path = match &cli.path {
    Some(path) => path.clone(),
    None => {
      let config_path = cli.config_path();
      let config =
        if config_path.exists() { Config::load(&config_path)? } else { Config::default() };
      interaction.reply(ResponseContent::Info(&format!(
        "Using configured database path: {}",
        style(config.database_path.display()).yellow()
      )))?;
      config.database_path
    },
  };

  if !path.exists() {
    return interaction.reply(ResponseContent::Info(&format!(
      "No database found at: {}",
      style(path.display()).yellow()
    )));
  }

  interaction.reply(ResponseContent::Info(&format!(
    "Database found at: {}",
    style(path.display()).yellow()
  )))?;

  if !interaction.confirm("Are you sure you want to delete this database?")? {
    return interaction.reply(ResponseContent::Info("Operation cancelled"));
  }
  if !cli.accept_defaults
    && interaction.prompt(&format!("Type {} to confirm deletion", style("DELETE").red().bold()))?
      != "DELETE"
  {
    return interaction.reply(ResponseContent::Info("Operation cancelled"));
  }

  std::fs::remove_file(&path)?;

  // SQLite journal and WAL files
  let side_files = glob::glob(&format!("{}-*", glob::Pattern::escape(&path.display().to_string())))?;
  for file in side_files.flatten() {
    std::fs::remove_file(file)?;
  }

  interaction.reply(ResponseContent::Success("Database files cleaned"))
}
