//! Module for abstracting the "remove" functionality to the [`scholar`] database.

use super::*;

/// Arguments for [`Commands::Remove`].
#[derive(Args, Clone)]
pub struct RemoveArgs {
  /// Database id of the publication
  pub id: i64,

  /// Show what would be removed without removing it
  #[arg(long)]
  pub dry_run: bool,
}

/// Function for the [`Commands::Remove`] in the CLI.
pub async fn remove<I: UserInteraction>(
  scholar: &mut Scholar,
  interaction: &I,
  remove_args: RemoveArgs,
) -> Result<()> {
  let RemoveArgs { id, dry_run } = remove_args;

  let publications = Remove::by_id(id).dry_run().execute(&mut scholar.database).await?;
  let Some(publication) = publications.first() else {
    return Err(ScholarError::NotFound.into());
  };
  interaction.reply(ResponseContent::Publication(publication))?;

  if dry_run {
    return interaction.reply(ResponseContent::Info("Dry run, nothing was removed"));
  }
  if !interaction.confirm("Remove this publication?")? {
    return interaction.reply(ResponseContent::Info("Operation cancelled"));
  }

  Remove::by_id(id).execute(&mut scholar.database).await?;
  interaction.reply(ResponseContent::Success(&format!("Publication {id} removed")))
}
