use super::*;

/// Function for the [`Commands::Get`] in the CLI.
pub async fn get<I: UserInteraction>(scholar: &mut Scholar, interaction: &I, id: i64) -> Result<()> {
  trace!("Fetching publication {id}");
  match Query::by_id(id).execute(&mut scholar.database).await?.pop() {
    Some(publication) => {
      debug!("Found publication: {:?}", publication);
      interaction.reply(ResponseContent::Publication(&publication))
    },
    None => Err(ScholarError::NotFound.into()),
  }
}
