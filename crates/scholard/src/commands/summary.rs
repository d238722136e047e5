//! Module for the "summary" command, exporting a user's publications.

use scholar::export::generate_summary;

use super::*;

/// Arguments for [`Commands::Summary`].
#[derive(Args, Clone)]
pub struct SummaryArgs {
  /// Id of the user whose publications are summarized
  #[arg(long, short)]
  pub user: i64,

  /// Output format: pdf, word or web
  #[arg(long, short)]
  pub format: String,

  /// Grouping: year, type or area; anything else puts everything in one group
  #[arg(long, default_value = "year")]
  pub filter: String,

  /// Directory to write the summary file into
  #[arg(long, short)]
  pub output: Option<PathBuf>,
}

/// Function for the [`Commands::Summary`] in the CLI.
pub async fn summary<I: UserInteraction>(
  scholar: &mut Scholar,
  interaction: &I,
  summary_args: SummaryArgs,
) -> Result<()> {
  let SummaryArgs { user, format, filter, output } = summary_args;

  let publications = Query::by_user(user).execute(&mut scholar.database).await?;
  let artifact = generate_summary(&publications, &format, &filter)?;

  let directory = output.unwrap_or_else(|| PathBuf::from("."));
  std::fs::create_dir_all(&directory)?;
  let path = directory.join(artifact.filename());
  std::fs::write(&path, &artifact.content)?;

  interaction.reply(ResponseContent::Success(&format!(
    "Wrote summary of {} publications to {} ({})",
    publications.len(),
    path.display(),
    artifact.content_type
  )))
}
