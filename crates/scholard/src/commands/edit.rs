//! Module for the "edit" command.

use super::*;

/// Arguments for [`Commands::Edit`]. Only the given fields change.
#[derive(Args, Clone)]
pub struct EditArgs {
  /// Database id of the publication
  pub id: i64,

  /// New title
  #[arg(long)]
  pub title: Option<String>,

  /// New publication type
  #[arg(long = "type")]
  pub publication_type: Option<String>,

  /// New year
  #[arg(long)]
  pub year: Option<i32>,

  /// New comma separated author names
  #[arg(long)]
  pub authors: Option<String>,

  /// New venue
  #[arg(long)]
  pub venue: Option<String>,

  /// New DOI
  #[arg(long, conflicts_with = "clear_doi")]
  pub doi: Option<String>,

  /// Remove the DOI
  #[arg(long)]
  pub clear_doi: bool,

  /// New abstract
  #[arg(long = "abstract")]
  pub abstract_text: Option<String>,

  /// New comma separated keywords
  #[arg(long)]
  pub keywords: Option<String>,

  /// New PDF URL
  #[arg(long)]
  pub pdf_url: Option<String>,

  /// New citation count
  #[arg(long)]
  pub citations: Option<i64>,

  /// New research area
  #[arg(long, conflicts_with = "clear_area")]
  pub area: Option<String>,

  /// Remove the research area
  #[arg(long)]
  pub clear_area: bool,
}

impl From<EditArgs> for PublicationChanges {
  fn from(args: EditArgs) -> Self {
    PublicationChanges {
      title:            args.title,
      publication_type: args.publication_type,
      authors:          args.authors,
      venue:            args.venue,
      year:             args.year,
      doi:              if args.clear_doi { Some(None) } else { args.doi.map(Some) },
      abstract_text:    args.abstract_text,
      keywords:         args.keywords,
      pdf_url:          args.pdf_url.map(Some),
      citation_count:   args.citations.map(Some),
      research_area:    if args.clear_area { Some(None) } else { args.area.map(Some) },
    }
  }
}

/// Function for the [`Commands::Edit`] in the CLI.
pub async fn edit<I: UserInteraction>(
  scholar: &mut Scholar,
  interaction: &I,
  edit_args: EditArgs,
) -> Result<()> {
  let id = edit_args.id;
  let changes = PublicationChanges::from(edit_args);
  if changes.is_empty() {
    return interaction.reply(ResponseContent::Info("Nothing to change"));
  }

  let publication = Update::new(id, changes).execute(&mut scholar.database).await?;
  interaction.reply(ResponseContent::Publication(&publication))?;
  interaction.reply(ResponseContent::Success(&format!("Publication {id} updated")))
}
