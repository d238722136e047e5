//! Module for abstracting the "add" functionality to the [`scholar`] database.

use super::*;

/// Arguments that can be used for the [`Commands::Add`]
#[derive(Args, Clone)]
pub struct AddArgs {
  /// Id of the user owning the publication
  #[arg(long, short)]
  pub user: i64,

  /// Full title
  #[arg(long)]
  pub title: String,

  /// Kind of publication, e.g. "Journal" or "Conference"
  #[arg(long = "type")]
  pub publication_type: String,

  /// Four digit publication year
  #[arg(long)]
  pub year: i32,

  /// Comma separated author names
  #[arg(long, default_value = "")]
  pub authors: String,

  /// Journal, conference or publisher
  #[arg(long, default_value = "")]
  pub venue: String,

  /// DOI, e.g. "10.1145/1327452.1327492"
  #[arg(long)]
  pub doi: Option<String>,

  /// Abstract text
  #[arg(long = "abstract", default_value = "")]
  pub abstract_text: String,

  /// Comma separated keywords
  #[arg(long, default_value = "")]
  pub keywords: String,

  /// URL of the PDF
  #[arg(long)]
  pub pdf_url: Option<String>,

  /// Number of citations
  #[arg(long)]
  pub citations: Option<i64>,

  /// Research area
  #[arg(long)]
  pub area: Option<String>,
}

impl From<AddArgs> for NewPublication {
  fn from(args: AddArgs) -> Self {
    NewPublication {
      title:            args.title,
      publication_type: args.publication_type,
      authors:          args.authors,
      venue:            args.venue,
      year:             args.year,
      doi:              args.doi,
      abstract_text:    args.abstract_text,
      keywords:         args.keywords,
      pdf_url:          args.pdf_url,
      citation_count:   args.citations,
      research_area:    args.area,
    }
  }
}

/// Function for the [`Commands::Add`] in the CLI.
pub async fn add<I: UserInteraction>(
  scholar: &mut Scholar,
  interaction: &I,
  add_args: AddArgs,
) -> Result<()> {
  let user_id = add_args.user;
  let mut publication = NewPublication::from(add_args).into_publication(user_id);

  match Add::publication(&publication).execute(&mut scholar.database).await {
    Ok(id) => {
      publication.id = Some(id);
      interaction.reply(ResponseContent::Publication(&publication))?;
      interaction.reply(ResponseContent::Success(&format!("Publication added with id {id}")))
    },
    Err(ScholarError::DuplicatePublication(title)) => interaction.reply(ResponseContent::Info(
      &format!("\"{title}\" is already in the catalogue of user {user_id}"),
    )),
    Err(e) => Err(e.into()),
  }
}
