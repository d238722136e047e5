//! Module for abstracting the "search" functionality to the [`scholar`] database.

use super::*;

/// Options for [`Commands::Search`].
#[derive(Args, Clone)]
pub struct SearchOptions {
  /// Text matched case-insensitively against title, abstract, keywords, authors and venue
  pub query: String,

  /// Only search this user's publications
  #[arg(long, short)]
  pub user: Option<i64>,

  /// Show detailed publication information
  #[arg(long)]
  pub detailed: bool,

  /// Search filters
  #[command(flatten)]
  pub filter: SearchFilter,
}

/// Filter options for publication searches
#[derive(Args, Clone)]
pub struct SearchFilter {
  /// Filter by author name
  #[arg(long)]
  pub author: Option<String>,

  /// Filter by publication year
  #[arg(long)]
  pub year: Option<i32>,

  /// Filter by research area
  #[arg(long)]
  pub area: Option<String>,
}

/// Function for the [`Commands::Search`] in the CLI.
pub async fn search<I: UserInteraction>(
  scholar: &mut Scholar,
  interaction: &I,
  search_options: SearchOptions,
) -> Result<()> {
  let SearchOptions { query, user, detailed, filter } = search_options;

  let text = Query::text(&query);
  let text = match user {
    Some(user_id) => text.for_user(user_id),
    None => text,
  };
  let mut publications = text.execute(&mut scholar.database).await?;

  if let Some(author) = &filter.author {
    let author_publications = Query::by_author(author).execute(&mut scholar.database).await?;
    publications.retain(|p| author_publications.contains(p));
  }

  if let Some(year) = filter.year {
    publications.retain(|p| p.year == year);
  }

  if let Some(area) = &filter.area {
    publications
      .retain(|p| p.research_area.as_deref().is_some_and(|a| a.eq_ignore_ascii_case(area)));
  }

  interaction.reply(ResponseContent::Info(&format!("Searching for: {query}")))?;

  if publications.is_empty() {
    interaction.reply(ResponseContent::Info("No publications found matching all criteria"))
  } else if detailed {
    for publication in &publications {
      interaction.reply(ResponseContent::Publication(publication))?;
    }
    Ok(())
  } else {
    interaction.reply(ResponseContent::Publications(&publications))
  }
}
