//! Terminal interaction: confirmations, prompts and styled replies.

use console::Term;
use dialoguer::{Confirm, Input};

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Prefix for a list entry
pub static ITEM_PREFIX: &str = "├─";
/// Prefix for the last list entry
pub static LAST_ITEM_PREFIX: &str = "└─";
/// Continuation line under a list entry
pub static CONTINUE_PREFIX: &str = "│  ";

/// What a command reports back to the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A single publication, shown in full
  Publication(&'a Publication),
  /// Several publications, shown as a compact list
  Publications(&'a [Publication]),
  /// A completed action
  Success(&'a str),
  /// A failure that did not abort the command
  Error(ScholardError),
  /// Anything else worth telling
  Info(&'a str),
}

/// The ways a command talks to its user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Asks for a line of text.
  fn prompt(&self, message: &str) -> Result<String>;
  /// Shows a result.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interaction over the process's terminal.
#[derive(Debug, Clone, Copy)]
pub struct Terminal {
  /// Answer every confirmation with yes and every prompt with an empty line
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal interaction.
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{}{message}", style(PROMPT_PREFIX).cyan()))
        .default(false)
        .wait_for_newline(true)
        .interact()?,
    )
  }

  fn prompt(&self, message: &str) -> Result<String> {
    if self.accept_defaults {
      return Ok(String::new());
    }
    Ok(
      Input::<String>::new()
        .with_prompt(format!("{}{message}", style(PROMPT_PREFIX).cyan()))
        .allow_empty(true)
        .interact_text()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    let term = Term::stdout();
    match content {
      ResponseContent::Publication(publication) => {
        for line in publication_details(publication) {
          term.write_line(&line)?;
        }
      },
      ResponseContent::Publications(publications) => {
        term.write_line(&format!(
          "{} Found {} publications",
          style(SUCCESS_PREFIX).green(),
          style(publications.len()).yellow()
        ))?;
        for (i, publication) in publications.iter().enumerate() {
          let prefix = if i + 1 == publications.len() { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
          term.write_line(&format!(
            "{} {} {}",
            style(prefix).dim(),
            style(format!("[{}]", publication.id.unwrap_or_default())).dim(),
            style(&publication.title).white().bold()
          ))?;
          term.write_line(&format!(
            "{}   {}, {} {}",
            style(CONTINUE_PREFIX).dim(),
            publication.venue,
            publication.year,
            style(&publication.publication_type).cyan()
          ))?;
        }
      },
      ResponseContent::Success(message) =>
        term.write_line(&format!("{} {message}", style(SUCCESS_PREFIX).green()))?,
      ResponseContent::Error(error) =>
        term.write_line(&format!("{} {}", style(WARNING_PREFIX).yellow(), style(error).red()))?,
      ResponseContent::Info(message) =>
        term.write_line(&format!("{} {message}", style(INFO_PREFIX).cyan()))?,
    }
    Ok(())
  }
}

/// Lines describing every set field of a publication.
fn publication_details(publication: &Publication) -> Vec<String> {
  let field = |name: &str, value: &dyn std::fmt::Display| {
    format!("   {} {}", style(format!("{name}:")).green().bold(), value)
  };

  let mut lines = vec![format!("{} Publication details:", style(SUCCESS_PREFIX).green())];
  if let Some(id) = publication.id {
    lines.push(field("Id", &id));
  }
  lines.push(field("Title", &style(&publication.title).white()));
  lines.push(field("Type", &publication.publication_type));
  lines.push(field("Authors", &publication.author_list().join(", ")));
  lines.push(field("Venue", &publication.venue));
  lines.push(field("Year", &publication.year));
  if let Some(doi) = &publication.doi {
    lines.push(field("DOI", &style(doi).blue().underlined()));
  }
  if let Some(area) = &publication.research_area {
    lines.push(field("Research area", area));
  }
  if !publication.keywords.is_empty() {
    lines.push(field("Keywords", &publication.keyword_list().join(", ")));
  }
  if let Some(count) = publication.citation_count {
    lines.push(field("Citations", &count));
  }
  if let Some(url) = &publication.pdf_url {
    lines.push(field("PDF URL", &style(url).blue().underlined()));
  }
  if !publication.abstract_text.is_empty() {
    lines.push(field("Abstract", &publication.abstract_text));
  }
  lines
}
