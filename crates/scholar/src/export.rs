//! Producing a downloadable publication summary.
//!
//! This is the entry point of the summary pipeline: it validates the requested
//! [`Format`], groups the publications with [`summary::group`](crate::summary::group)
//! and renders them into a [`SummaryArtifact`] ready to be sent as a file
//! download. Nothing here performs I/O; delivering the bytes is up to the
//! caller.
//!
//! # Examples
//!
//! ```
//! use scholar::{export::generate_summary, publication::Publication};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let publications = vec![
//!   Publication::new(1, "A", "Journal", 2023).with_authors("X").with_venue("V1"),
//!   Publication::new(1, "B", "Journal", 2021).with_authors("Y").with_doi("10.1/xyz"),
//! ];
//!
//! let artifact = generate_summary(&publications, "web", "year")?;
//! assert_eq!(artifact.content_type, "text/html");
//! assert_eq!(artifact.filename(), "publications_summary.html");
//! # Ok(())
//! # }
//! ```

use super::*;
use crate::{
  render::{Format, Renderer},
  summary::{group, GroupBy},
};

/// Base name of every exported summary file.
pub const SUMMARY_FILE_STEM: &str = "publications_summary";

/// A rendered summary together with the metadata needed to deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryArtifact {
  /// Document bytes
  pub content:      Vec<u8>,
  /// MIME type of `content`
  pub content_type: &'static str,
  /// File extension, without the dot
  pub extension:    &'static str,
}

impl SummaryArtifact {
  /// File name the summary should be saved under.
  pub fn filename(&self) -> String { format!("{SUMMARY_FILE_STEM}.{}", self.extension) }

  /// Value of the `Content-Disposition` header for downloading the summary.
  pub fn content_disposition(&self) -> String {
    format!("attachment; filename=\"{}\"", self.filename())
  }
}

/// A summary request with its format and grouping already decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
  /// Output document format
  pub format:   Format,
  /// Grouping dimension
  pub group_by: GroupBy,
}

impl Summary {
  /// Creates a summary request.
  pub fn new(format: Format, group_by: GroupBy) -> Self { Self { format, group_by } }

  /// Groups and renders `publications`.
  pub fn generate(&self, publications: &[Publication]) -> SummaryArtifact {
    let groups = group(publications, self.group_by);
    debug!(
      "Rendering {} publications in {} groups as {}",
      publications.len(),
      groups.len(),
      self.format
    );
    SummaryArtifact {
      content:      self.format.renderer().render(&groups),
      content_type: self.format.content_type(),
      extension:    self.format.extension(),
    }
  }
}

/// Produces the summary document for `publications`.
///
/// `format` is matched case-insensitively against `pdf`, `word` and `web`.
/// `filter` picks the grouping as described in [`GroupBy`]; unrecognized
/// filters put everything in one group.
///
/// # Errors
///
/// Returns [`ScholarError::UnsupportedFormat`] when `format` names none of the
/// known formats. No artifact is produced in that case.
pub fn generate_summary(
  publications: &[Publication],
  format: &str,
  filter: &str,
) -> Result<SummaryArtifact> {
  let format = format.parse::<Format>().inspect_err(|e| warn!("Rejected summary request: {e}"))?;
  Ok(Summary::new(format, GroupBy::from(filter)).generate(publications))
}
