//! Plain text summary, shared by the `pdf` and `word` formats.
//!
//! ```text
//! Publications Summary
//!
//! 2023
//! ----
//!
//! A
//! Authors: X
//! V1, 2023
//!
//! ```

use super::*;

/// Formats the groups as plain text.
///
/// Every group gets its key as a heading underlined with one dash per
/// character. Each publication is written as its title, an `Authors:` line, a
/// `venue, year` line and, when it has one, a `DOI:` line, followed by a blank
/// line.
pub fn format_summary_text(groups: &GroupedPublications<'_>) -> String {
  let mut text = format!("{SUMMARY_TITLE}\n\n");

  for group in groups {
    text.push_str(&format!("{}\n{}\n\n", group.key, "-".repeat(group.key.chars().count())));

    for publication in &group.publications {
      text.push_str(&format!("{}\n", publication.title));
      text.push_str(&format!("Authors: {}\n", publication.authors));
      text.push_str(&format!("{}, {}\n", publication.venue, publication.year));
      if let Some(doi) = &publication.doi {
        text.push_str(&format!("DOI: {doi}\n"));
      }
      text.push('\n');
    }
  }

  text
}
