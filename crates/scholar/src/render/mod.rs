//! Rendering grouped publications into downloadable documents.
//!
//! Three [`Format`]s are offered. `web` produces a self-contained HTML page.
//! `pdf` and `word` both produce the plain text summary and only carry the PDF
//! and Word content types and extensions; no PDF or OOXML structure is
//! generated, so consumers must not expect a conformant binary file.
//!
//! # Examples
//!
//! ```
//! use scholar::{
//!   prelude::*,
//!   publication::Publication,
//!   render::Format,
//!   summary::{group, GroupBy},
//! };
//!
//! let publications = vec![Publication::new(1, "A", "Journal", 2023).with_venue("V1")];
//! let grouped = group(&publications, GroupBy::Year);
//!
//! let format: Format = "PDF".parse().unwrap();
//! let bytes = format.renderer().render(&grouped);
//! assert!(String::from_utf8(bytes).unwrap().starts_with("Publications Summary"));
//! ```

use super::*;
use crate::summary::GroupedPublications;

pub mod html;
pub mod text;

pub use self::{html::format_summary_html, text::format_summary_text};

/// Heading used by every summary document.
pub const SUMMARY_TITLE: &str = "Publications Summary";

/// Serializes grouped publications into document bytes.
pub trait Renderer {
  /// Renders `groups`, in their iteration order, into bytes.
  fn render(&self, groups: &GroupedPublications<'_>) -> Vec<u8>;
}

/// Renders the plain text summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Renderer for PlainText {
  fn render(&self, groups: &GroupedPublications<'_>) -> Vec<u8> {
    format_summary_text(groups).into_bytes()
  }
}

/// Renders the HTML summary page.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

impl Renderer for Html {
  fn render(&self, groups: &GroupedPublications<'_>) -> Vec<u8> {
    format_summary_html(groups).into_bytes()
  }
}

/// A summary document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
  /// Labelled as PDF, rendered as plain text
  Pdf,
  /// Labelled as a Word document, rendered as plain text
  Word,
  /// An HTML page
  Web,
}

impl Format {
  /// MIME type the document is delivered with.
  pub fn content_type(&self) -> &'static str {
    match self {
      Format::Pdf => "application/pdf",
      Format::Word => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
      Format::Web => "text/html",
    }
  }

  /// File extension of the document, without the dot.
  pub fn extension(&self) -> &'static str {
    match self {
      Format::Pdf => "pdf",
      Format::Word => "docx",
      Format::Web => "html",
    }
  }

  /// The renderer producing this format's bytes.
  pub fn renderer(&self) -> &'static dyn Renderer {
    match self {
      Format::Pdf | Format::Word => &PlainText,
      Format::Web => &Html,
    }
  }
}

impl Display for Format {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Format::Pdf => write!(f, "pdf"),
      Format::Word => write!(f, "word"),
      Format::Web => write!(f, "web"),
    }
  }
}

impl FromStr for Format {
  type Err = ScholarError;

  fn from_str(s: &str) -> Result<Self> {
    match &s.to_lowercase() as &str {
      "pdf" => Ok(Format::Pdf),
      "word" => Ok(Format::Word),
      "web" => Ok(Format::Web),
      _ => Err(ScholarError::UnsupportedFormat(s.to_owned())),
    }
  }
}
