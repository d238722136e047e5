//! Core publication type and the payloads used to create and edit it.
//!
//! A [`Publication`] is one catalogue entry owned by a user. Authors and
//! keywords are kept as the free text the user typed (comma separated) so that
//! they render exactly as entered; [`Publication::author_list`] and
//! [`Publication::keyword_list`] split them when individual entries are needed.
//!
//! # Examples
//!
//! ```
//! use scholar::publication::Publication;
//!
//! let publication = Publication::new(1, "On the Size of Pairing-based Arguments", "Conference", 2016)
//!   .with_authors("Jens Groth")
//!   .with_venue("EUROCRYPT")
//!   .with_doi("10.1007/978-3-662-49896-5_11")
//!   .with_research_area("Cryptography");
//!
//! assert!(publication.validate().is_ok());
//! assert_eq!(publication.author_list(), vec!["Jens Groth"]);
//! ```

use chrono::SubsecRound;

use super::*;

lazy_static! {
  /// Shape of a DOI such as `10.1/xyz`: `10.` then a registrant prefix and a suffix split by `/`.
  static ref DOI: Regex = Regex::new(r"^10\.\S+/\S+$").unwrap();
}

/// A publication in a user's catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
  /// Database id, `None` until the publication has been stored
  pub id:               Option<i64>,
  /// Id of the user owning this entry
  pub user_id:          i64,
  /// Full title
  pub title:            String,
  /// Kind of publication (journal article, conference paper, ...), free text
  #[serde(rename = "type", alias = "publication_type")]
  pub publication_type: String,
  /// Comma separated author names
  pub authors:          String,
  /// Journal, conference or publisher
  pub venue:            String,
  /// Four digit publication year
  pub year:             i32,
  /// Optional DOI reference
  pub doi:              Option<String>,
  /// Abstract text
  #[serde(rename = "abstract", alias = "abstract_text")]
  pub abstract_text:    String,
  /// Comma separated keywords
  pub keywords:         String,
  /// Optional URL to the PDF document
  pub pdf_url:          Option<String>,
  /// Number of citations, if known
  pub citation_count:   Option<i64>,
  /// Optional research area classification
  pub research_area:    Option<String>,
  /// When the entry was created
  pub created_at:       DateTime<Utc>,
  /// When the entry was last changed
  pub updated_at:       DateTime<Utc>,
}

impl Publication {
  /// Creates an unsaved publication with the required fields set and every
  /// other text field empty.
  pub fn new(
    user_id: i64,
    title: impl Into<String>,
    publication_type: impl Into<String>,
    year: i32,
  ) -> Self {
    let timestamp = now();
    Self {
      id: None,
      user_id,
      title: title.into(),
      publication_type: publication_type.into(),
      authors: String::new(),
      venue: String::new(),
      year,
      doi: None,
      abstract_text: String::new(),
      keywords: String::new(),
      pdf_url: None,
      citation_count: None,
      research_area: None,
      created_at: timestamp,
      updated_at: timestamp,
    }
  }

  /// Sets the comma separated author list.
  pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
    self.authors = authors.into();
    self
  }

  /// Sets the venue.
  pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
    self.venue = venue.into();
    self
  }

  /// Sets the DOI.
  pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
    self.doi = Some(doi.into());
    self
  }

  /// Sets the abstract.
  pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
    self.abstract_text = abstract_text.into();
    self
  }

  /// Sets the comma separated keywords.
  pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
    self.keywords = keywords.into();
    self
  }

  /// Sets the PDF URL.
  pub fn with_pdf_url(mut self, url: impl Into<String>) -> Self {
    self.pdf_url = Some(url.into());
    self
  }

  /// Sets the citation count.
  pub fn with_citation_count(mut self, count: i64) -> Self {
    self.citation_count = Some(count);
    self
  }

  /// Sets the research area.
  pub fn with_research_area(mut self, area: impl Into<String>) -> Self {
    self.research_area = Some(area.into());
    self
  }

  /// Individual author names, trimmed, without empty entries.
  pub fn author_list(&self) -> Vec<&str> { split_list(&self.authors) }

  /// Individual keywords, trimmed, without empty entries.
  pub fn keyword_list(&self) -> Vec<&str> { split_list(&self.keywords) }

  /// Checks the invariants a stored publication must hold.
  ///
  /// # Errors
  ///
  /// - [`ScholarError::InvalidYear`] when the year is not four digits
  /// - [`ScholarError::MissingField`] when the title or type is blank
  /// - [`ScholarError::InvalidDoi`] when a DOI is present but malformed
  pub fn validate(&self) -> Result<()> {
    if !(1000..=9999).contains(&self.year) {
      return Err(ScholarError::InvalidYear(self.year));
    }
    if self.title.trim().is_empty() {
      return Err(ScholarError::MissingField("title"));
    }
    if self.publication_type.trim().is_empty() {
      return Err(ScholarError::MissingField("publication_type"));
    }
    if let Some(doi) = &self.doi {
      if !DOI.is_match(doi) {
        return Err(ScholarError::InvalidDoi(doi.clone()));
      }
    }
    Ok(())
  }
}

impl Display for Publication {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ({}, {})", self.title, self.venue, self.year)
  }
}

/// The current time at the microsecond precision timestamps are stored with.
pub(crate) fn now() -> DateTime<Utc> { Utc::now().trunc_subsecs(6) }

/// Splits a comma separated field.
fn split_list(text: &str) -> Vec<&str> {
  text.split(',').map(str::trim).filter(|entry| !entry.is_empty()).collect()
}

/// The payload for creating a publication.
///
/// Only the title, type and year are required; every other field defaults to
/// empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPublication {
  /// Full title
  pub title:            String,
  /// Kind of publication, sent as `type`
  #[serde(rename = "type", alias = "publication_type")]
  pub publication_type: String,
  /// Comma separated author names
  pub authors:          String,
  /// Journal, conference or publisher
  pub venue:            String,
  /// Four digit publication year
  pub year:             i32,
  /// Optional DOI reference
  pub doi:              Option<String>,
  /// Abstract text, sent as `abstract`
  #[serde(rename = "abstract", alias = "abstract_text")]
  pub abstract_text:    String,
  /// Comma separated keywords
  pub keywords:         String,
  /// Optional URL to the PDF document
  pub pdf_url:          Option<String>,
  /// Number of citations, if known
  pub citation_count:   Option<i64>,
  /// Optional research area
  pub research_area:    Option<String>,
}

impl NewPublication {
  /// Builds the unsaved publication owned by `user_id`.
  ///
  /// Blank optional fields are treated as absent.
  pub fn into_publication(self, user_id: i64) -> Publication {
    let mut publication = Publication::new(user_id, self.title, self.publication_type, self.year)
      .with_authors(self.authors)
      .with_venue(self.venue)
      .with_abstract(self.abstract_text)
      .with_keywords(self.keywords);
    publication.doi = non_blank(self.doi);
    publication.pdf_url = non_blank(self.pdf_url);
    publication.citation_count = self.citation_count;
    publication.research_area = non_blank(self.research_area);
    publication
  }
}

/// Drops optional text that only contains whitespace.
fn non_blank(value: Option<String>) -> Option<String> {
  value.filter(|text| !text.trim().is_empty())
}

/// A partial edit of a publication.
///
/// Absent fields are left untouched. For optional columns the outer `Option`
/// says whether to change the field and the inner one is the new value, so
/// `Some(None)` clears it. In JSON, an explicit `null` clears the field and a
/// missing key leaves it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationChanges {
  /// New title
  pub title:            Option<String>,
  /// New publication type
  #[serde(rename = "type", alias = "publication_type")]
  pub publication_type: Option<String>,
  /// New author list
  pub authors:          Option<String>,
  /// New venue
  pub venue:            Option<String>,
  /// New year
  pub year:             Option<i32>,
  /// New or cleared DOI
  #[serde(deserialize_with = "present")]
  pub doi:              Option<Option<String>>,
  /// New abstract
  #[serde(rename = "abstract", alias = "abstract_text")]
  pub abstract_text:    Option<String>,
  /// New keywords
  pub keywords:         Option<String>,
  /// New or cleared PDF URL
  #[serde(deserialize_with = "present")]
  pub pdf_url:          Option<Option<String>>,
  /// New or cleared citation count
  #[serde(deserialize_with = "present")]
  pub citation_count:   Option<Option<i64>>,
  /// New or cleared research area
  #[serde(deserialize_with = "present")]
  pub research_area:    Option<Option<String>>,
}

/// Marks a key that appeared in the input, even with a `null` value.
fn present<'de, T, D>(deserializer: D) -> core::result::Result<Option<Option<T>>, D::Error>
where
  T: Deserialize<'de>,
  D: serde::Deserializer<'de>, {
  Option::<T>::deserialize(deserializer).map(Some)
}

impl PublicationChanges {
  /// Whether the edit changes nothing.
  pub fn is_empty(&self) -> bool {
    self.title.is_none()
      && self.publication_type.is_none()
      && self.authors.is_none()
      && self.venue.is_none()
      && self.year.is_none()
      && self.doi.is_none()
      && self.abstract_text.is_none()
      && self.keywords.is_none()
      && self.pdf_url.is_none()
      && self.citation_count.is_none()
      && self.research_area.is_none()
  }

  /// Writes the present fields onto `publication` and bumps `updated_at`.
  pub fn apply(self, publication: &mut Publication) {
    if let Some(title) = self.title {
      publication.title = title;
    }
    if let Some(publication_type) = self.publication_type {
      publication.publication_type = publication_type;
    }
    if let Some(authors) = self.authors {
      publication.authors = authors;
    }
    if let Some(venue) = self.venue {
      publication.venue = venue;
    }
    if let Some(year) = self.year {
      publication.year = year;
    }
    if let Some(doi) = self.doi {
      publication.doi = non_blank(doi);
    }
    if let Some(abstract_text) = self.abstract_text {
      publication.abstract_text = abstract_text;
    }
    if let Some(keywords) = self.keywords {
      publication.keywords = keywords;
    }
    if let Some(pdf_url) = self.pdf_url {
      publication.pdf_url = non_blank(pdf_url);
    }
    if let Some(citation_count) = self.citation_count {
      publication.citation_count = citation_count;
    }
    if let Some(research_area) = self.research_area {
      publication.research_area = non_blank(research_area);
    }
    publication.updated_at = now();
  }
}
