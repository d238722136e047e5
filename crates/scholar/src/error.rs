//! Error types for the scholar library.
//!
//! This module provides a single error type covering every failure mode of the
//! library, including:
//! - Summary export requests naming an unknown format
//! - Publication validation
//! - Database operations
//! - Configuration and file system access
//!
//! # Examples
//!
//! ```
//! use scholar::{error::ScholarError, export::generate_summary};
//!
//! let result = generate_summary(&[], "xml", "year");
//! match result {
//!   Err(ScholarError::UnsupportedFormat(format)) => println!("Cannot export as {format}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(artifact) => println!("Exported {}", artifact.filename()),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`scholar`](crate) crate.
pub type Result<T> = core::result::Result<T, ScholarError>;

/// Errors that can occur when working with the scholar library.
///
/// Most variants carry either the offending input or the wrapped underlying
/// error so that callers at the HTTP or CLI boundary can report something
/// useful.
#[derive(Error, Debug)]
pub enum ScholarError {
  /// The requested summary format does not match any known renderer.
  ///
  /// The string parameter holds the format exactly as it was requested.
  #[error("Unsupported summary format \"{0}\", expected one of pdf, word or web")]
  UnsupportedFormat(String),

  /// A publication year is not a four digit integer.
  #[error("Invalid publication year {0}, expected a four digit year")]
  InvalidYear(i32),

  /// A required publication field was blank.
  #[error("Publication field `{0}` must not be empty")]
  MissingField(&'static str),

  /// A DOI does not look like `10.NNNN/suffix`.
  #[error("Invalid DOI \"{0}\"")]
  InvalidDoi(String),

  /// An HTTP request could not be read, such as a malformed JSON body or a
  /// non-numeric id in the path.
  #[error("Invalid request: {0}")]
  InvalidRequest(String),

  /// The requested publication does not exist.
  #[error("Publication not found")]
  NotFound,

  /// Indicates an attempt to add a publication the user has already catalogued.
  ///
  /// Two publications of the same user sharing a DOI are considered the same
  /// publication. The error carries the title of the publication being added.
  #[error("Tried to add a publication titled \"{0}\" that was already in the catalogue.")]
  DuplicatePublication(String),

  /// A SQLite operation failed.
  #[error(transparent)]
  Sqlite(#[from] rusqlite::Error),

  /// An async SQLite operation failed.
  #[error(transparent)]
  AsyncSqlite(#[from] tokio_rusqlite::Error),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - Creating the database or configuration file fails
  /// - Writing an exported summary fails
  /// - Binding the HTTP listener fails
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// A configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration could not be serialized.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// The catalogue is not configured correctly.
  #[error("{0}")]
  Config(String),
}

impl ScholarError {
  /// Whether the error was caused by the request itself rather than by the
  /// system serving it.
  pub fn is_client_error(&self) -> bool {
    matches!(
      self,
      ScholarError::UnsupportedFormat(_)
        | ScholarError::InvalidYear(_)
        | ScholarError::MissingField(_)
        | ScholarError::InvalidDoi(_)
        | ScholarError::InvalidRequest(_)
    )
  }
}
