//! Local SQLite storage for the publication catalogue.
//!
//! The schema is created when the database is opened. Reads and writes are
//! expressed as instructions implementing [`DatabaseInstruction`]:
//!
//! - [`Add`]: store a new publication
//! - [`Query`]: find publications
//! - [`Update`]: edit a stored publication
//! - [`Remove`]: delete publications
//!
//! # Examples
//!
//! ```no_run
//! use scholar::{
//!   database::{Add, Database, Query, Remove},
//!   prelude::*,
//!   publication::Publication,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("publications.db").await?;
//!
//! let publication = Publication::new(1, "MapReduce", "Journal", 2008).with_doi("10.1145/1327452.1327492");
//! let id = Add::publication(&publication).execute(&mut db).await?;
//!
//! let mine = Query::by_user(1).execute(&mut db).await?;
//! let found = Query::text("mapreduce").for_user(1).execute(&mut db).await?;
//!
//! Remove::by_id(id).execute(&mut db).await?;
//! # Ok(())
//! # }
//! ```

use rusqlite::Row;
use tokio_rusqlite::Connection;

use super::*;

pub mod instruction;

pub use self::instruction::{
  add::Add,
  query::{OrderField, Query, QueryCriteria},
  remove::Remove,
  update::Update,
  DatabaseInstruction,
};

/// Columns selected for a [`Publication`], in the order
/// [`publication_from_row`] reads them.
pub(crate) const PUBLICATION_COLUMNS: &str = "id, user_id, title, publication_type, authors, \
                                              venue, year, doi, abstract_text, keywords, pdf_url, \
                                              citation_count, research_area, created_at, \
                                              updated_at";

/// Handle for interacting with the publication database.
///
/// Wraps an async SQLite connection. The schema is initialized on open, so a
/// fresh file is ready to use immediately.
pub struct Database {
  /// Async SQLite connection handle
  pub(crate) conn: Connection,
}

impl Database {
  /// Opens an existing database or creates a new one at the specified path.
  ///
  /// # Examples
  ///
  /// ```no_run
  /// # use scholar::database::Database;
  /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
  /// let db = Database::open("publications.db").await?;
  /// let db = Database::open(Database::default_path()).await?;
  /// # Ok(())
  /// # }
  /// ```
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = Connection::open(path).await?;

    conn
      .call(|conn| {
        conn.execute_batch(include_str!(concat!(
          env!("CARGO_MANIFEST_DIR"),
          "/migrations/init.sql"
        )))?;
        Ok(())
      })
      .await?;

    debug!("Opened publication database at {}", path.display());
    Ok(Self { conn })
  }

  /// Returns the default path for the database file.
  ///
  /// The path is constructed as follows:
  /// - On Unix: `~/.local/share/scholar/scholar.db`
  /// - On macOS: `~/Library/Application Support/scholar/scholar.db`
  /// - On Windows: `%APPDATA%\scholar\scholar.db`
  /// - Fallback: `./scholar/scholar.db` under the current directory
  pub fn default_path() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("scholar").join("scholar.db")
  }
}

/// Formats a timestamp the way it is stored: fixed width, so text order is
/// time order.
pub(crate) fn timestamp_to_sql(timestamp: &DateTime<Utc>) -> String {
  timestamp.to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

/// Reads a stored timestamp column.
fn timestamp_from_sql(row: &Row<'_>, index: usize) -> rusqlite::Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(&row.get::<_, String>(index)?)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| {
      rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Builds a [`Publication`] from a row selected with [`PUBLICATION_COLUMNS`].
pub(crate) fn publication_from_row(row: &Row<'_>) -> rusqlite::Result<Publication> {
  Ok(Publication {
    id:               row.get(0)?,
    user_id:          row.get(1)?,
    title:            row.get(2)?,
    publication_type: row.get(3)?,
    authors:          row.get(4)?,
    venue:            row.get(5)?,
    year:             row.get(6)?,
    doi:              row.get(7)?,
    abstract_text:    row.get(8)?,
    keywords:         row.get(9)?,
    pdf_url:          row.get(10)?,
    citation_count:   row.get(11)?,
    research_area:    row.get(12)?,
    created_at:       timestamp_from_sql(row, 13)?,
    updated_at:       timestamp_from_sql(row, 14)?,
  })
}
