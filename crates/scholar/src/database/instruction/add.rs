//! Add instruction for storing new publications.
//!
//! The publication is validated before anything is written, and a user
//! cannot store two publications with the same DOI.
//!
//! # Examples
//!
//! ```no_run
//! use scholar::{database::{Add, Database}, prelude::*, publication::Publication};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("publications.db").await?;
//! let publication = Publication::new(1, "Bulletproofs", "Conference", 2018).with_venue("IEEE S&P");
//! let id = Add::publication(&publication).execute(&mut db).await?;
//! # Ok(())
//! # }
//! ```

use super::*;

/// Instruction for adding a publication to the database.
pub struct Add<'a> {
  /// The publication to store
  publication: &'a Publication,
}

impl<'a> Add<'a> {
  /// Creates an instruction storing `publication`.
  ///
  /// Any id already set on the publication is ignored; the database assigns
  /// a new one.
  pub fn publication(publication: &'a Publication) -> Self { Self { publication } }
}

#[async_trait]
impl DatabaseInstruction for Add<'_> {
  type Output = i64;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    self.publication.validate()?;

    let mut publication = self.publication.clone();
    publication.id = None;
    ensure_unique_doi(db, &publication).await?;

    let title = publication.title.clone();
    let id = db
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(
          "INSERT INTO publications (
              user_id, title, publication_type, authors, venue, year, doi,
              abstract_text, keywords, pdf_url, citation_count, research_area,
              created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
           RETURNING id",
        )?;
        let id = stmt.query_row(
          params![
            publication.user_id,
            publication.title,
            publication.publication_type,
            publication.authors,
            publication.venue,
            publication.year,
            publication.doi,
            publication.abstract_text,
            publication.keywords,
            publication.pdf_url,
            publication.citation_count,
            publication.research_area,
            timestamp_to_sql(&publication.created_at),
            timestamp_to_sql(&publication.updated_at),
          ],
          |row| row.get(0),
        )?;
        Ok(id)
      })
      .await?;

    debug!("Stored publication {id}: {title}");
    Ok(id)
  }
}
