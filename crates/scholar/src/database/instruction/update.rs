//! Update instruction for editing a stored publication.

use super::*;

/// Instruction applying [`PublicationChanges`] to one publication.
///
/// The edited publication is validated and checked for DOI clashes with the
/// owner's other publications before it is written back.
pub struct Update {
  /// Id of the publication to edit
  id:      i64,
  /// Fields to change
  changes: PublicationChanges,
}

impl Update {
  /// Creates an instruction editing the publication with `id`.
  pub fn new(id: i64, changes: PublicationChanges) -> Self { Self { id, changes } }
}

#[async_trait]
impl DatabaseInstruction for Update {
  type Output = Publication;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let mut publication =
      query::Query::by_id(self.id).execute(db).await?.pop().ok_or(ScholarError::NotFound)?;

    self.changes.clone().apply(&mut publication);
    publication.validate()?;
    ensure_unique_doi(db, &publication).await?;

    let stored = publication.clone();
    let id = self.id;
    let changed = db
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE publications SET
              title = ?1, publication_type = ?2, authors = ?3, venue = ?4, year = ?5,
              doi = ?6, abstract_text = ?7, keywords = ?8, pdf_url = ?9,
              citation_count = ?10, research_area = ?11, updated_at = ?12
           WHERE id = ?13",
          params![
            stored.title,
            stored.publication_type,
            stored.authors,
            stored.venue,
            stored.year,
            stored.doi,
            stored.abstract_text,
            stored.keywords,
            stored.pdf_url,
            stored.citation_count,
            stored.research_area,
            timestamp_to_sql(&stored.updated_at),
            id,
          ],
        )?;
        Ok(changed)
      })
      .await?;

    if changed == 0 {
      return Err(ScholarError::NotFound);
    }
    debug!("Updated publication {id}");
    Ok(publication)
  }
}
