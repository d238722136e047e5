//! Remove instruction for deleting publications from the database.
//!
//! Removal runs a [`Query`] to find its targets, so anything that can be
//! queried can be removed. A dry run returns the same publications without
//! deleting them.
//!
//! # Examples
//!
//! ```no_run
//! use scholar::{
//!   database::{Database, Query, Remove},
//!   prelude::*,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("publications.db").await?;
//!
//! // Remove a specific publication
//! Remove::by_id(42).execute(&mut db).await?;
//!
//! // Preview deletion with dry run
//! let publications =
//!   Remove::from_query(Query::by_year(1999).for_user(1)).dry_run().execute(&mut db).await?;
//! println!("Would remove {} publications", publications.len());
//! # Ok(())
//! # }
//! ```

use super::{query::Query, *};

/// Configuration options for removal operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveOptions {
  /// When true, reports what would be removed without modifying the database.
  pub dry_run: bool,
}

/// Instruction for removing publications from the database.
pub struct Remove<'a> {
  /// The query identifying publications to remove
  query:   Query<'a>,
  /// Configuration options for the removal
  options: RemoveOptions,
}

impl<'a> Remove<'a> {
  /// Creates a remove instruction from an existing query.
  pub fn from_query(query: Query<'a>) -> Self { Self { query, options: RemoveOptions::default() } }

  /// Creates a remove instruction for a single publication.
  pub fn by_id(id: i64) -> Self { Self::from_query(Query::by_id(id)) }

  /// Enables dry run mode: matching publications are returned but kept.
  pub fn dry_run(mut self) -> Self {
    self.options.dry_run = true;
    self
  }
}

#[async_trait]
impl DatabaseInstruction for Remove<'_> {
  type Output = Vec<Publication>;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let publications = self.query.execute(db).await?;

    if self.options.dry_run || publications.is_empty() {
      return Ok(publications);
    }

    let ids = publications.iter().filter_map(|publication| publication.id).collect::<Vec<_>>();
    let count = ids.len();
    db.conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare_cached("DELETE FROM publications WHERE id = ?1")?;
          for id in ids {
            stmt.execute(params![id])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    debug!("Removed {count} publications");
    Ok(publications)
  }
}
