//! Database instruction implementations for catalogue management.
//!
//! Each operation on the catalogue is a value implementing
//! [`DatabaseInstruction`], built first and then executed against a
//! [`Database`]. This keeps query construction testable on its own and lets
//! instructions compose, as [`Remove`](remove::Remove) does by running a
//! [`Query`](query::Query) first.

use rusqlite::{params, params_from_iter, types::Value};

use super::*;
use crate::publication::PublicationChanges;

pub mod add;
pub mod query;
pub mod remove;
pub mod update;

/// An operation that can be executed against the [`Database`].
#[async_trait]
pub trait DatabaseInstruction {
  /// What executing the instruction yields.
  type Output;

  /// Runs the instruction.
  ///
  /// Takes `&mut` so a caller owning the database sequences its operations.
  async fn execute(&self, db: &mut Database) -> Result<Self::Output>;
}

/// Checks that no other publication of `publication`'s owner carries its DOI.
async fn ensure_unique_doi(db: &mut Database, publication: &Publication) -> Result<()> {
  let Some(doi) = publication.doi.as_deref() else {
    return Ok(());
  };

  let existing = query::Query::by_doi(doi).for_user(publication.user_id).execute(db).await?;
  if existing.iter().any(|other| other.id != publication.id) {
    return Err(ScholarError::DuplicatePublication(publication.title.clone()));
  }
  Ok(())
}
