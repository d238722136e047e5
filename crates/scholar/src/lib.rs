//! Academic publication catalogue and summary export library.
//!
//! `scholar` is a library for keeping a catalogue of a researcher's
//! publications, providing:
//!
//! - Publication records with validation
//! - Local storage and querying in SQLite
//! - Grouped publication summaries exported as PDF, Word or web documents
//! - An HTTP boundary serving the catalogue and summary downloads
//!
//! # Getting Started
//!
//! ```no_run
//! use scholar::{
//!   database::{Add, Database, Query},
//!   export::generate_summary,
//!   prelude::*,
//!   publication::Publication,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let mut db = Database::open(Database::default_path()).await?;
//!
//!   let publication = Publication::new(1, "Verifiable FHE", "Journal Article", 2023)
//!     .with_authors("Alice, Bob")
//!     .with_venue("Journal of Cryptology");
//!   Add::publication(&publication).execute(&mut db).await?;
//!
//!   let publications = Query::by_user(1).execute(&mut db).await?;
//!   let artifact = generate_summary(&publications, "web", "year")?;
//!   std::fs::write(artifact.filename(), &artifact.content)?;
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`publication`]: Core publication type and edits
//! - [`summary`]: Grouping publications into ordered buckets
//! - [`render`]: Plain text and HTML summary formatters
//! - [`export`]: Format dispatch and the downloadable artifact
//! - [`database`]: Storage and the instruction pattern for queries
//! - [`server`]: HTTP routes over the catalogue
//! - [`config`]: On-disk configuration

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod publication;
pub mod render;
pub mod server;
pub mod summary;

use crate::{config::Config, database::Database, error::*, publication::Publication};

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use scholar::{
///   database::{Database, Query},
///   prelude::*,
/// };
///
/// async fn example() -> Result<(), ScholarError> {
///   let mut db = Database::open(Database::default_path()).await?;
///   let publications = Query::by_user(7).execute(&mut db).await?;
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{database::DatabaseInstruction, error::ScholarError, render::Renderer};
}

/// A configured catalogue: the loaded [`Config`] plus an open [`Database`].
pub struct Scholar {
  /// Configuration the catalogue was opened with
  pub config:   Config,
  /// Handle to the publication store
  pub database: Database,
}

impl Scholar {
  /// Creates a builder for a [`Scholar`].
  pub fn builder() -> ScholarBuilder { ScholarBuilder::default() }

  /// Opens the catalogue described by the configuration file at `path`.
  pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let config = Config::load(path)?;
    Self::builder().with_config(config).build().await
  }
}

/// Builder for [`Scholar`].
#[derive(Default)]
pub struct ScholarBuilder {
  /// Where to write the configuration, if it should be persisted
  config_path: Option<PathBuf>,
  /// Configuration to open the catalogue with
  config:      Option<Config>,
}

impl ScholarBuilder {
  /// Persists the configuration at `path` when building.
  pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
    self.config_path = Some(path.as_ref().to_path_buf());
    self
  }

  /// Uses `config` instead of the default configuration.
  pub fn with_config(mut self, config: Config) -> Self {
    self.config = Some(config);
    self
  }

  /// Opens the database, creating parent directories as needed, and writes
  /// the configuration when a path was given.
  pub async fn build(self) -> Result<Scholar> {
    let config = self.config.unwrap_or_default();

    if let Some(parent) = config.database_path.parent() {
      if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent)?;
      }
    }
    if let Some(path) = &self.config_path {
      config.save(path)?;
    }

    let database = Database::open(&config.database_path).await?;
    Ok(Scholar { config, database })
  }
}
