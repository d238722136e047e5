//! Error types for the scholar command line interface.

use thiserror::Error;

use super::*;

/// Error type alias used across the CLI.
pub type Result<T> = core::result::Result<T, ScholardError>;

/// Errors that can occur while running a CLI command.
#[derive(Error, Debug)]
pub enum ScholardError {
  /// An error from the catalogue library.
  #[error(transparent)]
  Scholar(#[from] ScholarError),

  /// Reading an answer from the terminal failed.
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// A file system operation failed.
  #[error(transparent)]
  IO(#[from] std::io::Error),

  /// The pattern used to find database side files was invalid.
  #[error(transparent)]
  Glob(#[from] glob::PatternError),
}
