//! Command line interface for the scholar publication catalogue.
//!
//! This crate provides the `scholar` binary built on the `scholar` library.
//! It supports operations like:
//! - Catalogue initialization and cleanup
//! - Adding, editing and removing publications
//! - Listing and searching a user's publications
//! - Exporting grouped publication summaries
//! - Serving the catalogue over HTTP
//!
//! # Usage
//!
//! ```bash
//! # Create the configuration and database
//! scholar init
//!
//! # Add a publication for user 1
//! scholar add --user 1 --title "MapReduce" --type Journal --year 2008 --doi 10.1145/1327452.1327492
//!
//! # Search a user's publications
//! scholar search "mapreduce" --user 1
//!
//! # Write publications_summary.html grouped by research area
//! scholar summary --user 1 --format web --filter area
//!
//! # Serve the HTTP routes
//! scholar serve --bind 127.0.0.1:8080
//! ```
//!
//! The CLI provides colored output and interactive confirmations for
//! destructive operations. Logging detail grows with each `-v`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use clap::{builder::ArgAction, Args, Parser, Subcommand, ValueEnum};
use console::style;
use scholar::{
  config::Config,
  database::{Add, Database, OrderField, Query, Remove, Update},
  error::ScholarError,
  prelude::*,
  publication::{NewPublication, Publication, PublicationChanges},
  Scholar,
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Catalogue academic publications and export summaries")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the database file. Overrides the path stored in the configuration; when no
  /// configuration exists the platform-specific data directory is used.
  #[arg(long, short, global = true)]
  path: Option<PathBuf>,

  /// Path to the configuration file. Defaults to `~/.scholar/config.toml`.
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

impl Cli {
  /// The configuration file this invocation reads and writes.
  fn config_path(&self) -> PathBuf { self.config.clone().unwrap_or_else(Config::default_path) }

  /// Opens the catalogue described by the configuration, honoring `--path`.
  ///
  /// Without a configuration file the catalogue can still be opened when
  /// `--path` names the database.
  async fn open_scholar(&self) -> Result<Scholar> {
    let config_path = self.config_path();
    let config = if config_path.exists() {
      Config::load(&config_path)?
    } else if self.path.is_some() {
      Config::default()
    } else {
      return Err(ScholardError::Scholar(ScholarError::Config(
        "Configuration not initialized. Run `scholar init` first.".to_string(),
      )));
    };
    let config = match &self.path {
      Some(path) => config.with_database_path(path),
      None => config,
    };

    trace!("Using database at: {}", config.database_path.display());
    Ok(Scholar::builder().with_config(config).build().await?)
  }
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Entry point for the scholar CLI application
///
/// Parses arguments, sets up logging and runs the requested command.
///
/// # Errors
///
/// Returns [`ScholardError`] for failures including:
/// - Catalogue and database operations
/// - Unsupported summary formats
/// - File system errors
/// - User interaction errors
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let interaction = Terminal::new(cli.accept_defaults);
  let result = run(&cli, &interaction).await;
  if let Err(e) = &result {
    debug!("Command failed: {e:?}");
    eprintln!("{} {}", style(ERROR_PREFIX).red(), style(e).red());
  }
  result
}

/// Dispatches the parsed command.
async fn run<I: UserInteraction>(cli: &Cli, interaction: &I) -> Result<()> {
  match cli.command.clone() {
    Commands::Init(options) => init(cli, interaction, options).await,
    Commands::Clean => clean(cli, interaction).await,
    Commands::Serve(args) => serve(cli.open_scholar().await?, interaction, args).await,
    Commands::Add(args) => add(&mut cli.open_scholar().await?, interaction, args).await,
    Commands::Get { id } => get(&mut cli.open_scholar().await?, interaction, id).await,
    Commands::Edit(args) => edit(&mut cli.open_scholar().await?, interaction, args).await,
    Commands::Remove(args) => remove(&mut cli.open_scholar().await?, interaction, args).await,
    Commands::Search(options) =>
      search(&mut cli.open_scholar().await?, interaction, options).await,
    Commands::List(args) => list(&mut cli.open_scholar().await?, interaction, args).await,
    Commands::Summary(args) => summary(&mut cli.open_scholar().await?, interaction, args).await,
  }
}
