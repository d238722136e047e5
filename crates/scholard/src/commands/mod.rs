use super::*;

pub mod add;
pub mod clean;
pub mod edit;
pub mod get;
pub mod init;
pub mod list;
pub mod remove;
pub mod search;
pub mod serve;
pub mod summary;

pub use add::{add, AddArgs};
pub use clean::clean;
pub use edit::{edit, EditArgs};
pub use get::get;
pub use init::{init, InitOptions};
pub use list::{list, ListArgs, OrderArg};
pub use remove::{remove, RemoveArgs};
pub use search::{search, SearchOptions};
pub use serve::{serve, ServeArgs};
pub use summary::{summary, SummaryArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Create the configuration file and the publication database
  Init(InitOptions),

  /// Add a publication to a user's catalogue
  Add(AddArgs),

  /// Show a publication's details
  Get {
    /// Database id of the publication
    id: i64,
  },

  /// Change fields of a stored publication
  Edit(EditArgs),

  /// Remove a publication from the catalogue
  Remove(RemoveArgs),

  /// Search publications by title, abstract, keywords, authors or venue
  Search(SearchOptions),

  /// List a user's publications
  List(ListArgs),

  /// Write a grouped summary of a user's publications to a file
  Summary(SummaryArgs),

  /// Serve the catalogue over HTTP
  Serve(ServeArgs),

  /// Removes the entire database after confirmation
  Clean,
}
