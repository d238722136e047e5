//! On-disk configuration for a catalogue.
//!
//! The configuration is a small TOML file, by default at
//! `~/.scholar/config.toml`:
//!
//! ```toml
//! database_path = "/home/alice/.local/share/scholar/scholar.db"
//! bind_address = "127.0.0.1:8080"
//! ```

use super::*;

/// Default address the HTTP server listens on.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Settings shared by the CLI and the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Location of the SQLite database file
  pub database_path: PathBuf,
  /// Socket address the HTTP server binds to
  #[serde(default = "default_bind_address")]
  pub bind_address:  String,
}

/// Serde default for [`Config::bind_address`].
fn default_bind_address() -> String { DEFAULT_BIND_ADDRESS.to_string() }

impl Default for Config {
  fn default() -> Self {
    Self { database_path: Database::default_path(), bind_address: default_bind_address() }
  }
}

impl Config {
  /// Returns the default configuration file location, `~/.scholar/config.toml`.
  ///
  /// Falls back to the current directory when no home directory is known.
  pub fn default_path() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".scholar").join("config.toml")
  }

  /// Sets the database location.
  pub fn with_database_path(mut self, path: impl AsRef<Path>) -> Self {
    self.database_path = path.as_ref().to_path_buf();
    self
  }

  /// Sets the HTTP bind address.
  pub fn with_bind_address(mut self, address: impl Into<String>) -> Self {
    self.bind_address = address.into();
    self
  }

  /// Reads a configuration file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    trace!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
  }

  /// Writes the configuration, creating the parent directory if needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent)?;
      }
    }
    debug!("Writing configuration to {}", path.display());
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    Ok(())
  }
}
