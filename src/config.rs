//! Configuration management for the catalog server.
//!
//! Settings come from command-line arguments via clap, with environment
//! variable fallbacks using the `CATALOG_` prefix and defaults for everything.
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use content_catalog::config::{Cli, Command};
//!
//! match Cli::parse().command {
//!     Command::Serve(config) => println!("Listening on {}", config.bind_address()),
//!     Command::Seed(config) => println!("Seeding {}", config.storage.storage_root.display()),
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_HOST` - Server bind address (default: 0.0.0.0)
//! - `CATALOG_PORT` - Server port (default: 8080)
//! - `CATALOG_STORAGE_ROOT` - Root of the content tree (default: backend/storage)
//! - `CATALOG_DATABASE` - SQLite database file (default: backend/catalog.db)
//! - `CATALOG_USERNAME` - Login username (default: siddharth)
//! - `CATALOG_PASSWORD` - Login password (default: Best#123)
//! - `CATALOG_BCRYPT_COST` - bcrypt cost factor, 4-31 (default: 12)
//! - `CATALOG_CORS_ORIGINS` - Allowed CORS origins, comma-separated (default: any)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::server::auth::{DEFAULT_PASSWORD, DEFAULT_USERNAME};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default storage root.
pub const DEFAULT_STORAGE_ROOT: &str = "backend/storage";

/// Default database file.
pub const DEFAULT_DATABASE: &str = "backend/catalog.db";

/// Default bcrypt cost factor.
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Lowest bcrypt cost accepted.
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest bcrypt cost accepted.
pub const MAX_BCRYPT_COST: u32 = 31;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Content catalog server.
///
/// Serves book, movie and image metadata from SQLite and streams the matching
/// files from a local storage tree.
#[derive(Parser, Debug, Clone)]
#[command(name = "content-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Seed the store and storage tree, then start the HTTP server.
    Serve(ServeConfig),

    /// Seed the store and storage tree, then exit.
    Seed(SeedConfig),
}

/// Locations of the catalog database and the content tree.
#[derive(Args, Debug, Clone)]
pub struct StorageArgs {
    /// Root directory holding books/, movies/ and images/.
    #[arg(long, default_value = DEFAULT_STORAGE_ROOT, env = "CATALOG_STORAGE_ROOT")]
    pub storage_root: PathBuf,

    /// SQLite database file (created if missing).
    #[arg(long, default_value = DEFAULT_DATABASE, env = "CATALOG_DATABASE")]
    pub database: PathBuf,
}

impl StorageArgs {
    fn validate(&self) -> Result<(), String> {
        if self.storage_root.as_os_str().is_empty() {
            return Err(
                "Storage root is required. Set --storage-root or CATALOG_STORAGE_ROOT".to_string(),
            );
        }
        if self.database.as_os_str().is_empty() {
            return Err("Database path is required. Set --database or CATALOG_DATABASE".to_string());
        }
        Ok(())
    }
}

/// Settings for the `serve` command.
#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "CATALOG_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "CATALOG_PORT")]
    pub port: u16,

    #[command(flatten)]
    pub storage: StorageArgs,

    // =========================================================================
    // Authentication Configuration
    // =========================================================================
    /// Username of the single login identity.
    #[arg(long, default_value = DEFAULT_USERNAME, env = "CATALOG_USERNAME")]
    pub username: String,

    /// Password of the single login identity. Hashed at startup.
    #[arg(long, default_value = DEFAULT_PASSWORD, env = "CATALOG_PASSWORD", hide_default_value = true)]
    pub password: String,

    /// bcrypt cost factor used to hash the password.
    #[arg(long, default_value_t = DEFAULT_BCRYPT_COST, env = "CATALOG_BCRYPT_COST")]
    pub bcrypt_cost: u32,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "CATALOG_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.storage.validate()?;

        if self.username.is_empty() {
            return Err("Username must not be empty. Set --username or CATALOG_USERNAME".to_string());
        }
        if self.password.is_empty() {
            return Err("Password must not be empty. Set --password or CATALOG_PASSWORD".to_string());
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(format!(
                "bcrypt_cost must be between {} and {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST
            ));
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for the `seed` command.
#[derive(Args, Debug, Clone)]
pub struct SeedConfig {
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl SeedConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.storage.validate()
    }
}

// =============================================================================
// Tests
// =============================================================================
