//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A missing connection parameter stops the process before any
//! request is served.
//!
//! ```bash
//! export DB_HOST="localhost"
//! export DB_PORT="5432"
//! export DB_USER="postgres"
//! export DB_PASSWORD="password"
//! export DB_NAME="ecommerce"
//! ```
//!
//! ## Required Variables
//!
//! `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_NAME`
//!
//! ## Optional Variables
//!
//! - `DB_PORT` - Database port (default: `5432`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS`, `DB_ACQUIRE_TIMEOUT`, `DB_IDLE_TIMEOUT`, `DB_MAX_LIFETIME` - Pool settings

use anyhow::{Context, Result};
use sqlx::postgres::PgConnectOptions;
use std::env;
use std::fmt;

/// Database connection parameters.
///
/// Kept as separate fields and handed to sqlx as [`PgConnectOptions`], so
/// credentials are never spliced into a URL and need no escaping.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Reads the connection parameters.
    ///
    /// `DB_USER`, `DB_PASSWORD`, `DB_HOST` and `DB_NAME` must all be set;
    /// `DB_PORT` defaults to `5432`.
    fn from_env() -> Result<Self> {
        let user = env::var("DB_USER").context("DB_USER must be set")?;
        let password = env::var("DB_PASSWORD").context("DB_PASSWORD must be set")?;
        let host = env::var("DB_HOST").context("DB_HOST must be set")?;
        let name = env::var("DB_NAME").context("DB_NAME must be set")?;
        let port = match env::var("DB_PORT") {
            Ok(port) => port
                .parse()
                .with_context(|| format!("DB_PORT must be a valid port, got '{port}'"))?,
            Err(_) => 5432,
        };

        Ok(Self {
            host,
            port,
            user,
            password,
            name,
        })
    }

    /// Connection options for the pool.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

/// `user@host:port/name`, without the password.
impl fmt::Display for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}/{}", self.user, self.host, self.port, self.name)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .finish()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── PgPool settings ─────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_ACQUIRE_TIMEOUT`, default: 30).
    pub db_acquire_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub db_max_lifetime: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a database connection parameter is missing or `DB_PORT` is not a port number.
    pub fn from_env() -> Result<Self> {
        let database =
            DatabaseConfig::from_env().context("Failed to load database configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_acquire_timeout = env::var("DB_ACQUIRE_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let db_idle_timeout = env::var("DB_IDLE_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        let db_max_lifetime = env::var("DB_MAX_LIFETIME")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1800);

        Ok(Self {
            database,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
            db_acquire_timeout,
            db_idle_timeout,
            db_max_lifetime,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - the database host or name is empty
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.database.host.is_empty() {
            anyhow::bail!("DB_HOST must not be empty");
        }
        if self.database.name.is_empty() {
            anyhow::bail!("DB_NAME must not be empty");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_acquire_timeout == 0 {
            anyhow::bail!("DB_ACQUIRE_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database);
        tracing::info!("  Pool size: {}", self.db_max_connections);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
