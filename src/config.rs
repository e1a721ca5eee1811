//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://bookstore.db?mode=rwc"
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://bookstore.db?mode=rwc`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CATALOG_PATH` - Catalog fixture to seed from (default: embedded `data/catalog.json`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//! - `COOKIE_SECURE` - Issue the cart cookie with `Secure` (default: false)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "sqlite://bookstore.db?mode=rwc";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Catalog fixture file. `None` seeds from the embedded catalog.
    pub catalog_path: Option<PathBuf>,
    /// When true, the `cart_id` cookie carries the `Secure` attribute.
    /// Enable when the shop is served over HTTPS.
    pub cookie_secure: bool,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this only fails on values that cannot
    /// be represented; see [`Self::validate`] for semantic checks.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let catalog_path = env::var("CATALOG_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            catalog_path,
            cookie_secure,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
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

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether the database lives in memory only.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }

    /// Pool size to open: `DB_MAX_CONNECTIONS`, or 1 for an in-memory
    /// database, which is dropped once its last connection closes.
    pub fn pool_size(&self) -> u32 {
        if self.is_in_memory() {
            1
        } else {
            self.db_max_connections
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        match &self.catalog_path {
            Some(path) => tracing::info!("  Catalog: {}", path.display()),
            None => tracing::info!("  Catalog: embedded"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Secure cookies: {}", self.cookie_secure);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
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

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            catalog_path: None,
            cookie_secure: false,
            db_max_connections: 5,
            db_connect_timeout: 30,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite://shop.db".to_string();
        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_in_memory() {
        let mut config = base_config();
        assert!(config.is_in_memory());

        config.database_url = "sqlite://shop.db?mode=rwc".to_string();
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_pool_size_pinned_for_in_memory() {
        let mut config = base_config();
        config.db_max_connections = 8;
        assert_eq!(config.pool_size(), 1);

        config.database_url = "sqlite://shop.db?mode=rwc".to_string();
        assert_eq!(config.pool_size(), 8);
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("CATALOG_PATH");
            env::remove_var("COOKIE_SECURE");
            env::remove_var("DB_MAX_CONNECTIONS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert!(config.catalog_path.is_none());
        assert!(!config.cookie_secure);
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    #[serial]
    fn test_overrides_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://other.db");
            env::set_var("CATALOG_PATH", "/srv/catalog.json");
            env::set_var("COOKIE_SECURE", "TRUE");
            env::set_var("DB_MAX_CONNECTIONS", "not-a-number");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(std::path::Path::new("/srv/catalog.json"))
        );
        assert!(config.cookie_secure);
        assert_eq!(config.db_max_connections, 5);

        // Cleanup
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("CATALOG_PATH");
            env::remove_var("COOKIE_SECURE");
            env::remove_var("DB_MAX_CONNECTIONS");
        }
    }
}
