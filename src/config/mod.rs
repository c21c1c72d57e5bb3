//! Configuration module for the Sanjeevani backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Username accepted by the portal login
    pub admin_username: String,
    /// Password accepted by the portal login (login is rejected when unset)
    pub admin_password: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Time budget for a single store query made by the content proxy
    pub store_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_username =
            env::var("SANJEEVANI_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());

        let admin_password = env::var("SANJEEVANI_ADMIN_PASSWORD").ok();

        let db_path = env::var("SANJEEVANI_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let bind_addr = env::var("SANJEEVANI_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid SANJEEVANI_BIND_ADDR format");

        let log_level = env::var("SANJEEVANI_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let store_timeout_ms = env::var("SANJEEVANI_STORE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        Self {
            admin_username,
            admin_password,
            db_path,
            bind_addr,
            log_level,
            store_timeout: Duration::from_millis(store_timeout_ms),
        }
    }
}
