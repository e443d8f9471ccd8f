//! API configuration
//!
//! Environment-driven with sensible defaults; the CLI can also construct an
//! `ApiConfig` directly from flags.

use std::env;

use warbler_core::logging_facility::Profile;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Path to the SQLite database file
    pub db_path: String,
    /// Address to bind, e.g. `127.0.0.1:8080`
    pub addr: String,
    /// Logging profile
    pub log_profile: Profile,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            db_path: "warbler.db".to_string(),
            addr: "127.0.0.1:8080".to_string(),
            log_profile: Profile::Development,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    ///
    /// `WARBLER_DB`, `WARBLER_ADDR`, and `WARBLER_LOG_PROFILE`
    /// (`development` or `production`) override the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            db_path: env::var("WARBLER_DB").unwrap_or(defaults.db_path),
            addr: env::var("WARBLER_ADDR").unwrap_or(defaults.addr),
            log_profile: match env::var("WARBLER_LOG_PROFILE").as_deref() {
                Ok("production") => Profile::Production,
                _ => Profile::Development,
            },
        }
    }
}
