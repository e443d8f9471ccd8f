//! Shared application state
//!
//! The SQLite connection lives behind an async mutex: resolvers take the
//! lock, run a synchronous engine call, and release it.

use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::config::ApiConfig;
use warbler_store::errors::Result;
use warbler_store::{db, migrations};

/// State shared by all resolvers
#[derive(Clone)]
pub struct AppState {
    /// The database connection
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wrap an already-configured connection
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Open, configure, and migrate the database from config
    pub fn init(config: &ApiConfig) -> Result<Self> {
        let mut conn = db::open(&config.db_path)?;
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }

    /// In-memory state for tests
    pub fn init_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }
}
