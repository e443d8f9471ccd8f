//! Migrate command
//!
//! Usage: warbler migrate --db <PATH>

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Path to the SQLite database file
    #[arg(long, env = "WARBLER_DB", default_value = "warbler.db")]
    pub db: PathBuf,
}

/// Execute migrate command
pub fn execute(args: MigrateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = warbler_store::db::open(&args.db)?;
    warbler_store::db::configure(&conn)?;
    warbler_store::migrations::apply_migrations(&mut conn)?;

    let version = warbler_store::migrations::runner::schema_version(&conn)?;
    println!("✓ Migrations applied (schema version {})", version);

    Ok(())
}
