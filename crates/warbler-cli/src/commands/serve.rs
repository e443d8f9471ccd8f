//! Serve command
//!
//! Usage: warbler serve --db <PATH> --addr <ADDR>

use clap::Args;
use warbler_api::ApiConfig;
use warbler_core::logging_facility::{self, Profile};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Path to the SQLite database file
    #[arg(long, env = "WARBLER_DB", default_value = "warbler.db")]
    pub db: String,

    /// Address to bind
    #[arg(long, env = "WARBLER_ADDR", default_value = "127.0.0.1:8080")]
    pub addr: String,

    /// Emit JSON logs (production profile)
    #[arg(long)]
    pub json_logs: bool,
}

/// Execute serve command
pub fn execute(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let profile = if args.json_logs {
        Profile::Production
    } else {
        Profile::Development
    };
    logging_facility::init(profile);

    let config = ApiConfig {
        db_path: args.db,
        addr: args.addr,
        log_profile: profile,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(warbler_api::serve(config))?;

    Ok(())
}
