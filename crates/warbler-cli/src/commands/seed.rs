//! Seed import command
//!
//! Usage: warbler seed --db <PATH> <FILE>

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Path to a seed JSON file, or a directory of them
    pub path: PathBuf,

    /// Path to the SQLite database file
    #[arg(long, env = "WARBLER_DB", default_value = "warbler.db")]
    pub db: PathBuf,
}

/// Execute seed import
pub fn execute(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = warbler_store::db::open(&args.db)?;
    warbler_store::db::configure(&conn)?;
    warbler_store::migrations::apply_migrations(&mut conn)?;

    if args.path.is_dir() {
        // Import directory of seeds (sorted for determinism)
        let mut seed_files: Vec<PathBuf> = std::fs::read_dir(&args.path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
            .collect();

        seed_files.sort();

        for seed_file in seed_files {
            println!("Importing {}...", seed_file.display());
            let digest = warbler_store::seed::import_seed(&seed_file, &mut conn)?;
            println!("✓ Imported (digest: {})", digest);
        }
    } else {
        println!("Importing {}...", args.path.display());
        let digest = warbler_store::seed::import_seed(&args.path, &mut conn)?;
        println!("✓ Imported (digest: {})", digest);
    }

    Ok(())
}
