use crate::cli::MigrateCommand;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path, command: Option<MigrateCommand>) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open_with_pool_size(&config.database.path, config.database.pool_size)?;

    match command {
        None => {
            db.migrate()?;
            tracing::info!("Migrations complete");
        }
        Some(MigrateCommand::Status) => show_status(&db)?,
    }

    Ok(())
}

fn show_status(db: &Database) -> Result<()> {
    let descriptions = ["Slug registry"];

    println!("\n  Migration Status\n");
    println!("  {:<10} {:<30} {}", "Version", "Description", "Applied");
    println!("  {}", "-".repeat(60));

    for (version, applied_at) in db.get_migration_status()? {
        let desc = descriptions
            .get((version as usize).saturating_sub(1))
            .unwrap_or(&"Unknown migration");
        let applied = match applied_at {
            Some(ts) => format!("\x1b[32m✓\x1b[0m {}", ts),
            None => "\x1b[33m✗ pending\x1b[0m".to_string(),
        };
        println!("  {:<10} {:<30} {}", format!("{:03}", version), desc, applied);
    }
    println!();

    Ok(())
}
