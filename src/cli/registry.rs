use crate::models::{ReserveSlug, SlugRecord};
use crate::services::registry;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

fn open(config_path: &Path) -> Result<(Config, Database)> {
    let config = Config::load(config_path)?;
    let db = Database::open_with_pool_size(&config.database.path, config.database.pool_size)?;
    db.migrate()?;
    Ok((config, db))
}

pub fn reserve(
    config_path: &Path,
    title: String,
    namespace: Option<String>,
    slug: Option<String>,
    json: bool,
) -> Result<()> {
    let (config, db) = open(config_path)?;
    let request = ReserveSlug {
        namespace: namespace.unwrap_or_else(|| config.slugs.default_namespace.clone()),
        title,
        slug,
    };

    let record = registry::reserve_request(&db, &request, config.slugs.max_attempts)?;
    tracing::info!("Reserved '{}' in '{}'", record.slug, record.namespace);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", record.slug);
    }
    Ok(())
}

pub fn list(config_path: &Path, namespace: Option<String>, json: bool) -> Result<()> {
    let (_, db) = open(config_path)?;
    let records = registry::list(&db, namespace.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No slugs reserved.");
        return Ok(());
    }
    print_table(&records);
    Ok(())
}

fn print_table(records: &[SlugRecord]) {
    println!("{:<16} {:<40} {:<20} TITLE", "NAMESPACE", "SLUG", "CREATED");
    println!("{}", "-".repeat(100));
    for r in records {
        println!(
            "{:<16} {:<40} {:<20} {}",
            r.namespace, r.slug, r.created_at, r.title
        );
    }
}

pub fn release(config_path: &Path, slug: &str, namespace: Option<String>) -> Result<()> {
    let (config, db) = open(config_path)?;
    let namespace = namespace.unwrap_or(config.slugs.default_namespace);

    if !registry::release(&db, &namespace, slug)? {
        anyhow::bail!("Slug '{}' is not reserved in '{}'", slug, namespace);
    }
    tracing::info!("Released '{}' from '{}'", slug, namespace);
    Ok(())
}
