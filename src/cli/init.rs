use anyhow::Result;
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    let config_path = path.join("bzr.toml");
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    std::fs::create_dir_all(path.join("data"))?;

    let config = r#"[database]
path = "./data/bzr.db"
pool_size = 10

[slugs]
default_namespace = "documents"
max_attempts = 8
"#;

    std::fs::write(&config_path, config)?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'bzr migrate' to set up the slug registry");

    Ok(())
}
