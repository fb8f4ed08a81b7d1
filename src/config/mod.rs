use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub slugs: SlugConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlugConfig {
    /// Namespace used when a command does not name one.
    #[serde(default = "default_namespace")]
    pub default_namespace: String,
    /// How many times a reservation re-resolves after losing a race.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            default_namespace: default_namespace(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_pool_size() -> u32 {
    10
}

fn default_namespace() -> String {
    "documents".to_string()
}

fn default_max_attempts() -> u32 {
    8
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Run 'bzr init' to create one.",
                path.display(),
                e
            )
        })?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file '{}': {}", path.display(), e))?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.path.trim().is_empty() {
            anyhow::bail!("database.path must not be empty");
        }
        if self.database.pool_size == 0 {
            anyhow::bail!("database.pool_size must be greater than 0");
        }
        if self.slugs.max_attempts == 0 {
            anyhow::bail!("slugs.max_attempts must be greater than 0");
        }
        if self.slugs.default_namespace.trim().is_empty() {
            anyhow::bail!("slugs.default_namespace must not be empty");
        }
        Ok(())
    }
}
