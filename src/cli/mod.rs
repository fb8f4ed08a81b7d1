pub mod init;
pub mod migrate;
pub mod registry;
pub mod slug;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bzr")]
#[command(version)]
#[command(about = "Slug toolkit for BZR Portal content", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "bzr.toml", env = "BZR_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default bzr.toml and data directory
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Apply slug registry migrations
    Migrate {
        #[command(subcommand)]
        command: Option<MigrateCommand>,
    },
    /// Render Serbian Cyrillic text in Latin letters
    Transliterate { text: String },
    /// Print the URL slug for a title
    Slug { text: String },
    /// Resolve a slug against slugs that are already taken
    Unique {
        base: String,
        #[arg(short, long = "existing")]
        existing: Vec<String>,
    },
    /// Reserve a slug for a title in the registry
    Reserve {
        title: String,
        #[arg(short, long)]
        namespace: Option<String>,
        /// Use this slug instead of deriving one from the title
        #[arg(short, long)]
        slug: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List reserved slugs
    List {
        #[arg(short, long)]
        namespace: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Remove a slug reservation
    Release {
        slug: String,
        #[arg(short, long)]
        namespace: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum MigrateCommand {
    /// Show applied and pending migrations
    Status,
}
