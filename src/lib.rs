pub mod cli;
pub mod config;
pub mod db;
pub mod models;
pub mod services;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use db::Database;
pub use services::slug::{generate_slug, generate_unique_slug, normalize, uniquify, validate_slug};
pub use services::transliterate::transliterate;
