use crate::services::slug::{generate_slug, generate_unique_slug};
use crate::services::transliterate::transliterate;

pub fn transliterate_text(text: &str) {
    println!("{}", transliterate(text));
}

pub fn slug(text: &str) {
    let slug = generate_slug(text);
    if slug.is_empty() {
        tracing::warn!("'{}' produces an empty slug", text);
    }
    println!("{}", slug);
}

pub fn unique(base: &str, existing: &[String]) {
    println!("{}", generate_unique_slug(base, existing));
}
