use crate::services::transliterate::transliterate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub const MAX_SLUG_LENGTH: usize = 100;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid regex"));
static RE_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9-]").expect("Invalid regex"));
static RE_HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("Invalid regex"));

/// Turns a title (Cyrillic or Latin) into a URL token of `[a-z0-9-]`.
pub fn generate_slug(title: &str) -> String {
    let latin = transliterate(title).to_lowercase();
    let hyphenated = RE_WHITESPACE.replace_all(latin.trim(), "-");
    let stripped = RE_DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = RE_HYPHENS.replace_all(&stripped, "-");
    let mut slug = collapsed.trim_matches('-').to_string();

    // Only ASCII survives the strip above, so byte truncation is char-safe.
    if slug.len() > MAX_SLUG_LENGTH {
        slug.truncate(MAX_SLUG_LENGTH);
        slug.truncate(slug.trim_end_matches('-').len());
    }
    slug
}

pub fn normalize(text: &str) -> String {
    generate_slug(text)
}

/// Appends `-1`, `-2`, ... to `base` until it no longer collides with `existing`.
pub fn generate_unique_slug<I, S>(base: &str, existing: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let taken: HashSet<String> = existing
        .into_iter()
        .map(|s| s.as_ref().to_owned())
        .collect();

    if !taken.contains(base) {
        return base.to_string();
    }

    let mut counter: u64 = 1;
    loop {
        let candidate = format!("{}-{}", base, counter);
        if !taken.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

pub fn uniquify<I, S>(base: &str, existing: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    generate_unique_slug(base, existing)
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
        return false;
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
