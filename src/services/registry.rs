//! Namespaced slug reservations backed by SQLite.
//!
//! The pure resolver in [`crate::services::slug`] only sees a snapshot of the
//! slugs already taken. Two publishers reading the same snapshot would pick the
//! same "unique" slug, so reservation here is an INSERT guarded by
//! `UNIQUE(namespace, slug)`; a constraint violation re-reads the snapshot and
//! resolves again.

use crate::models::{ReserveSlug, SlugRecord};
use crate::services::slug::{generate_slug, generate_unique_slug, validate_slug};
use crate::Database;
use anyhow::Result;
use rusqlite::{ErrorCode, OptionalExtension, Row};
use std::collections::HashSet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("title '{0}' does not produce a usable slug")]
    Empty(String),
    #[error("invalid slug '{0}': must be 1-100 characters of lowercase letters, numbers and single hyphens")]
    Invalid(String),
    #[error("slug '{slug}' is already taken in namespace '{namespace}'")]
    Taken { namespace: String, slug: String },
    #[error("gave up reserving a slug for '{base}' after {attempts} conflicting attempts")]
    Exhausted { base: String, attempts: u32 },
}

const SELECT_COLUMNS: &str = "SELECT id, namespace, slug, title, created_at FROM slugs";

fn row_to_record(row: &Row) -> rusqlite::Result<SlugRecord> {
    Ok(SlugRecord {
        id: row.get(0)?,
        namespace: row.get(1)?,
        slug: row.get(2)?,
        title: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

/// Slugs in `namespace` that could collide with `base` or one of its numbered variants.
pub fn existing_slugs(db: &Database, namespace: &str, base: &str) -> Result<HashSet<String>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT slug FROM slugs WHERE namespace = ?1 AND (slug = ?2 OR slug LIKE ?2 || '-%')",
    )?;
    let slugs = stmt
        .query_map((namespace, base), |row| row.get::<_, String>(0))?
        .collect::<Result<HashSet<_>, _>>()?;
    Ok(slugs)
}

/// Inserts `slug` as-is. Returns `None` when another reservation already holds it.
pub fn try_reserve(
    db: &Database,
    namespace: &str,
    slug: &str,
    title: &str,
) -> Result<Option<SlugRecord>> {
    let conn = db.get()?;
    let inserted = conn.execute(
        "INSERT INTO slugs (namespace, slug, title) VALUES (?, ?, ?)",
        (namespace, slug, title),
    );
    match inserted {
        Ok(_) => {
            let id = conn.last_insert_rowid();
            let record = conn.query_row(
                &format!("{} WHERE id = ?", SELECT_COLUMNS),
                [id],
                row_to_record,
            )?;
            Ok(Some(record))
        }
        Err(e) if is_unique_violation(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Derives a slug from `title` and reserves the first free variant of it.
pub fn reserve(
    db: &Database,
    namespace: &str,
    title: &str,
    max_attempts: u32,
) -> Result<SlugRecord> {
    let base = generate_slug(title);
    if base.is_empty() {
        return Err(SlugError::Empty(title.to_string()).into());
    }

    for attempt in 1..=max_attempts {
        let taken = existing_slugs(db, namespace, &base)?;
        let candidate = generate_unique_slug(&base, &taken);

        if let Some(record) = try_reserve(db, namespace, &candidate, title)? {
            tracing::debug!("Reserved slug '{}' in '{}'", record.slug, namespace);
            return Ok(record);
        }
        tracing::warn!(
            "Slug '{}' in '{}' was taken concurrently (attempt {}/{})",
            candidate,
            namespace,
            attempt,
            max_attempts
        );
    }

    Err(SlugError::Exhausted {
        base,
        attempts: max_attempts,
    }
    .into())
}

/// Reserves a slug chosen by the caller instead of one derived from the title.
pub fn reserve_explicit(
    db: &Database,
    namespace: &str,
    slug: &str,
    title: &str,
) -> Result<SlugRecord> {
    if !validate_slug(slug) {
        return Err(SlugError::Invalid(slug.to_string()).into());
    }
    try_reserve(db, namespace, slug, title)?.ok_or_else(|| {
        SlugError::Taken {
            namespace: namespace.to_string(),
            slug: slug.to_string(),
        }
        .into()
    })
}

pub fn reserve_request(db: &Database, request: &ReserveSlug, max_attempts: u32) -> Result<SlugRecord> {
    match request.slug.as_deref().filter(|s| !s.is_empty()) {
        Some(slug) => reserve_explicit(db, &request.namespace, slug, &request.title),
        None => reserve(db, &request.namespace, &request.title, max_attempts),
    }
}

pub fn get(db: &Database, namespace: &str, slug: &str) -> Result<Option<SlugRecord>> {
    let conn = db.get()?;
    let record = conn
        .query_row(
            &format!("{} WHERE namespace = ? AND slug = ?", SELECT_COLUMNS),
            (namespace, slug),
            row_to_record,
        )
        .optional()?;
    Ok(record)
}

pub fn list(db: &Database, namespace: Option<&str>) -> Result<Vec<SlugRecord>> {
    let conn = db.get()?;
    let records = match namespace {
        Some(ns) => {
            let mut stmt = conn.prepare(&format!(
                "{} WHERE namespace = ? ORDER BY namespace, slug",
                SELECT_COLUMNS
            ))?;
            let rows = stmt
                .query_map([ns], row_to_record)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        }
        None => {
            let mut stmt =
                conn.prepare(&format!("{} ORDER BY namespace, slug", SELECT_COLUMNS))?;
            let rows = stmt
                .query_map([], row_to_record)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        }
    };
    Ok(records)
}

pub fn release(db: &Database, namespace: &str, slug: &str) -> Result<bool> {
    let conn = db.get()?;
    let removed = conn.execute(
        "DELETE FROM slugs WHERE namespace = ? AND slug = ?",
        (namespace, slug),
    )?;
    if removed > 0 {
        tracing::debug!("Released slug '{}' in '{}'", slug, namespace);
    }
    Ok(removed > 0)
}
