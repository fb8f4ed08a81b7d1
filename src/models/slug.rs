use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugRecord {
    pub id: i64,
    pub namespace: String,
    pub slug: String,
    pub title: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReserveSlug {
    pub namespace: String,
    pub title: String,
    pub slug: Option<String>,
}
