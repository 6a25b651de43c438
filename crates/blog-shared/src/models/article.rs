use serde::{Deserialize, Serialize};

use super::Profile;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Article {
    #[serde(skip)]
    pub id: i32,
    pub slug: String,
    pub title: String,
    #[serde(skip)]
    pub author_id: Option<i32>,
    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Profile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewArticle {
    pub title: String,
}

/// Builds a slug from an article title: lower-cased, whitespace-separated
/// words joined with hyphens.
pub fn create_slug(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
