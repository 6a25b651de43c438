//! Persistence for articles and users.
//!
//! Handlers only see [`BlogStore`]; which implementation backs it is decided
//! once at startup.

use std::sync::Arc;

use async_trait::async_trait;
use blog_shared::{Article, NewArticle, NewUser, UpdateUser, User};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type DynStore = Arc<dyn BlogStore>;

pub const USERNAME_TAKEN: &str = "username has already been taken";
pub const SLUG_TAKEN: &str = "slug has already been taken";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Database(other),
        }
    }
}

#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn get_article(&self, slug: &str) -> Result<Article, StoreError>;

    /// Derives the slug from the title, stores the article and embeds the
    /// author's profile when `author_id` resolves to a user.
    async fn create_article(
        &self,
        article: NewArticle,
        author_id: Option<i32>,
    ) -> Result<Article, StoreError>;

    async fn get_user(&self, login: &str) -> Result<User, StoreError>;

    /// Applies only the fields present in `data`.
    async fn update_user(&self, login: &str, data: &UpdateUser) -> Result<User, StoreError>;

    async fn registration(&self, user: NewUser) -> Result<User, StoreError>;
}
