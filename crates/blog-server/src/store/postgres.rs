use async_trait::async_trait;
use blog_shared::{create_slug, Article, NewArticle, NewUser, UpdateUser, User};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{BlogStore, StoreError, SLUG_TAKEN, USERNAME_TAKEN};

const USER_COLUMNS: &str = "id, login, password, email, bio, image";

/// Store backed by the `article` and `usr` tables (see `schema.sql`).
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn user_by_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM usr WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn with_author(&self, mut article: Article) -> Result<Article, StoreError> {
        if let Some(author_id) = article.author_id {
            article.author = self.user_by_id(author_id).await?.map(|u| u.profile());
        }
        Ok(article)
    }
}

fn conflict_on_unique(err: sqlx::Error, message: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::Conflict(message.to_string())
        }
        _ => StoreError::from(err),
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn get_article(&self, slug: &str) -> Result<Article, StoreError> {
        let article: Article =
            sqlx::query_as("SELECT id, slug, title, author_id FROM article WHERE slug = $1")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?
                .ok_or(StoreError::NotFound)?;

        self.with_author(article).await
    }

    async fn create_article(
        &self,
        article: NewArticle,
        author_id: Option<i32>,
    ) -> Result<Article, StoreError> {
        let slug = create_slug(&article.title);

        let created: Article = sqlx::query_as(
            r#"
            INSERT INTO article (slug, title, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, slug, title, author_id
            "#,
        )
        .bind(&slug)
        .bind(&article.title)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, SLUG_TAKEN))?;

        tracing::debug!("Created article {}", created.slug);

        self.with_author(created).await
    }

    async fn get_user(&self, login: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM usr WHERE login = $1"))
            .bind(login)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn update_user(&self, login: &str, data: &UpdateUser) -> Result<User, StoreError> {
        let query = format!(
            r#"
            UPDATE usr
            SET login = COALESCE($1, login),
                password = COALESCE($2, password),
                email = COALESCE($3, email),
                bio = COALESCE($4, bio),
                image = COALESCE($5, image)
            WHERE login = $6
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&query)
            .bind(&data.username)
            .bind(&data.password)
            .bind(&data.email)
            .bind(&data.bio)
            .bind(&data.image)
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| conflict_on_unique(e, USERNAME_TAKEN))?
            .ok_or(StoreError::NotFound)
    }

    async fn registration(&self, user: NewUser) -> Result<User, StoreError> {
        let query = format!(
            r#"
            INSERT INTO usr (login, password, email)
            VALUES ($1, $2, $3)
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&query)
            .bind(&user.username)
            .bind(&user.password)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| conflict_on_unique(e, USERNAME_TAKEN))
    }
}
