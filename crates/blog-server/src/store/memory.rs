use async_trait::async_trait;
use blog_shared::{create_slug, Article, NewArticle, NewUser, UpdateUser, User};
use tokio::sync::RwLock;

use super::{BlogStore, StoreError, SLUG_TAKEN, USERNAME_TAKEN};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    articles: Vec<Article>,
    last_user_id: i32,
    last_article_id: i32,
}

impl Tables {
    fn user_by_id(&self, id: i32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn with_author(&self, mut article: Article) -> Article {
        article.author = article
            .author_id
            .and_then(|id| self.user_by_id(id))
            .map(User::profile);
        article
    }
}

/// Process-local store. Enforces the same uniqueness rules as the
/// `article.slug` and `usr.login` constraints.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn get_article(&self, slug: &str) -> Result<Article, StoreError> {
        let tables = self.tables.read().await;
        let article = tables
            .articles
            .iter()
            .find(|a| a.slug == slug)
            .cloned()
            .ok_or(StoreError::NotFound)?;

        Ok(tables.with_author(article))
    }

    async fn create_article(
        &self,
        article: NewArticle,
        author_id: Option<i32>,
    ) -> Result<Article, StoreError> {
        let mut tables = self.tables.write().await;
        let slug = create_slug(&article.title);

        if tables.articles.iter().any(|a| a.slug == slug) {
            return Err(StoreError::Conflict(SLUG_TAKEN.to_string()));
        }

        tables.last_article_id += 1;
        let created = Article {
            id: tables.last_article_id,
            slug,
            title: article.title,
            author_id,
            author: None,
        };
        tables.articles.push(created.clone());

        Ok(tables.with_author(created))
    }

    async fn get_user(&self, login: &str) -> Result<User, StoreError> {
        self.tables
            .read()
            .await
            .users
            .iter()
            .find(|u| u.username == login)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_user(&self, login: &str, data: &UpdateUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        let idx = tables
            .users
            .iter()
            .position(|u| u.username == login)
            .ok_or(StoreError::NotFound)?;

        let mut updated = tables.users[idx].clone();
        data.apply_to(&mut updated);

        let taken = tables
            .users
            .iter()
            .enumerate()
            .any(|(i, u)| i != idx && u.username == updated.username);
        if taken {
            return Err(StoreError::Conflict(USERNAME_TAKEN.to_string()));
        }

        tables.users[idx] = updated.clone();
        Ok(updated)
    }

    async fn registration(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Conflict(USERNAME_TAKEN.to_string()));
        }

        tables.last_user_id += 1;
        let created = User {
            id: tables.last_user_id,
            username: user.username,
            email: user.email,
            password: user.password,
            ..User::default()
        };
        tables.users.push(created.clone());

        Ok(created)
    }
}
