use axum::{
    extract::{Path, State},
    Extension, Json,
};
use blog_shared::api::{ArticleResponse, CreateArticleRequest};

use crate::auth::AuthUser;
use crate::error::AppError;
use crate::routes::AppState;
use crate::store::StoreError;
use crate::validation::Validated;

/// GET /api/articles/:slug
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleResponse>, AppError> {
    let article = state.store.get_article(&slug).await?;

    Ok(Json(ArticleResponse { article }))
}

/// POST /api/articles
pub async fn create_article(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Validated(req): Validated<CreateArticleRequest>,
) -> Result<Json<ArticleResponse>, AppError> {
    let author_id = match state.store.get_user(&user.login).await {
        Ok(author) => Some(author.id),
        Err(StoreError::NotFound) => {
            tracing::warn!("Token login {} has no user, creating article without author", user.login);
            None
        }
        Err(e) => return Err(e.into()),
    };

    let article = state.store.create_article(req.article, author_id).await?;
    tracing::info!("Article {} created by {}", article.slug, user.login);

    Ok(Json(ArticleResponse { article }))
}
