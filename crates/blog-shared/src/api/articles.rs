use serde::{Deserialize, Serialize};

use crate::models::{Article, NewArticle};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateArticleRequest {
    pub article: NewArticle,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub article: Article,
}
