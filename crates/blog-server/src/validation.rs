//! Request body decoding with field-presence checks.
//!
//! Every write endpoint decodes its body through [`Validated`], which reports
//! all problems at once as a 422 instead of failing on the first one.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use blog_shared::api::{CreateArticleRequest, LoginRequest, RegisterRequest, UpdateUserRequest};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub const INVALID_BODY: &str = "invalid json body";

/// Names the required fields a decoded payload left blank.
pub trait RequiredFields {
    fn missing_fields(&self) -> Vec<&'static str>;
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl RequiredFields for CreateArticleRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.article.title) {
            missing.push("title");
        }
        missing
    }
}

impl RequiredFields for RegisterRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.user.username) {
            missing.push("username");
        }
        if blank(&self.user.email) {
            missing.push("email");
        }
        if blank(&self.user.password) {
            missing.push("password");
        }
        missing
    }
}

impl RequiredFields for LoginRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.user.username) {
            missing.push("username");
        }
        if blank(&self.user.password) {
            missing.push("password");
        }
        missing
    }
}

// Every field is optional, only the shape is checked.
impl RequiredFields for UpdateUserRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

pub fn parse_body<T>(body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + RequiredFields,
{
    let data: T = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        AppError::validation(INVALID_BODY)
    })?;

    let missing = data.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(
            missing
                .into_iter()
                .map(|field| format!("{field} can't be blank"))
                .collect(),
        ));
    }

    Ok(data)
}

/// JSON body extractor that runs [`parse_body`].
pub struct Validated<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + RequiredFields,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Failed to read request body: {}", e);
            AppError::validation(INVALID_BODY)
        })?;

        parse_body(&body).map(Validated)
    }
}
