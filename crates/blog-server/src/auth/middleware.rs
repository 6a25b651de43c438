use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, routes::AppState};

use super::header::token_from_header;

/// Identity of the caller, inserted into request extensions by
/// [`auth_middleware`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub login: String,
    pub token: String,
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = token_from_header(header, &state.config.auth_scheme)
        .map_err(|e| {
            tracing::debug!("{}", e);
            AppError::Unauthorized
        })?
        .ok_or(AppError::Unauthorized)?
        .to_string();

    let data = state.tokens.parse(&token)?;

    request.extensions_mut().insert(AuthUser {
        login: data.login,
        token,
    });

    Ok(next.run(request).await)
}
