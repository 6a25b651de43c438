use axum::{extract::State, Extension, Json};
use blog_shared::api::{LoginRequest, RegisterRequest, UpdateUserRequest, UserResponse};
use blog_shared::{User, UserWithToken};

use crate::auth::{AuthData, AuthUser};
use crate::error::AppError;
use crate::routes::AppState;
use crate::validation::Validated;

/// Wraps `user` together with a freshly issued token for its login.
fn with_new_token(state: &AppState, user: User) -> Result<Json<UserResponse>, AppError> {
    let token = state.tokens.issue(&AuthData {
        login: user.username.clone(),
    })?;

    Ok(Json(UserResponse {
        user: UserWithToken::new(user, token),
    }))
}

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    Validated(req): Validated<RegisterRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.store.registration(req.user).await?;
    tracing::info!("Registered user {}", user.username);

    with_new_token(&state, user)
}

/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    Validated(req): Validated<LoginRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.store.get_user(&req.user.username).await?;

    // Passwords are stored and compared as plain text.
    if user.password != req.user.password {
        tracing::debug!("Wrong password for {}", user.username);
        return Err(AppError::NotFound);
    }

    with_new_token(&state, user)
}

/// GET /api/user
pub async fn current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.store.get_user(&auth.login).await?;

    Ok(Json(UserResponse {
        user: UserWithToken::new(user, auth.token),
    }))
}

/// PUT /api/user
pub async fn update_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Validated(req): Validated<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.store.update_user(&auth.login, &req.user).await?;

    if user.username != auth.login {
        tracing::info!("User {} renamed to {}", auth.login, user.username);
    }

    // The login may have changed, so the old token no longer identifies the user.
    with_new_token(&state, user)
}
