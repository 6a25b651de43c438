use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::auth::{auth_middleware, TokenService};
use crate::handlers::{articles as article_handlers, users as user_handlers};
use crate::store::DynStore;
use crate::Config;

#[derive(Clone)]
pub struct AppState {
    pub store: DynStore,
    pub tokens: TokenService,
    pub config: Config,
}

pub fn create_router(store: DynStore, config: Config) -> Router {
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_expires_in);
    let state = AppState {
        store,
        tokens,
        config,
    };

    // Public routes (no middleware)
    let public_routes = Router::new()
        .route("/articles/:slug", get(article_handlers::get_article))
        .route("/users", post(user_handlers::register))
        .route("/users/login", post(user_handlers::login));

    // Protected routes. The gate sits on each method router so that an
    // unsupported method still answers 405 without a token.
    let auth = middleware::from_fn_with_state(state.clone(), auth_middleware);
    let protected_routes = Router::new()
        .route(
            "/articles",
            post(article_handlers::create_article).route_layer(auth.clone()),
        )
        .route(
            "/user",
            get(user_handlers::current_user)
                .put(user_handlers::update_user)
                .route_layer(auth),
        );

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", public_routes.merge(protected_routes))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
