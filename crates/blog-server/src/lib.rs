pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod shutdown;
pub mod store;
pub mod validation;

pub use config::{Config, StoreKind};
pub use routes::{create_router, AppState};
