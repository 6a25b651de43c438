use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use blog_server::store::{DynStore, MemoryStore, PgStore};
use blog_server::{create_router, shutdown::shutdown_signal, Config, StoreKind};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let (store, pg): (DynStore, Option<PgStore>) = match config.store {
        StoreKind::Memory => {
            tracing::info!("Using in-memory store");
            (Arc::new(MemoryStore::new()), None)
        }
        StoreKind::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;
            let pg = PgStore::connect(url).await?;
            tracing::info!("Connected to PostgreSQL");
            (Arc::new(pg.clone()), Some(pg))
        }
    };

    let app = create_router(store, config.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal()?)
        .await?;

    if let Some(pg) = pg {
        pg.close().await;
    }

    Ok(())
}
