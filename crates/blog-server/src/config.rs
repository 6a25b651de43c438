use std::env;

use anyhow::{bail, Context};

/// Upper bound for token lifetime: one year.
const MAX_EXPIRES_IN: i64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Postgres,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub store: StoreKind,
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
    pub auth_scheme: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").ok();

        let store = match env::var("STORE").ok().as_deref() {
            Some("memory") => StoreKind::Memory,
            Some("postgres") => StoreKind::Postgres,
            Some(other) => bail!("unknown STORE {:?}, expected memory or postgres", other),
            None if database_url.is_some() => StoreKind::Postgres,
            None => StoreKind::Memory,
        };

        if store == StoreKind::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when STORE=postgres");
        }

        Ok(Self {
            database_url,
            store,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_expires_in: parse_expires_in(
                &env::var("JWT_EXPIRES_IN").unwrap_or_else(|_| "1800".to_string()), // 30 minutes
            )?,
            auth_scheme: env::var("AUTH_SCHEME").unwrap_or_else(|_| "Token".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
        })
    }
}

fn parse_expires_in(value: &str) -> anyhow::Result<i64> {
    let secs: i64 = value
        .trim()
        .parse()
        .context("JWT_EXPIRES_IN must be a number of seconds")?;

    if secs <= 0 || secs > MAX_EXPIRES_IN {
        bail!("JWT_EXPIRES_IN must be between 1 and {} seconds, got {}", MAX_EXPIRES_IN, secs);
    }

    Ok(secs)
}
