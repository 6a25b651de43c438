use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Identity carried inside a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    pub login: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: AuthData,
    pub exp: i64, // Expiration timestamp
    pub iat: i64, // Issued at timestamp
}

/// Issues and verifies HS256 bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    expires_in_secs: i64,
}

impl TokenService {
    pub fn new(secret: &str, expires_in_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expires_in_secs,
        }
    }

    pub fn issue(&self, data: &AuthData) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = Duration::try_seconds(self.expires_in_secs)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!(
                    "Token lifetime of {}s is out of range",
                    self.expires_in_secs
                ))
            })?;

        let claims = Claims {
            user: data.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create token: {}", e)))
    }

    /// Verifies signature and expiry and returns the embedded identity.
    pub fn parse(&self, token: &str) -> Result<AuthData, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::debug!("Token verification failed: {}", e);
            AppError::Unauthorized
        })?;

        Ok(token_data.claims.user)
    }
}
