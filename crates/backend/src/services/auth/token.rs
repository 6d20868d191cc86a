//! Identity token issuance.
//!
//! Tokens are HS256-signed JWTs bound to a user; the signing secret is
//! server-held configuration, validated at startup. Validating incoming
//! tokens is the HTTP layer's concern, so only issuance lives here.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::TokenError;
use crate::config::AuthConfig;
use crate::models::User;

/// Claim set embedded in issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer.
    pub iss: String,
    /// Subject: the user id.
    pub sub: String,
    /// Login name of the subject.
    pub username: String,
    /// Role of the subject.
    pub role: String,
    /// Issued at (seconds since epoch).
    pub iat: i64,
    /// Expiration time (seconds since epoch).
    pub exp: i64,
    /// Token id, unique per issuance.
    pub jti: String,
}

/// Issues signed identity tokens.
///
/// Stateless; one signer can be shared across concurrent callers.
pub struct TokenSigner {
    key: EncodingKey,
    issuer: String,
    ttl_secs: i64,
}

impl TokenSigner {
    /// Create a signer from validated configuration.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            key: EncodingKey::from_secret(config.token_secret.expose_secret().as_bytes()),
            issuer: config.token_issuer.clone(),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Produce a signed, tamper-evident token for an authenticated user.
    ///
    /// Claim content is deterministic for a fixed user and signing key;
    /// `iat`, `exp` and `jti` vary per issuance.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if claim encoding or signing fails.
    pub fn generate_token(&self, user: &User) -> Result<String, TokenError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            iss: self.issuer.clone(),
            sub: user.id.to_string(),
            username: user.username.to_string(),
            role: user.role.to_string(),
            iat,
            exp: iat.saturating_add(self.ttl_secs),
            jti: Uuid::new_v4().to_string(),
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.key,
        )?)
    }
}
