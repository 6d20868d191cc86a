//! Authentication configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `RUSTWEAR_TOKEN_SECRET` - Token signing secret (min 32 chars, high entropy)
//!
//! ## Optional
//! - `RUSTWEAR_TOKEN_ISSUER` - Issuer claim for issued tokens (default: rustwear)
//! - `RUSTWEAR_TOKEN_TTL_SECS` - Lifetime of issued tokens in seconds (default: 86400)

use std::collections::HashMap;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_TOKEN_SECRET_LENGTH: usize = 32;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

const DEFAULT_TOKEN_ISSUER: &str = "rustwear";
const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;

/// Substrings that mark a secret as a template leftover (case-insensitive).
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Authentication configuration.
///
/// Construction validates the signing secret: a missing or weak secret is a
/// startup failure, never a per-request error.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token signing secret
    pub token_secret: SecretString,
    /// Issuer claim for issued tokens
    pub token_issuer: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the signing secret is missing or fails
    /// validation (length, placeholder detection, entropy check), or if an
    /// optional variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine, the variables may be set directly
        let _ = dotenvy::dotenv();

        let token_secret = SecretString::from(get_required_env("RUSTWEAR_TOKEN_SECRET")?);
        let token_issuer = get_env_or_default("RUSTWEAR_TOKEN_ISSUER", DEFAULT_TOKEN_ISSUER);
        let ttl_secs = get_env_or_default(
            "RUSTWEAR_TOKEN_TTL_SECS",
            &DEFAULT_TOKEN_TTL_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("RUSTWEAR_TOKEN_TTL_SECS".to_string(), e.to_string())
        })?;

        Self::new(token_secret, token_issuer, Duration::from_secs(ttl_secs))
    }

    /// Build a configuration from already-loaded values, validating the
    /// signing secret.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InsecureSecret` if the secret is too short,
    /// looks like a placeholder, or has low entropy.
    pub fn new(
        token_secret: SecretString,
        token_issuer: String,
        token_ttl: Duration,
    ) -> Result<Self, ConfigError> {
        validate_token_secret(&token_secret, "RUSTWEAR_TOKEN_SECRET")?;

        Ok(Self {
            token_secret,
            token_issuer,
            token_ttl,
        })
    }

    /// Token lifetime in whole seconds, saturating at `i64::MAX`.
    #[must_use]
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reject signing secrets that are too short to resist brute force.
fn validate_token_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_TOKEN_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "needs at least {MIN_TOKEN_SECRET_LENGTH} characters, got {}",
                value.len()
            ),
        ));
    }

    validate_secret_strength(value, var_name)
}

/// Shannon entropy of the string, in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // secrets are far shorter than 2^52
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // bounded by string length
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Reject secrets that look like template leftovers or lack entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("looks like a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}); generate the secret randomly"
            ),
        ));
    }

    Ok(())
}
