//! Authentication service.
//!
//! Provides password hashing, identity token issuance, and the
//! register/login account flow.

mod error;
pub mod password;
pub mod token;

pub use error::{AuthError, TokenError};
pub use token::{Claims, TokenSigner};

use tracing::{debug, instrument};

use rustwear_core::{UserRole, Username};

use crate::models::{NewUser, User};
use crate::repository::{RepositoryError, UserRepository};

use password::{create_password_hash, verify_password_hash};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Account service.
///
/// Handles user registration and login, issuing a signed identity token on
/// successful login. Holds no per-call state; one instance can be shared
/// across concurrent callers.
pub struct AccountService<R> {
    users: R,
    signer: TokenSigner,
}

impl<R: UserRepository> AccountService<R> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(users: R, signer: TokenSigner) -> Self {
        Self { users, signer }
    }

    /// Register a new customer account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username fails parsing.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UsernameTaken` if the username is already registered.
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        // Validate username
        let username = Username::parse(username)?;

        // Validate password
        validate_password(password)?;

        // Hash password
        let credential = create_password_hash(password)?;

        // Create user
        let user = self
            .users
            .create(NewUser {
                username,
                role: UserRole::Customer,
                credential,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UsernameTaken,
                other => AuthError::Repository(other),
            })?;

        debug!(user_id = %user.id, "account registered");

        Ok(user)
    }

    /// Login with username and password, returning a signed identity token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username/password is
    /// wrong; unknown users and bad passwords are indistinguishable to the
    /// caller.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        // Validate username format
        let username = Username::parse(username)?;

        // Get user with stored credential
        let Some(user) = self.users.find_by_username(&username).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        // Verify password
        if !verify_password_hash(password, &user.credential) {
            return Err(AuthError::InvalidCredentials);
        }

        debug!(user_id = %user.id, "login verified, issuing token");

        Ok(self.signer.generate_token(&user)?)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}
