//! User account domain types.

use chrono::{DateTime, Utc};

use rustwear_core::{PasswordCredential, UserId, UserRole, Username};

/// A registered storefront account.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login name, unique across accounts.
    pub username: Username,
    /// Access level.
    pub role: UserRole,
    /// Salted password hash.
    pub credential: PasswordCredential,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a new account; the repository assigns the ID.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login name to register.
    pub username: Username,
    /// Access level for the new account.
    pub role: UserRole,
    /// Salted password hash derived at registration.
    pub credential: PasswordCredential,
}
