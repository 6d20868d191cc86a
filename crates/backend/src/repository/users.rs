//! User repository interface.

use async_trait::async_trait;

use rustwear_core::{UserId, Username};

use super::RepositoryError;
use crate::models::{NewUser, User};

/// Identity-keyed CRUD persistence for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new account and assign its identity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username is already
    /// registered.
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// Fetch an account by ID, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn read(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Fetch an account by username, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn find_by_username(&self, username: &Username)
    -> Result<Option<User>, RepositoryError>;

    /// Replace a stored account record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn update(&self, user: User) -> Result<User, RepositoryError>;

    /// Remove an account, returning the removed record or `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the storage engine fails.
    async fn delete(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
}
