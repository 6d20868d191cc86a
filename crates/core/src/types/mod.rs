//! Core types for Rustwear.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod id;
pub mod price;
pub mod role;
pub mod username;

pub use credential::PasswordCredential;
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use role::UserRole;
pub use username::{Username, UsernameError};
