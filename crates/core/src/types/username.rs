//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// The input string is empty.
    #[error("username cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside the allowed set.
    #[error("username may only contain letters, digits, '.', '_' and '-' (found {found:?})")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
}

/// A login name.
///
/// Usernames are case-insensitive; parsing normalizes them to lowercase so
/// lookups and uniqueness checks need no further folding.
///
/// ## Constraints
///
/// - Length: 1-32 characters
/// - ASCII letters, digits, `.`, `_`, `-` only
///
/// ## Examples
///
/// ```
/// use rustwear_core::Username;
///
/// assert!(Username::parse("freja.holm").is_ok());
/// assert_eq!(Username::parse("Freja").unwrap().as_str(), "freja");
///
/// assert!(Username::parse("").is_err());
/// assert!(Username::parse("freja holm").is_err()); // space
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Maximum length of a username.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `Username` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 32 characters
    /// - Contains a character outside ASCII letters, digits, `.`, `_`, `-`
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        if s.is_empty() {
            return Err(UsernameError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        for c in s.chars() {
            if !c.is_ascii_alphanumeric() && !matches!(c, '.' | '_' | '-') {
                return Err(UsernameError::InvalidCharacter { found: c });
            }
        }

        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_usernames() {
        assert!(Username::parse("freja").is_ok());
        assert!(Username::parse("freja.holm").is_ok());
        assert!(Username::parse("freja_holm-2").is_ok());
        assert!(Username::parse("F").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Username::parse(""), Err(UsernameError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(33);
        assert!(matches!(
            Username::parse(&long),
            Err(UsernameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_character() {
        assert!(matches!(
            Username::parse("freja holm"),
            Err(UsernameError::InvalidCharacter { found: ' ' })
        ));
        assert!(matches!(
            Username::parse("freja@holm"),
            Err(UsernameError::InvalidCharacter { found: '@' })
        ));
    }

    #[test]
    fn test_parse_lowercases() {
        let username = Username::parse("FrejaHolm").unwrap();
        assert_eq!(username.as_str(), "frejaholm");
    }

    #[test]
    fn test_display() {
        let username = Username::parse("freja").unwrap();
        assert_eq!(format!("{username}"), "freja");
    }

    #[test]
    fn test_from_str() {
        let username: Username = "freja".parse().unwrap();
        assert_eq!(username.as_str(), "freja");
    }

    #[test]
    fn test_serde_roundtrip() {
        let username = Username::parse("freja").unwrap();
        let json = serde_json::to_string(&username).unwrap();
        assert_eq!(json, "\"freja\"");

        let parsed: Username = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, username);
    }
}
