//! Password credential types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A salted password hash owned by a user record.
///
/// Created at registration and never decrypted: the salt is random per
/// user and the hash is derived under that salt, so neither is ever reused
/// across users. The raw bytes are serialized as base64 strings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCredential {
    #[serde(with = "base64_bytes")]
    hash: Vec<u8>,
    #[serde(with = "base64_bytes")]
    salt: Vec<u8>,
}

impl PasswordCredential {
    /// Create a credential from derived hash bytes and the salt used.
    #[must_use]
    pub const fn new(hash: Vec<u8>, salt: Vec<u8>) -> Self {
        Self { hash, salt }
    }

    /// The derived hash bytes.
    #[must_use]
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// The per-user salt bytes.
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }
}

impl fmt::Debug for PasswordCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordCredential")
            .field("hash", &"[REDACTED]")
            .field("salt", &"[REDACTED]")
            .finish()
    }
}

mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(D::Error::custom)
    }
}
