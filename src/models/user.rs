//! This file defines a user of the application and its supporting types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::models::PasswordHash;

/// A newtype wrapper for integer user IDs.
/// This helps disambiguate user IDs from other types of IDs, leading to better compile time
/// errors, and more flexible generics that can have distinct implementations for multiple ID types.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserID(i64);

impl UserID {
    /// Create a user ID from a raw integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The underlying integer ID.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A user of the application.
///
/// Serializing a user produces only its ID and username; the password hash
/// never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    id: UserID,
    username: String,
    #[serde(skip)]
    password_hash: PasswordHash,
}

impl User {
    /// Create a user from its parts.
    ///
    /// This is intended for stores reading rows out of the database. To add a
    /// new user, see [crate::stores::UserStore::create].
    pub fn new(id: UserID, username: String, password_hash: PasswordHash) -> Self {
        Self {
            id,
            username,
            password_hash,
        }
    }

    /// The user's ID in the database.
    pub fn id(&self) -> UserID {
        self.id
    }

    /// The name the user signs in with.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The user's salted password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
