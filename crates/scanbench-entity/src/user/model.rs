//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table, including the stored password hash.
///
/// Only used internally for credential verification; anything returned to
/// a caller goes through [`UserProfile`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Storage-generated identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// One-way password hash.
    pub password: String,
    /// Email address.
    pub email: Option<String>,
}

impl User {
    /// Drop the hash, keeping the publishable fields.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }
}

/// The non-secret projection of a user: exactly `{id, username, email}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    /// Storage-generated identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: Option<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        user.into_profile()
    }
}
