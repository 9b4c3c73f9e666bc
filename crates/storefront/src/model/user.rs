use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a registered user of the store.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](storefront_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](storefront_framework::ResourceActor).
///
/// `isAdmin` is optional on the wire and defaults to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub is_admin: bool,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
}

impl User {
    /// Creates a regular (non-admin) user.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_admin: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_is_admin_means_regular_user() {
        let user: User = serde_json::from_str(r#"{ "id": 1, "name": "Irene" }"#).unwrap();
        assert_eq!(user, User::new(UserId(1), "Irene"));

        let admin: User =
            serde_json::from_str(r#"{ "id": 2, "name": "Irene", "isAdmin": true }"#).unwrap();
        assert!(admin.is_admin);
    }
}
