use rpc_framework::Record;
use serde::{Deserialize, Serialize};

/// Represents a registered user in the system.
///
/// Owned by the identity service. Ids are random UUIDs; `email` is unique
/// among all stored users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone: String,
}

impl Record for User {
    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for creating a new user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
    pub phone: String,
}

impl UserCreate {
    pub fn new(email: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Result of a successful `Authenticate`.
///
/// The token is a placeholder (`dummy-token-<user id>`), not a credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    pub token: String,
    pub user: User,
}

impl AuthResult {
    pub fn for_user(user: User) -> Self {
        Self {
            token: format!("dummy-token-{}", user.id),
            user,
        }
    }
}
