//! Error types for the identity service.

use rpc_framework::Status;
use thiserror::Error;

/// Errors that can occur during identity operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IdentityError {
    /// No user has the given id.
    #[error("user not found")]
    NotFound { id: String },

    /// No user has the given email.
    #[error("user not found")]
    UnknownEmail { email: String },

    /// The email is registered to another user.
    #[error("user with email {0} already exists")]
    EmailTaken(String),
}

impl From<IdentityError> for Status {
    fn from(err: IdentityError) -> Self {
        match &err {
            IdentityError::NotFound { .. } | IdentityError::UnknownEmail { .. } => {
                Status::not_found(err.to_string())
            }
            IdentityError::EmailTaken(_) => Status::already_exists(err.to_string()),
        }
    }
}
