//! Error types for the order service.

use rpc_framework::Status;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("order not found")]
    NotFound(String),

    /// The identity service could not confirm the user. Carries the
    /// dependency's failure, whatever its kind.
    #[error("user not found: {0}")]
    InvalidUser(Status),
}

impl From<OrderError> for Status {
    fn from(err: OrderError) -> Self {
        match &err {
            OrderError::NotFound(_) => Status::not_found(err.to_string()),
            OrderError::InvalidUser(_) => Status::invalid_argument(err.to_string()),
        }
    }
}
