//! Error types for the review service.

use rpc_framework::Status;
use thiserror::Error;

/// Errors that can occur during review operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    /// The requested review was not found.
    #[error("review not found")]
    NotFound(String),

    /// The identity service could not confirm the reviewer.
    #[error("user not found: {0}")]
    InvalidUser(Status),

    /// The order service could not return the reviewed order.
    #[error("order not found: {0}")]
    InvalidOrder(Status),

    /// The order exists but its status is not exactly `confirmed`.
    #[error("order is not confirmed yet")]
    OrderNotConfirmed { order_id: String, status: String },
}

impl From<ReviewError> for Status {
    fn from(err: ReviewError) -> Self {
        match &err {
            ReviewError::NotFound(_) => Status::not_found(err.to_string()),
            ReviewError::InvalidUser(_) | ReviewError::InvalidOrder(_) => {
                Status::invalid_argument(err.to_string())
            }
            ReviewError::OrderNotConfirmed { .. } => Status::failed_precondition(err.to_string()),
        }
    }
}
