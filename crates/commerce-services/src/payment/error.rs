//! Error types for the payment service.

use rpc_framework::Status;
use thiserror::Error;

/// Errors that can occur during payment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The requested payment was not found.
    #[error("payment not found")]
    NotFound(String),

    /// The order service could not return the order being paid.
    #[error("order not found: {0}")]
    InvalidOrder(Status),

    /// The order could not be confirmed after the payment completed. The
    /// payment is stored as `failed` under `payment_id`.
    #[error("failed to update order status: {status}")]
    OrderUpdateFailed { payment_id: String, status: Status },
}

impl From<PaymentError> for Status {
    fn from(err: PaymentError) -> Self {
        match &err {
            PaymentError::NotFound(_) => Status::not_found(err.to_string()),
            PaymentError::InvalidOrder(_) => Status::invalid_argument(err.to_string()),
            PaymentError::OrderUpdateFailed { .. } => Status::internal(err.to_string()),
        }
    }
}
