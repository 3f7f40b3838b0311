//! # Payment Service
//!
//! Owns the [`Payment`](crate::model::Payment) records. Processing a payment
//! is the one saga step that mutates another service's state.
//!
//! ## ProcessPayment
//!
//! ```text
//! ProcessPayment(orderId, userId, amount, method)
//!   ├─ OrderService.GetOrder(orderId)               failure → InvalidArgument, nothing stored
//!   ├─ build payment "processing", then "completed"
//!   ├─ OrderService.UpdateOrder(orderId, "confirmed")
//!   │     failure → store payment as "failed", return Internal
//!   └─ store payment "completed", return it
//! ```
//!
//! A failed confirmation leaves a `failed` payment next to an order that is
//! still `pending`. Nothing reconciles the two.
//!
//! The amount is not compared with the order total, and an order may be paid
//! more than once.

pub mod calls;
pub mod error;
pub mod service;

pub use calls::*;
pub use error::*;
pub use service::*;

use crate::clients::PaymentClient;
use rpc_framework::ServiceServer;

/// Creates a new payment server and its client.
pub fn new() -> (ServiceServer<PaymentService>, PaymentClient) {
    let (server, inner) = ServiceServer::new(32);
    (server, PaymentClient::new(inner))
}
