//! # Order Service
//!
//! Owns the [`Order`](crate::model::Order) records and depends on the
//! identity service to validate the user placing an order.
//!
//! ## Structure
//!
//! - [`service`] - [`OrderService`] and its [`Service`](rpc_framework::Service) implementation
//! - [`calls`] - [`OrderCall`] / [`OrderReply`] wire messages
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the server and client
//!
//! ## CreateOrder
//!
//! ```text
//! CreateOrder(userId, items)
//!   ├─ IdentityService.GetUser(userId)   any failure → InvalidArgument, nothing written
//!   ├─ total = Σ price × quantity
//!   └─ insert as order_<n>, status "pending"
//! ```
//!
//! `UpdateOrder` overwrites the status with any non-empty value; the payment
//! service uses it to set `confirmed`.

pub mod calls;
pub mod error;
pub mod service;

pub use calls::*;
pub use error::*;
pub use service::*;

use crate::clients::OrderClient;
use rpc_framework::ServiceServer;

/// Creates a new order server and its client.
pub fn new() -> (ServiceServer<OrderService>, OrderClient) {
    let (server, inner) = ServiceServer::new(32);
    (server, OrderClient::new(inner))
}
