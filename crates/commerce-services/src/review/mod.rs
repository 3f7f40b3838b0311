//! # Review Service
//!
//! Owns the [`Review`](crate::model::Review) records. Depends on both the
//! identity and the order service.
//!
//! ```text
//! CreateReview(userId, orderId, rating, comment)
//!   ├─ IdentityService.GetUser(userId)   failure → InvalidArgument
//!   ├─ OrderService.GetOrder(orderId)    failure → InvalidArgument
//!   ├─ order.status != "confirmed"       → FailedPrecondition
//!   └─ insert as review_<n>
//! ```

pub mod calls;
pub mod error;
pub mod service;

pub use calls::*;
pub use error::*;
pub use service::*;

use crate::clients::ReviewClient;
use rpc_framework::ServiceServer;

/// Creates a new review server and its client.
pub fn new() -> (ServiceServer<ReviewService>, ReviewClient) {
    let (server, inner) = ServiceServer::new(32);
    (server, ReviewClient::new(inner))
}
