//! # Service Trait
//!
//! The `Service` trait is the contract between the generic plumbing (servers,
//! clients, transports) and a concrete service such as the order service.
//!
//! A service declares two enums through associated types:
//!
//! - `Call`: one variant per operation, carrying the request fields.
//! - `Reply`: the successful results those operations can produce.
//!
//! and one async entry point, [`Service::handle`], that dispatches a call to
//! the matching business operation. Everything else (channels, HTTP, JSON,
//! logging spans) is written once in this crate and works for every service.
//!
//! Because `Call` and `Reply` are associated types, an order client can only
//! send `OrderCall`s and only receives `OrderReply`s; sending an identity
//! request to the order service does not compile.

use crate::error::Status;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A call payload that knows its operation name (`"CreateOrder"`, ...).
pub trait Operation {
    fn operation(&self) -> &'static str;
}

/// A service that handles typed calls.
///
/// # Wire format
/// `Call` and `Reply` must be serde types. The conventional encoding is an
/// adjacently tagged enum:
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// #[serde(tag = "operation", content = "payload")]
/// pub enum OrderCall {
///     GetOrder { id: String },
///     ...
/// }
/// ```
///
/// which puts `{"operation": "GetOrder", "payload": {"id": "order_1"}}` on the
/// wire for the HTTP transport.
#[async_trait]
pub trait Service: Send + Sync + 'static {
    /// Name used in logs and the health endpoint, e.g. `"OrderService"`.
    const NAME: &'static str;

    /// Inbound request enum.
    type Call: Operation + Debug + Send + Serialize + DeserializeOwned + 'static;

    /// Successful result enum.
    type Reply: Debug + Send + Serialize + DeserializeOwned + 'static;

    /// Handle one inbound call.
    ///
    /// Called concurrently from many tasks; implementations guard their own
    /// state (see [`RecordStore`](crate::RecordStore)).
    async fn handle(&self, call: Self::Call) -> Result<Self::Reply, Status>;
}
