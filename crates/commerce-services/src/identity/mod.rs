//! # Identity Service
//!
//! Owns the [`User`](crate::model::User) records. It is the leaf of the call
//! graph: order and review call it to validate user ids; it calls nobody.
//!
//! ## Structure
//!
//! - [`service`] - [`IdentityService`] and its [`Service`](rpc_framework::Service) implementation
//! - [`calls`] - [`IdentityCall`] / [`IdentityReply`] wire messages
//! - [`error`] - [`IdentityError`] and its mapping onto [`Status`](rpc_framework::Status)
//! - [`new()`] - Factory function that creates the server and client
//!
//! ## Usage
//!
//! ```rust
//! use commerce_services::identity::{self, IdentityService};
//! use commerce_services::model::UserCreate;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (server, client) = identity::new();
//!     tokio::spawn(server.run(Arc::new(IdentityService::new())));
//!
//!     let user = client
//!         .create_user(UserCreate::new("alice@example.com", "Alice", "555-0100"))
//!         .await?;
//!     let auth = client.authenticate("alice@example.com").await?;
//!     assert_eq!(auth.user.id, user.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Random ids**: users get UUID v4 ids
//! - **Unique emails**: checked under the store's write lock
//! - **Placeholder auth**: `Authenticate` returns `dummy-token-<id>` without checking credentials

pub mod calls;
pub mod error;
pub mod service;

pub use calls::*;
pub use error::*;
pub use service::*;

use crate::clients::IdentityClient;
use rpc_framework::ServiceServer;

/// Creates a new identity server and its client.
pub fn new() -> (ServiceServer<IdentityService>, IdentityClient) {
    let (server, inner) = ServiceServer::new(32);
    (server, IdentityClient::new(inner))
}
