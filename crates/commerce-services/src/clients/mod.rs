//! Typed wrappers around [`ServiceClient`](rpc_framework::ServiceClient), one per service.
//!
//! Each wrapper turns a `Call`/`Reply` pair into a plain async method. A reply
//! of the wrong variant becomes an `Internal` status instead of a panic.

pub mod identity_client;
pub mod order_client;
pub mod payment_client;
pub mod review_client;

pub use identity_client::*;
pub use order_client::*;
pub use payment_client::*;
pub use review_client::*;
