//! Plain data records owned by the services, plus their request payloads.
//!
//! Records cross service boundaries only as copies; a service refers to
//! another service's records by id.

pub mod order;
pub mod payment;
pub mod review;
pub mod user;

pub use order::*;
pub use payment::*;
pub use review::*;
pub use user::*;
