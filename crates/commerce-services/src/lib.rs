//! # Commerce Services
//!
//! Four services that cooperate over synchronous calls to carry a purchase:
//!
//! - **[identity]**: users; the leaf of the call graph
//! - **[order]**: orders; validates users through identity
//! - **[payment]**: payments; reads and then confirms orders
//! - **[review]**: reviews of confirmed orders; validates user and order
//!
//! Supporting modules:
//!
//! - **[model]**: the records and request payloads
//! - **[clients]**: typed clients, one per service
//! - **[lifecycle]**: wiring all services in one process, configuration, signals
//!
//! Each service keeps its own in-memory store. Nothing is shared; another
//! service's data is only ever reached through its client.

pub mod clients;
pub mod identity;
pub mod lifecycle;
pub mod model;
pub mod order;
pub mod payment;
pub mod review;
