//! # Record Trait
//!
//! A `Record` is anything a service keeps in its [`RecordStore`](crate::RecordStore):
//! users, orders, payments, reviews. Records are plain data. They are cloned
//! out of the store on every read, so a caller never holds a reference into
//! another service's state and only ids cross the service boundary.

use std::fmt::Debug;

/// Contract for values held in a [`RecordStore`](crate::RecordStore).
///
/// `KIND` names the record in logs (`entity_type = "Order"`) and is the
/// conventional prefix for sequential ids (`order_1`, `order_2`, ...).
pub trait Record: Clone + Send + Sync + Debug + 'static {
    /// Human readable record kind, e.g. `"Order"`.
    const KIND: &'static str;

    /// The identifier the record is stored under.
    fn id(&self) -> &str;
}
