//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for a service process.
//!
//! The compact format hides the module prefix (`with_target(false)`); spans
//! carry the context instead. Every handled call runs inside an `rpc` span
//! with `service` and `operation` fields, so a saga reads top to bottom:
//!
//! ```text
//! INFO rpc{service="PaymentService" operation="ProcessPayment"}: Created entity_type="Payment" id="payment_1" size=1
//! WARN rpc{service="PaymentService" operation="ProcessPayment"}: Call failed code=Internal ...
//! ```
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --bin order-service    # one line per create/update
//! RUST_LOG=debug cargo run --bin order-service   # full call payloads
//! ```
//!
//! Without `RUST_LOG`, the filter defaults to `info`.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}
