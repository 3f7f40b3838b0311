//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the services, either all together inside one
//! process ([`CommerceSystem`]) or one per process behind HTTP ([`serve`]).
//!
//! ## The CommerceSystem Pattern
//!
//! ```rust,ignore
//! // 1. Create every server and client (no dependencies yet)
//! let (identity_server, identity_client) = identity::new();
//! let (order_server, order_client) = order::new();
//! let (payment_server, payment_client) = payment::new();
//! let (review_server, review_client) = review::new();
//!
//! // 2. Build each service with the clients it calls, and start it
//! tokio::spawn(identity_server.run(Arc::new(IdentityService::new())));
//! tokio::spawn(order_server.run(Arc::new(OrderService::new(identity_client.clone()))));
//! tokio::spawn(payment_server.run(Arc::new(PaymentService::new(order_client.clone()))));
//! tokio::spawn(review_server.run(Arc::new(ReviewService::new(
//!     identity_client.clone(),
//!     order_client.clone(),
//! ))));
//! ```
//!
//! Creating every client first means a service never needs its dependency to
//! be running at construction time, only when it makes a call.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** held by the system
//! 2. **Leaves stop first** - nobody else holds the review or payment clients, so
//!    their channels close and their servers return, dropping the order and
//!    identity clients their services held
//! 3. **The rest follow** - order, then identity, once their last client is gone
//! 4. **Await completion** - wait for every server task
//!
//! This relies on the call graph being acyclic, which it is:
//! Review → Order → Identity, Review → Identity, Payment → Order.
//!
//! ## Separate Processes
//!
//! Each `*-service` binary reads a [`ServiceConfig`], connects HTTP clients to
//! its dependencies and calls [`serve`] until SIGINT or SIGTERM.

pub mod config;
pub mod signal;

pub use config::*;
pub use signal::*;

use crate::clients::{IdentityClient, OrderClient, PaymentClient, ReviewClient};
use crate::identity::{self, IdentityService};
use crate::order::{self, OrderService};
use crate::payment::{self, PaymentService};
use crate::review::{self, ReviewService};
use rpc_framework::{http, Service};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::{JoinError, JoinHandle};
use tracing::info;

/// All four services running in this process over channel transport.
pub struct CommerceSystem {
    pub identity_client: IdentityClient,
    pub order_client: OrderClient,
    pub payment_client: PaymentClient,
    pub review_client: ReviewClient,
    handles: Vec<JoinHandle<()>>,
}

impl CommerceSystem {
    /// Creates and starts every service. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (identity_server, identity_client) = identity::new();
        let (order_server, order_client) = order::new();
        let (payment_server, payment_client) = payment::new();
        let (review_server, review_client) = review::new();

        let identity_handle = tokio::spawn(identity_server.run(Arc::new(IdentityService::new())));
        let order_handle = tokio::spawn(
            order_server.run(Arc::new(OrderService::new(identity_client.clone()))),
        );
        let payment_handle = tokio::spawn(
            payment_server.run(Arc::new(PaymentService::new(order_client.clone()))),
        );
        let review_handle = tokio::spawn(review_server.run(Arc::new(ReviewService::new(
            identity_client.clone(),
            order_client.clone(),
        ))));

        info!("All services started");

        Self {
            identity_client,
            order_client,
            payment_client,
            review_client,
            handles: vec![identity_handle, order_handle, payment_handle, review_handle],
        }
    }

    /// Stops every service and waits for them to finish.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        let Self {
            identity_client,
            order_client,
            payment_client,
            review_client,
            handles,
        } = self;
        drop(review_client);
        drop(payment_client);
        drop(order_client);
        drop(identity_client);

        for handle in handles {
            handle.await?;
        }
        info!("All services stopped");
        Ok(())
    }
}

impl Default for CommerceSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Serves `service` over HTTP on `listen_addr` until SIGINT or SIGTERM.
pub async fn serve<S: Service>(service: S, listen_addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    http::serve(Arc::new(service), listener, shutdown_signal()).await?;
    info!(service = S::NAME, "Server shut down gracefully");
    Ok(())
}
