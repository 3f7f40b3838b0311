//! # Generic Client
//!
//! `ServiceClient<S>` is the calling side of a service. It does not know how
//! calls travel; that is the job of a [`Transport`]:
//!
//! - [`ChannelTransport`]: Tokio `mpsc` + `oneshot`, for services running in
//!   the same process (see [`ServiceServer`](crate::ServiceServer)).
//! - [`HttpTransport`](crate::http::HttpTransport): JSON over HTTP, for
//!   services running as separate processes.
//! - [`MockClient`](crate::mock::MockClient): scripted replies for tests.
//!
//! Calls are awaited with no deadline. A dependency that never answers keeps
//! the caller waiting.

use crate::error::Status;
use crate::message::Request;
use crate::service::Service;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Moves a call to a service and brings back its result.
#[async_trait]
pub trait Transport<S: Service>: Send + Sync {
    async fn send(&self, call: S::Call) -> Result<S::Reply, Status>;
}

/// In-process transport backed by a channel to a [`ServiceServer`](crate::ServiceServer).
pub struct ChannelTransport<S: Service> {
    sender: mpsc::Sender<Request<S>>,
}

impl<S: Service> ChannelTransport<S> {
    pub fn new(sender: mpsc::Sender<Request<S>>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl<S: Service> Transport<S> for ChannelTransport<S> {
    async fn send(&self, call: S::Call) -> Result<S::Reply, Status> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Request { call, respond_to })
            .await
            .map_err(|_| Status::unavailable(format!("{} is not running", S::NAME)))?;
        response
            .await
            .map_err(|_| Status::unavailable(format!("{} dropped the call", S::NAME)))?
    }
}

/// A cloneable handle for calling service `S`.
pub struct ServiceClient<S: Service> {
    transport: Arc<dyn Transport<S>>,
}

impl<S: Service> Clone for ServiceClient<S> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

impl<S: Service> ServiceClient<S> {
    pub fn new(transport: Arc<dyn Transport<S>>) -> Self {
        Self { transport }
    }

    /// Client for a server in this process.
    pub fn local(sender: mpsc::Sender<Request<S>>) -> Self {
        Self::new(Arc::new(ChannelTransport::new(sender)))
    }

    /// Client for a service reachable at `addr` (`host:port` or a full
    /// `http://` URL).
    pub fn http(addr: &str) -> Self {
        Self::new(Arc::new(crate::http::HttpTransport::new(addr)))
    }

    pub async fn call(&self, call: S::Call) -> Result<S::Reply, Status> {
        self.transport.send(call).await
    }
}
