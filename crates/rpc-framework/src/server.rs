//! # In-Process Service Server
//!
//! `ServiceServer` is the receiving half of the channel transport. It owns the
//! `mpsc` receiver and, once started with [`ServiceServer::run`], dispatches
//! every inbound [`Request`] to the service on its own Tokio task.
//!
//! Unlike a sequential actor loop, calls are handled **concurrently**: a slow
//! dependency call made while handling one request (e.g. the order service
//! waiting on identity) does not hold up other requests. The service is
//! responsible for its own locking, which in practice means its
//! [`RecordStore`](crate::RecordStore).
//!
//! # Usage Pattern
//!
//! 1. **Create**: `ServiceServer::new()` returns the server and a client.
//! 2. **Wire**: build the service with the clients of its dependencies.
//! 3. **Run**: spawn `server.run(Arc::new(service))`.
//!
//! Separating creation from `run` lets every client exist before any service
//! is constructed, so dependencies can be handed around freely.

use crate::client::ServiceClient;
use crate::error::Status;
use crate::message::Request;
use crate::service::{Operation, Service};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, info_span, warn, Instrument};

/// Receiving half of the in-process transport for service `S`.
pub struct ServiceServer<S: Service> {
    receiver: mpsc::Receiver<Request<S>>,
}

impl<S: Service> ServiceServer<S> {
    /// Creates a server and the client that feeds it.
    ///
    /// `buffer_size` is the channel capacity; when it is full, callers wait
    /// for space rather than failing.
    pub fn new(buffer_size: usize) -> (Self, ServiceClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { receiver }, ServiceClient::local(sender))
    }

    /// Serves requests until every client has been dropped.
    ///
    /// Requests still in flight when the channel closes are allowed to finish;
    /// their tasks own a clone of `service`.
    pub async fn run(mut self, service: Arc<S>) {
        info!(service = S::NAME, "Service started");

        while let Some(Request { call, respond_to }) = self.receiver.recv().await {
            let service = service.clone();
            let span = info_span!("rpc", service = S::NAME, operation = call.operation());

            tokio::spawn(
                async move {
                    let result = serve_call(service.as_ref(), call).await;
                    if respond_to.send(result).is_err() {
                        debug!("Caller went away before the reply");
                    }
                }
                .instrument(span),
            );
        }

        info!(service = S::NAME, "Shutdown");
    }
}

/// Runs one call against `service`, logging its payload and any failure.
///
/// Shared by the channel and HTTP transports so both log the same way.
pub(crate) async fn serve_call<S: Service>(
    service: &S,
    call: S::Call,
) -> Result<S::Reply, Status> {
    debug!(?call, "Handling");
    let result = service.handle(call).await;
    if let Err(status) = &result {
        warn!(code = %status.code(), error = %status.message(), "Call failed");
    }
    result
}
