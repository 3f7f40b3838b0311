//! # Channel Messages
//!
//! Message type used by the in-process transport between a
//! [`ServiceClient`](crate::ServiceClient) and a [`ServiceServer`](crate::ServiceServer).

use crate::error::Status;
use crate::service::Service;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by servers.
pub type Response<T> = oneshot::Sender<Result<T, Status>>;

/// One inbound call plus the channel its result goes back on.
#[derive(Debug)]
pub struct Request<S: Service> {
    pub call: S::Call,
    pub respond_to: Response<S::Reply>,
}
