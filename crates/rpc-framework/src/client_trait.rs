//! # RemoteClient Trait
//!
//! Common interface for service-specific clients (`OrderClient`,
//! `IdentityClient`, ...). A wrapper only has to expose its inner
//! [`ServiceClient`]; it inherits an instrumented `dispatch` that logs the
//! operation name and outcome, and builds its typed methods on top.
use crate::{Operation, Service, ServiceClient, Status};
use async_trait::async_trait;

/// Trait for service-specific clients.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct OrderClient {
///     inner: ServiceClient<OrderService>,
/// }
///
/// impl RemoteClient<OrderService> for OrderClient {
///     fn inner(&self) -> &ServiceClient<OrderService> {
///         &self.inner
///     }
/// }
///
/// impl OrderClient {
///     pub async fn get_order(&self, id: &str) -> Result<Order, Status> {
///         match self.dispatch(OrderCall::GetOrder { id: id.to_string() }).await? {
///             OrderReply::Order(order) => Ok(order),
///             other => Err(Status::unexpected_reply("GetOrder", &other)),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait RemoteClient<S: Service>: Send + Sync {
    /// Access the inner generic ServiceClient.
    fn inner(&self) -> &ServiceClient<S>;

    /// Send one call and wait for its result.
    async fn dispatch(&self, call: S::Call) -> Result<S::Reply, Status> {
        let operation = call.operation();
        tracing::debug!(service = S::NAME, operation, "Sending request");
        let result = self.inner().call(call).await;
        if let Err(status) = &result {
            tracing::debug!(service = S::NAME, operation, %status, "Request failed");
        }
        result
    }
}
