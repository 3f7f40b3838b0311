//! # Order Client
//!
//! Provides a high-level API for calling the order service. Used by the
//! payment and review services for their saga steps.
use crate::model::{Order, OrderCreate, OrderList, OrderUpdate};
use crate::order::{OrderCall, OrderReply, OrderService};
use rpc_framework::{RemoteClient, ServiceClient, Status};
use tracing::instrument;

/// Client for the order service.
#[derive(Clone)]
pub struct OrderClient {
    inner: ServiceClient<OrderService>,
}

impl OrderClient {
    pub fn new(inner: ServiceClient<OrderService>) -> Self {
        Self { inner }
    }

    /// Client for an order service listening at `addr`.
    pub fn connect(addr: &str) -> Self {
        Self::new(ServiceClient::http(addr))
    }

    #[instrument(skip(self, params), fields(user_id = %params.user_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, Status> {
        match self.dispatch(OrderCall::CreateOrder(params)).await? {
            OrderReply::Order(order) => Ok(order),
            other => Err(Status::unexpected_reply("CreateOrder", &other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: &str) -> Result<Order, Status> {
        match self
            .dispatch(OrderCall::GetOrder { id: id.to_string() })
            .await?
        {
            OrderReply::Order(order) => Ok(order),
            other => Err(Status::unexpected_reply("GetOrder", &other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: &str, status: &str) -> Result<Order, Status> {
        let update = OrderUpdate {
            id: id.to_string(),
            status: status.to_string(),
        };
        match self.dispatch(OrderCall::UpdateOrder(update)).await? {
            OrderReply::Order(order) => Ok(order),
            other => Err(Status::unexpected_reply("UpdateOrder", &other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self, user_id: &str) -> Result<OrderList, Status> {
        match self
            .dispatch(OrderCall::ListOrders {
                user_id: user_id.to_string(),
            })
            .await?
        {
            OrderReply::Orders(list) => Ok(list),
            other => Err(Status::unexpected_reply("ListOrders", &other)),
        }
    }
}

impl RemoteClient<OrderService> for OrderClient {
    fn inner(&self) -> &ServiceClient<OrderService> {
        &self.inner
    }
}
