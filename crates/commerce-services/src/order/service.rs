use super::calls::{OrderCall, OrderReply};
use super::error::OrderError;
use crate::clients::IdentityClient;
use crate::model::{Order, OrderCreate, OrderList, OrderUpdate};
use async_trait::async_trait;
use rpc_framework::{RecordStore, Service, Status};
use tracing::{info, instrument, warn};

/// Owns order records. Validates users through the identity service.
pub struct OrderService {
    orders: RecordStore<Order>,
    identity: IdentityClient,
}

impl OrderService {
    pub fn new(identity: IdentityClient) -> Self {
        Self {
            orders: RecordStore::sequential("order"),
            identity,
        }
    }

    /// Places a `pending` order for an existing user.
    ///
    /// The user is validated before the store is touched; on any identity
    /// failure nothing is written.
    #[instrument(skip(self, params), fields(user_id = %params.user_id, items = params.items.len()))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        if let Err(status) = self.identity.get_user(&params.user_id).await {
            warn!(%status, "User validation failed");
            return Err(OrderError::InvalidUser(status));
        }

        let order = self
            .orders
            .insert_with(|id| Order::pending(id, params))
            .await;
        info!(order_id = %order.id, total = order.total_amount, "Order placed");
        Ok(order)
    }

    pub async fn get_order(&self, id: &str) -> Result<Order, OrderError> {
        self.orders
            .get(id)
            .await
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Overwrites the status with any non-empty value. No transition rules.
    #[instrument(skip(self))]
    pub async fn update_order(&self, update: OrderUpdate) -> Result<Order, OrderError> {
        let OrderUpdate { id, status } = update;
        let updated = self
            .orders
            .update(&id, |order| {
                if !status.is_empty() {
                    order.status = status;
                }
            })
            .await;
        updated.ok_or(OrderError::NotFound(id))
    }

    /// All orders of `user_id`, oldest first. An unknown user simply has none.
    pub async fn list_orders(&self, user_id: &str) -> OrderList {
        let mut orders = self.orders.filter(|order| order.user_id == user_id).await;
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        OrderList {
            total: orders.len(),
            orders,
        }
    }
}

#[async_trait]
impl Service for OrderService {
    const NAME: &'static str = "OrderService";
    type Call = OrderCall;
    type Reply = OrderReply;

    async fn handle(&self, call: OrderCall) -> Result<OrderReply, Status> {
        let reply = match call {
            OrderCall::CreateOrder(params) => OrderReply::Order(self.create_order(params).await?),
            OrderCall::GetOrder { id } => OrderReply::Order(self.get_order(&id).await?),
            OrderCall::UpdateOrder(update) => OrderReply::Order(self.update_order(update).await?),
            OrderCall::ListOrders { user_id } => {
                OrderReply::Orders(self.list_orders(&user_id).await)
            }
        };
        Ok(reply)
    }
}
