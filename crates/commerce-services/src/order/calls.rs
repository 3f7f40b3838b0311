//! Wire messages of the order service.

use crate::model::{Order, OrderCreate, OrderList, OrderUpdate};
use rpc_framework::Operation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "operation", content = "payload")]
pub enum OrderCall {
    CreateOrder(OrderCreate),
    GetOrder { id: String },
    UpdateOrder(OrderUpdate),
    ListOrders {
        #[serde(rename = "userId")]
        user_id: String,
    },
}

impl Operation for OrderCall {
    fn operation(&self) -> &'static str {
        match self {
            OrderCall::CreateOrder(_) => "CreateOrder",
            OrderCall::GetOrder { .. } => "GetOrder",
            OrderCall::UpdateOrder(_) => "UpdateOrder",
            OrderCall::ListOrders { .. } => "ListOrders",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderReply {
    Order(Order),
    Orders(OrderList),
}
