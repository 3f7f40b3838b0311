//! Order records and their payloads.
//!
//! Status travels as a plain string; [`order_status`] names the two values the
//! workflow itself writes and reads.

use chrono::{DateTime, Utc};
use rpc_framework::Record;
use serde::{Deserialize, Serialize};

/// Well-known order statuses.
pub mod order_status {
    /// Every order starts here.
    pub const PENDING: &str = "pending";
    /// Set by the payment service once a payment completes. Reviews require it.
    pub const CONFIRMED: &str = "confirmed";
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub status: String,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// A fresh `pending` order whose total is the sum of its item subtotals.
    pub fn pending(id: String, params: OrderCreate) -> Self {
        let total_amount = params.items.iter().map(OrderItem::subtotal).sum();
        Self {
            id,
            user_id: params.user_id,
            items: params.items,
            status: order_status::PENDING.to_string(),
            total_amount,
            created_at: Utc::now(),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == order_status::CONFIRMED
    }
}

impl Record for Order {
    const KIND: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub user_id: String,
    pub items: Vec<OrderItem>,
}

/// Payload for `UpdateOrder`. An empty `status` leaves the order unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub id: String,
    pub status: String,
}

/// Result of `ListOrders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
    pub total: usize,
}
