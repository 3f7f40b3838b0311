use chrono::{DateTime, Utc};
use rpc_framework::Record;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Lifecycle of a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Processing,
    Completed,
    Failed,
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaymentStatus::Processing => "processing",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        })
    }
}

/// One `ProcessPayment` attempt. Failed attempts are stored too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub user_id: String,
    pub amount: f64,
    pub payment_method: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for Payment {
    const KIND: &'static str = "Payment";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for `ProcessPayment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreate {
    pub order_id: String,
    pub user_id: String,
    pub amount: f64,
    pub payment_method: String,
}

/// A payment that has not been stored yet, so it has no id.
///
/// The id is assigned by the store at insert time, after the order update
/// has settled the final status.
#[derive(Debug, Clone)]
pub struct PendingPayment {
    params: PaymentCreate,
    status: PaymentStatus,
    created_at: DateTime<Utc>,
}

impl PendingPayment {
    pub fn new(params: PaymentCreate) -> Self {
        Self {
            params,
            status: PaymentStatus::Processing,
            created_at: Utc::now(),
        }
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn set_status(&mut self, status: PaymentStatus) {
        self.status = status;
    }

    pub fn into_payment(self, id: String) -> Payment {
        Payment {
            id,
            order_id: self.params.order_id,
            user_id: self.params.user_id,
            amount: self.params.amount,
            payment_method: self.params.payment_method,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
