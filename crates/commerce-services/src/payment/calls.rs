//! Wire messages of the payment service.

use crate::model::{Payment, PaymentCreate};
use rpc_framework::Operation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "operation", content = "payload")]
pub enum PaymentCall {
    ProcessPayment(PaymentCreate),
    GetPaymentStatus {
        #[serde(rename = "paymentId")]
        payment_id: String,
    },
}

impl Operation for PaymentCall {
    fn operation(&self) -> &'static str {
        match self {
            PaymentCall::ProcessPayment(_) => "ProcessPayment",
            PaymentCall::GetPaymentStatus { .. } => "GetPaymentStatus",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaymentReply {
    Payment(Payment),
}
