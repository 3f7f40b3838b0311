use super::calls::{PaymentCall, PaymentReply};
use super::error::PaymentError;
use crate::clients::OrderClient;
use crate::model::{order_status, Payment, PaymentCreate, PaymentStatus, PendingPayment};
use async_trait::async_trait;
use rpc_framework::{RecordStore, Service, Status};
use tracing::{error, info, instrument, warn};

/// Owns payment records. Confirms orders through the order service.
pub struct PaymentService {
    payments: RecordStore<Payment>,
    orders: OrderClient,
}

impl PaymentService {
    pub fn new(orders: OrderClient) -> Self {
        Self {
            payments: RecordStore::sequential("payment"),
            orders,
        }
    }

    /// Charges an order and confirms it.
    ///
    /// The store is locked only for the final insert, never across a call
    /// to the order service. If the order cannot be confirmed, the payment
    /// is stored as `failed` and `Internal` is returned; the order is left
    /// as it was and nothing is retried.
    #[instrument(skip(self, params), fields(order_id = %params.order_id, amount = params.amount))]
    pub async fn process_payment(&self, params: PaymentCreate) -> Result<Payment, PaymentError> {
        let order_id = params.order_id.clone();

        if let Err(status) = self.orders.get_order(&order_id).await {
            warn!(%status, "Order lookup failed");
            return Err(PaymentError::InvalidOrder(status));
        }

        let mut pending = PendingPayment::new(params);
        pending.set_status(PaymentStatus::Completed);

        if let Err(status) = self
            .orders
            .update_order(&order_id, order_status::CONFIRMED)
            .await
        {
            pending.set_status(PaymentStatus::Failed);
            let payment = self
                .payments
                .insert_with(|id| pending.into_payment(id))
                .await;
            error!(
                payment_id = %payment.id,
                %status,
                "Payment recorded as failed; order was not confirmed"
            );
            return Err(PaymentError::OrderUpdateFailed {
                payment_id: payment.id,
                status,
            });
        }

        let payment = self
            .payments
            .insert_with(|id| pending.into_payment(id))
            .await;
        info!(payment_id = %payment.id, "Payment completed");
        Ok(payment)
    }

    pub async fn get_payment_status(&self, payment_id: &str) -> Result<Payment, PaymentError> {
        self.payments
            .get(payment_id)
            .await
            .ok_or_else(|| PaymentError::NotFound(payment_id.to_string()))
    }

    /// Number of stored payments, failed ones included.
    pub async fn payment_count(&self) -> usize {
        self.payments.len().await
    }
}

#[async_trait]
impl Service for PaymentService {
    const NAME: &'static str = "PaymentService";
    type Call = PaymentCall;
    type Reply = PaymentReply;

    async fn handle(&self, call: PaymentCall) -> Result<PaymentReply, Status> {
        let payment = match call {
            PaymentCall::ProcessPayment(params) => self.process_payment(params).await?,
            PaymentCall::GetPaymentStatus { payment_id } => {
                self.get_payment_status(&payment_id).await?
            }
        };
        Ok(PaymentReply::Payment(payment))
    }
}
