//! # Payment Client
//!
//! Provides a high-level API for calling the payment service.
use crate::model::{Payment, PaymentCreate};
use crate::payment::{PaymentCall, PaymentReply, PaymentService};
use rpc_framework::{RemoteClient, ServiceClient, Status};
use tracing::instrument;

/// Client for the payment service.
#[derive(Clone)]
pub struct PaymentClient {
    inner: ServiceClient<PaymentService>,
}

impl PaymentClient {
    pub fn new(inner: ServiceClient<PaymentService>) -> Self {
        Self { inner }
    }

    /// Client for a payment service listening at `addr`.
    pub fn connect(addr: &str) -> Self {
        Self::new(ServiceClient::http(addr))
    }

    #[instrument(skip(self, params), fields(order_id = %params.order_id))]
    pub async fn process_payment(&self, params: PaymentCreate) -> Result<Payment, Status> {
        let PaymentReply::Payment(payment) =
            self.dispatch(PaymentCall::ProcessPayment(params)).await?;
        Ok(payment)
    }

    #[instrument(skip(self))]
    pub async fn get_payment_status(&self, payment_id: &str) -> Result<Payment, Status> {
        let PaymentReply::Payment(payment) = self
            .dispatch(PaymentCall::GetPaymentStatus {
                payment_id: payment_id.to_string(),
            })
            .await?;
        Ok(payment)
    }
}

impl RemoteClient<PaymentService> for PaymentClient {
    fn inner(&self) -> &ServiceClient<PaymentService> {
        &self.inner
    }
}
