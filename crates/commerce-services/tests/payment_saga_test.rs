use async_trait::async_trait;
use commerce_services::clients::{IdentityClient, OrderClient};
use commerce_services::identity::{IdentityReply, IdentityService};
use commerce_services::model::{
    order_status, OrderCreate, OrderItem, PaymentCreate, PaymentStatus, User,
};
use commerce_services::order::{self, OrderCall, OrderService};
use commerce_services::payment::{PaymentError, PaymentService};
use rpc_framework::mock::MockClient;
use rpc_framework::{Code, Operation, RemoteClient, Service, ServiceClient, Status, Transport};
use std::sync::Arc;

/// Forwards every call to the real order service except `UpdateOrder`,
/// which fails as if the order service had gone away mid-saga.
struct UpdateFails {
    inner: ServiceClient<OrderService>,
}

#[async_trait]
impl Transport<OrderService> for UpdateFails {
    async fn send(
        &self,
        call: OrderCall,
    ) -> Result<<OrderService as Service>::Reply, Status> {
        if call.operation() == "UpdateOrder" {
            return Err(Status::unavailable("OrderService is not running"));
        }
        self.inner.call(call).await
    }
}

fn alice() -> User {
    User {
        id: "u1".into(),
        email: "a@b.com".into(),
        name: "Alice".into(),
        phone: String::new(),
    }
}

/// Real order service with a mocked identity dependency.
///
/// Pattern: Service + Mocks
/// - Real OrderService running behind its server
/// - Mocked IdentityClient answering user validation
async fn start_order_service(
    identity: &MockClient<IdentityService>,
) -> (OrderClient, tokio::task::JoinHandle<()>) {
    let (server, client) = order::new();
    let service = OrderService::new(IdentityClient::new(identity.client()));
    let handle = tokio::spawn(server.run(Arc::new(service)));
    (client, handle)
}

fn payment_for(order_id: &str) -> PaymentCreate {
    PaymentCreate {
        order_id: order_id.to_string(),
        user_id: "u1".into(),
        amount: 25.0,
        payment_method: "card".into(),
    }
}

#[tokio::test]
async fn test_failed_confirmation_leaves_order_pending() {
    let mut identity = MockClient::<IdentityService>::new();
    identity.expect("GetUser").return_ok(IdentityReply::User(alice()));
    let (orders, order_handle) = start_order_service(&identity).await;

    let order = orders
        .create_order(OrderCreate {
            user_id: "u1".into(),
            items: vec![OrderItem::new("book", 10.0, 2), OrderItem::new("pen", 5.0, 1)],
        })
        .await
        .unwrap();

    let flaky = OrderClient::new(ServiceClient::new(Arc::new(UpdateFails {
        inner: orders.inner().clone(),
    })));
    let payments = PaymentService::new(flaky);

    let err = payments.process_payment(payment_for(&order.id)).await.unwrap_err();
    let PaymentError::OrderUpdateFailed { payment_id, .. } = &err else {
        panic!("expected OrderUpdateFailed, got {err:?}");
    };

    let stored = payments.get_payment_status(payment_id).await.unwrap();
    assert_eq!(stored.status, PaymentStatus::Failed);
    assert_eq!(stored.order_id, order.id);
    assert_eq!(payments.payment_count().await, 1);

    let status = Status::from(err);
    assert_eq!(status.code(), Code::Internal);

    let unchanged = orders.get_order(&order.id).await.unwrap();
    assert_eq!(unchanged.status, order_status::PENDING);

    identity.verify();
    drop(payments);
    drop(orders);
    order_handle.await.unwrap();
}

#[tokio::test]
async fn test_missing_order_leaves_payment_store_empty() {
    let identity = MockClient::<IdentityService>::new();
    let (orders, _handle) = start_order_service(&identity).await;
    let payments = PaymentService::new(orders);

    let err: Status = payments
        .process_payment(payment_for("order_42"))
        .await
        .unwrap_err()
        .into();
    assert_eq!(err.code(), Code::InvalidArgument);
    assert_eq!(payments.payment_count().await, 0);
}

#[tokio::test]
async fn test_successful_payment_confirms_real_order() {
    let mut identity = MockClient::<IdentityService>::new();
    identity.expect("GetUser").return_ok(IdentityReply::User(alice()));
    let (orders, _handle) = start_order_service(&identity).await;

    let order = orders
        .create_order(OrderCreate {
            user_id: "u1".into(),
            items: vec![OrderItem::new("book", 25.0, 1)],
        })
        .await
        .unwrap();

    let payments = PaymentService::new(orders.clone());
    let payment = payments.process_payment(payment_for(&order.id)).await.unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);

    let confirmed = orders.get_order(&order.id).await.unwrap();
    assert_eq!(confirmed.status, order_status::CONFIRMED);
}

#[tokio::test]
async fn test_concurrent_payments_for_one_order_both_complete() {
    let mut identity = MockClient::<IdentityService>::new();
    identity.expect("GetUser").return_ok(IdentityReply::User(alice()));
    let (orders, _handle) = start_order_service(&identity).await;

    let order = orders
        .create_order(OrderCreate {
            user_id: "u1".into(),
            items: vec![OrderItem::new("book", 25.0, 1)],
        })
        .await
        .unwrap();

    let payments = Arc::new(PaymentService::new(orders.clone()));
    let first = tokio::spawn({
        let payments = payments.clone();
        let order_id = order.id.clone();
        async move { payments.process_payment(payment_for(&order_id)).await }
    });
    let second = tokio::spawn({
        let payments = payments.clone();
        let order_id = order.id.clone();
        async move { payments.process_payment(payment_for(&order_id)).await }
    });

    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(payments.payment_count().await, 2);
}
