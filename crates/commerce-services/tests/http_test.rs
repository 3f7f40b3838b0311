use commerce_services::clients::{IdentityClient, OrderClient, PaymentClient, ReviewClient};
use commerce_services::identity::IdentityService;
use commerce_services::model::{
    order_status, OrderCreate, OrderItem, PaymentCreate, PaymentStatus, ReviewCreate, UserCreate,
};
use commerce_services::order::OrderService;
use commerce_services::payment::PaymentService;
use commerce_services::review::ReviewService;
use rpc_framework::{http, Code, Service};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Binds an ephemeral port and serves `service` on it until `stop` flips.
async fn spawn_service<S: Service>(service: S, stop: &watch::Receiver<bool>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let mut stop = stop.clone();
    tokio::spawn(http::serve(Arc::new(service), listener, async move {
        let _ = stop.wait_for(|stopped| *stopped).await;
    }));
    addr
}

struct Deployment {
    identity: IdentityClient,
    orders: OrderClient,
    payments: PaymentClient,
    reviews: ReviewClient,
    stop: watch::Sender<bool>,
}

/// Each service behind its own HTTP server, wired by address only.
async fn deploy() -> Deployment {
    let (stop, stopped) = watch::channel(false);

    let identity_addr = spawn_service(IdentityService::new(), &stopped).await;
    let order_addr = spawn_service(
        OrderService::new(IdentityClient::connect(&identity_addr)),
        &stopped,
    )
    .await;
    let payment_addr = spawn_service(
        PaymentService::new(OrderClient::connect(&order_addr)),
        &stopped,
    )
    .await;
    let review_addr = spawn_service(
        ReviewService::new(
            IdentityClient::connect(&identity_addr),
            OrderClient::connect(&format!("http://{order_addr}")),
        ),
        &stopped,
    )
    .await;

    Deployment {
        identity: IdentityClient::connect(&identity_addr),
        orders: OrderClient::connect(&order_addr),
        payments: PaymentClient::connect(&payment_addr),
        reviews: ReviewClient::connect(&review_addr),
        stop,
    }
}

#[tokio::test]
async fn test_purchase_workflow_over_http() {
    let d = deploy().await;

    let user = d
        .identity
        .create_user(UserCreate::new("a@b.com", "Alice", "555-0100"))
        .await
        .unwrap();

    let order = d
        .orders
        .create_order(OrderCreate {
            user_id: user.id.clone(),
            items: vec![OrderItem::new("book", 10.0, 2), OrderItem::new("pen", 5.0, 1)],
        })
        .await
        .unwrap();
    assert_eq!(order.total_amount, 25.0);
    assert_eq!(order.status, order_status::PENDING);

    let payment = d
        .payments
        .process_payment(PaymentCreate {
            order_id: order.id.clone(),
            user_id: user.id.clone(),
            amount: 25.0,
            payment_method: "card".into(),
        })
        .await
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);
    assert_eq!(
        d.orders.get_order(&order.id).await.unwrap().status,
        order_status::CONFIRMED
    );

    let review = d
        .reviews
        .create_review(ReviewCreate {
            user_id: user.id.clone(),
            order_id: order.id.clone(),
            rating: 5,
            comment: "great".into(),
        })
        .await
        .unwrap();
    let fetched = d.reviews.get_review(&review.id).await.unwrap();
    assert_eq!(fetched, review, "timestamps survive the JSON round trip");

    let _ = d.stop.send(true);
}

#[tokio::test]
async fn test_failure_kinds_cross_the_wire() {
    let d = deploy().await;

    let err = d
        .orders
        .create_order(OrderCreate {
            user_id: "ghost".into(),
            items: vec![],
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
    assert!(err.message().starts_with("user not found:"));

    let err = d.payments.get_payment_status("payment_1").await.unwrap_err();
    assert_eq!(err.code(), Code::NotFound);
    assert_eq!(err.message(), "payment not found");

    d.identity
        .create_user(UserCreate::new("a@b.com", "Alice", ""))
        .await
        .unwrap();
    let err = d
        .identity
        .create_user(UserCreate::new("a@b.com", "Alice", ""))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::AlreadyExists);

    let _ = d.stop.send(true);
}

#[tokio::test]
async fn test_unreachable_dependency_is_invalid_argument() {
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = closed.local_addr().unwrap().to_string();
    drop(closed);

    let (stop, stopped) = watch::channel(false);
    let order_addr = spawn_service(
        OrderService::new(IdentityClient::connect(&dead_addr)),
        &stopped,
    )
    .await;

    let err = OrderClient::connect(&order_addr)
        .create_order(OrderCreate {
            user_id: "u1".into(),
            items: vec![],
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);

    let _ = stop.send(true);
}
