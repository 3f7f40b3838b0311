//! # Commerce Services Demo
//!
//! Runs all four services in one process and walks one purchase through them.
//!
//! ## Quick Start
//!
//! The workflow below demonstrates:
//! 1.  Setting up the [`CommerceSystem`].
//! 2.  Registering a user and placing an order (`pending`, total 25).
//! 3.  Paying for it, which confirms the order.
//! 4.  Reviewing the confirmed order.
//! 5.  Trying to review a fresh, unpaid order (`FailedPrecondition`).
//!
//! To run each service as its own process instead, see the `*-service`
//! binaries.

use commerce_services::lifecycle::CommerceSystem;
use commerce_services::model::{OrderCreate, OrderItem, PaymentCreate, ReviewCreate, UserCreate};
use rpc_framework::telemetry::setup_tracing;
use tracing::{info, info_span, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting commerce system");
    let system = CommerceSystem::new();

    let user = system
        .identity_client
        .create_user(UserCreate::new("a@b.com", "Alice", "555-0100"))
        .instrument(info_span!("registration"))
        .await?;
    info!(user_id = %user.id, "User registered");

    let order_params = OrderCreate {
        user_id: user.id.clone(),
        items: vec![OrderItem::new("book", 10.0, 2), OrderItem::new("pen", 5.0, 1)],
    };
    let order = system
        .order_client
        .create_order(order_params.clone())
        .instrument(info_span!("ordering"))
        .await?;
    info!(order_id = %order.id, total = order.total_amount, status = %order.status, "Order placed");

    let payment = async {
        system
            .payment_client
            .process_payment(PaymentCreate {
                order_id: order.id.clone(),
                user_id: user.id.clone(),
                amount: order.total_amount,
                payment_method: "card".to_string(),
            })
            .await
    }
    .instrument(info_span!("payment"))
    .await?;
    let confirmed = system.order_client.get_order(&order.id).await?;
    info!(payment_id = %payment.id, payment_status = %payment.status, order_status = %confirmed.status, "Payment processed");

    let review = system
        .review_client
        .create_review(ReviewCreate {
            user_id: user.id.clone(),
            order_id: order.id.clone(),
            rating: 5,
            comment: "great".to_string(),
        })
        .instrument(info_span!("review"))
        .await?;
    info!(review_id = %review.id, rating = review.rating, "Review stored");

    let unpaid = system.order_client.create_order(order_params).await?;
    match system
        .review_client
        .create_review(ReviewCreate {
            user_id: user.id.clone(),
            order_id: unpaid.id.clone(),
            rating: 1,
            comment: "too early".to_string(),
        })
        .await
    {
        Ok(review) => warn!(review_id = %review.id, "Unpaid order was reviewed"),
        Err(status) => info!(order_id = %unpaid.id, %status, "Review of unpaid order rejected"),
    }

    let history = system.order_client.list_orders(&user.id).await?;
    info!(orders = history.total, "Order history");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
