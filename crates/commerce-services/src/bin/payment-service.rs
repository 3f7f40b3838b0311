//! Payment service as a standalone HTTP process.

use commerce_services::clients::OrderClient;
use commerce_services::lifecycle::{self, Dependency, ServiceConfig, ServiceKind};
use commerce_services::payment::PaymentService;
use rpc_framework::telemetry::setup_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ServiceConfig::from_env(ServiceKind::Payment)?;
    let order_addr = config.dependency_addr(Dependency::Order)?;
    info!(addr = %config.listen_addr, order = order_addr, "Starting payment service");

    let service = PaymentService::new(OrderClient::connect(order_addr));
    lifecycle::serve(service, config.listen_addr).await?;
    Ok(())
}
