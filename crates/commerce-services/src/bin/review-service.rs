//! Review service as a standalone HTTP process.

use commerce_services::clients::{IdentityClient, OrderClient};
use commerce_services::lifecycle::{self, Dependency, ServiceConfig, ServiceKind};
use commerce_services::review::ReviewService;
use rpc_framework::telemetry::setup_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ServiceConfig::from_env(ServiceKind::Review)?;
    let identity_addr = config.dependency_addr(Dependency::Identity)?;
    let order_addr = config.dependency_addr(Dependency::Order)?;
    info!(
        addr = %config.listen_addr,
        identity = identity_addr,
        order = order_addr,
        "Starting review service"
    );

    let service = ReviewService::new(
        IdentityClient::connect(identity_addr),
        OrderClient::connect(order_addr),
    );
    lifecycle::serve(service, config.listen_addr).await?;
    Ok(())
}
