//! Order service as a standalone HTTP process.

use commerce_services::clients::IdentityClient;
use commerce_services::lifecycle::{self, Dependency, ServiceConfig, ServiceKind};
use commerce_services::order::OrderService;
use rpc_framework::telemetry::setup_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ServiceConfig::from_env(ServiceKind::Order)?;
    let identity_addr = config.dependency_addr(Dependency::Identity)?;
    info!(addr = %config.listen_addr, identity = identity_addr, "Starting order service");

    let service = OrderService::new(IdentityClient::connect(identity_addr));
    lifecycle::serve(service, config.listen_addr).await?;
    Ok(())
}
