//! Identity service as a standalone HTTP process.

use commerce_services::identity::IdentityService;
use commerce_services::lifecycle::{self, ServiceConfig, ServiceKind};
use rpc_framework::telemetry::setup_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ServiceConfig::from_env(ServiceKind::Identity)?;
    info!(addr = %config.listen_addr, "Starting identity service");

    lifecycle::serve(IdentityService::new(), config.listen_addr).await?;
    Ok(())
}
