use ferrous_zone_infrastructure::dns::DnsServerController;
use tracing::{info, warn};

pub async fn start_dns_server(controller: &DnsServerController) -> anyhow::Result<()> {
    info!(bind_address = %controller.configured_address(), "Starting DNS server");

    let local_addr = controller.start().await?;
    info!(protocol = "UDP", address = %local_addr, "DNS server ready to accept queries");

    Ok(())
}

pub async fn stop_dns_server(controller: &DnsServerController) {
    if !controller.is_running().await {
        return;
    }
    if let Err(e) = controller.stop().await {
        warn!(error = %e, "Failed to stop DNS server");
    }
}
