//! # Ferrous Zone
//!
//! Private DNS record store with a UDP resolver and a management API

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use ferrous_zone_domain::{CliOverrides, StoreBackend};
use tracing::info;

#[derive(Parser)]
#[command(name = "ferrous-zone")]
#[command(version)]
#[command(about = "Private DNS zone server with record management API")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// DNS listen address (host:port, ip or :port)
    #[arg(short = 'd', long)]
    dns_address: Option<String>,

    /// Management API port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Management API bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Comma separated fallback DNS servers
    #[arg(short = 'f', long)]
    fallback: Option<String>,

    /// Record store backend: memory, json or yaml
    #[arg(short = 's', long)]
    store: Option<String>,

    /// Store file path for the json and yaml backends
    #[arg(long)]
    store_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Do not start the DNS listener on boot
    #[arg(long)]
    no_autostart: bool,
}

impl Cli {
    fn overrides(&self) -> anyhow::Result<CliOverrides> {
        let store_backend = self
            .store
            .as_deref()
            .map(str::parse::<StoreBackend>)
            .transpose()?;

        Ok(CliOverrides {
            dns_address: self.dns_address.clone(),
            web_port: self.web_port,
            bind_address: self.bind.clone(),
            fallback: self.fallback.clone(),
            store_backend,
            store_path: self.store_path.clone(),
            log_level: self.log_level.clone(),
            no_autostart: self.no_autostart,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides()?)?;
    bootstrap::init_logging(&config)?;

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        dns_address = %config.dns.address,
        fallback = %config.dns.fallback,
        web = %config.web_address(),
        store = %config.store.backend,
        "Configuration loaded"
    );

    let services = di::Services::build(&config).await?;

    if config.dns.autostart {
        server::start_dns_server(&services.dns_server).await?;
    } else {
        info!("DNS listener autostart disabled");
    }

    server::start_web_server(&config.web_address(), services.app_state()).await?;

    server::stop_dns_server(&services.dns_server).await;
    info!("Shutdown complete");

    Ok(())
}
