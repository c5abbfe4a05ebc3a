use super::handler::DnsRequestHandler;
use super::udp_server::DnsServer;
use ferrous_zone_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("DNS server is already running")]
    AlreadyRunning,

    #[error("DNS server is not running")]
    NotRunning,

    #[error("Failed to bind DNS server on {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

impl From<ControllerError> for DomainError {
    fn from(error: ControllerError) -> Self {
        DomainError::Server(error.to_string())
    }
}

struct Running {
    shutdown: CancellationToken,
    task: JoinHandle<()>,
    local_addr: SocketAddr,
}

/// Start/stop lifecycle of the UDP listener.
pub struct DnsServerController {
    address: SocketAddr,
    handler: Arc<DnsRequestHandler>,
    running: Mutex<Option<Running>>,
}

impl DnsServerController {
    pub fn new(address: SocketAddr, handler: Arc<DnsRequestHandler>) -> Self {
        Self {
            address,
            handler,
            running: Mutex::new(None),
        }
    }

    /// Bind and serve; returns the bound address.
    pub async fn start(&self) -> Result<SocketAddr, ControllerError> {
        let mut running = self.running.lock().await;
        if running.is_some() {
            return Err(ControllerError::AlreadyRunning);
        }

        let server = DnsServer::bind(self.address, Arc::clone(&self.handler))
            .await
            .map_err(|source| ControllerError::Bind {
                address: self.address,
                source,
            })?;
        let local_addr = server
            .local_addr()
            .map_err(|source| ControllerError::Bind {
                address: self.address,
                source,
            })?;

        let shutdown = CancellationToken::new();
        let task = tokio::spawn(server.run(shutdown.clone()));

        *running = Some(Running {
            shutdown,
            task,
            local_addr,
        });

        info!(address = %local_addr, "DNS server started");
        Ok(local_addr)
    }

    /// Cancel the listener and wait for it to release the socket.
    pub async fn stop(&self) -> Result<(), ControllerError> {
        let current = self
            .running
            .lock()
            .await
            .take()
            .ok_or(ControllerError::NotRunning)?;

        current.shutdown.cancel();
        let _ = current.task.await;

        info!(address = %current.local_addr, "DNS server stopped");
        Ok(())
    }

    /// Stop if running, then start again.
    pub async fn reload(&self) -> Result<SocketAddr, ControllerError> {
        match self.stop().await {
            Ok(()) | Err(ControllerError::NotRunning) => {}
            Err(e) => return Err(e),
        }
        self.start().await
    }

    pub async fn is_running(&self) -> bool {
        self.running.lock().await.is_some()
    }

    pub async fn local_addr(&self) -> Option<SocketAddr> {
        self.running.lock().await.as_ref().map(|r| r.local_addr)
    }

    pub fn configured_address(&self) -> SocketAddr {
        self.address
    }
}
