use super::handler::DnsRequestHandler;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const MAX_DATAGRAM_SIZE: usize = 4096;

/// UDP listener dispatching one task per datagram.
pub struct DnsServer {
    socket: Arc<UdpSocket>,
    handler: Arc<DnsRequestHandler>,
}

impl DnsServer {
    pub async fn bind(
        address: SocketAddr,
        handler: Arc<DnsRequestHandler>,
    ) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(address).await?;
        Ok(Self {
            socket: Arc::new(socket),
            handler,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Serve until `shutdown` is cancelled.
    pub async fn run(self, shutdown: CancellationToken) {
        let local_addr = self.socket.local_addr().ok();
        info!(address = ?local_addr, protocol = "UDP", "DNS server listening");

        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
        loop {
            let (len, peer) = tokio::select! {
                _ = shutdown.cancelled() => break,
                received = self.socket.recv_from(&mut buf) => match received {
                    Ok(received) => received,
                    Err(e) => {
                        warn!(error = %e, "Failed to receive datagram");
                        continue;
                    }
                },
            };

            let request = buf[..len].to_vec();
            let socket = Arc::clone(&self.socket);
            let handler = Arc::clone(&self.handler);

            tokio::spawn(async move {
                if let Some(response) = handler.handle(&request).await {
                    if let Err(e) = socket.send_to(&response, peer).await {
                        debug!(peer = %peer, error = %e, "Failed to send response");
                    }
                }
            });
        }

        info!(address = ?local_addr, "DNS server stopped");
    }
}
