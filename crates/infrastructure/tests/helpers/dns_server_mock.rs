#![allow(dead_code)]
use ferrous_zone_infrastructure::dns::forwarding::MessageBuilder;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Upstream stand-in: answers every question with one A record, or with a
/// bare response code when no address is configured.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Answers every A question with `address`.
    pub async fn answering(address: Ipv4Addr) -> Self {
        Self::start(Some(address), ResponseCode::NoError).await
    }

    /// Answers with no records and `rcode`.
    pub async fn failing_with(rcode: ResponseCode) -> Self {
        Self::start(None, rcode).await
    }

    async fn start(address: Option<Ipv4Addr>, rcode: ResponseCode) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_response(&buf[..len], address, rcode) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_response(
        query: &[u8],
        address: Option<Ipv4Addr>,
        rcode: ResponseCode,
    ) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        let mut response = MessageBuilder::build_response(&request);

        match address {
            Some(ip) => {
                for question in request.queries() {
                    response.add_answer(Record::from_rdata(
                        question.name().clone(),
                        60,
                        RData::A(A(ip)),
                    ));
                }
            }
            None => {
                response.set_response_code(rcode);
            }
        }

        MessageBuilder::serialize_message(&response).ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
