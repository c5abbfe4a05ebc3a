use ferrous_zone_infrastructure::dns::forwarding::MessageBuilder;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, RecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

/// Common test domains
pub struct TestDomains;

impl TestDomains {
    pub fn nas() -> &'static str {
        "nas.home.lan"
    }

    pub fn printer() -> &'static str {
        "printer.home.lan"
    }

    pub fn upstream() -> &'static str {
        "example.com"
    }
}

/// Minimal stub resolver talking to the server under test
pub struct TestClient {
    server: SocketAddr,
}

impl TestClient {
    pub fn new(server: SocketAddr) -> Self {
        Self { server }
    }

    pub async fn query(&self, domain: &str, record_type: RecordType) -> Message {
        let mut query = Query::new();
        query.set_name(MessageBuilder::parse_name(domain).unwrap());
        query.set_query_type(record_type);
        query.set_query_class(DNSClass::IN);

        let mut request = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        request.set_recursion_desired(true);
        request.add_query(query);

        let bytes = MessageBuilder::serialize_message(&request).unwrap();
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        socket.send_to(&bytes, self.server).await.unwrap();

        let mut buf = vec![0u8; 4096];
        let (len, _) = tokio::time::timeout(Duration::from_secs(3), socket.recv_from(&mut buf))
            .await
            .expect("DNS server did not reply")
            .unwrap();

        let response = Message::from_vec(&buf[..len]).unwrap();
        assert_eq!(response.id(), request.id());
        response
    }
}
