#[path = "../common/mod.rs"]
mod common;

use axum::http::StatusCode;
use common::{MockUpstream, TestClient, TestDomains, TestServer};
use ferrous_zone_domain::config::StoreConfig;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{RData, RecordType};
use serde_json::json;
use std::net::Ipv4Addr;
use tokio::net::UdpSocket;

const UPSTREAM_IP: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);

fn first_a(message: &hickory_proto::op::Message) -> Option<Ipv4Addr> {
    message.answers().iter().find_map(|rr| match rr.data() {
        RData::A(ip) => Some(ip.0),
        _ => None,
    })
}

// ============================================================================
// Records added over the API are served over UDP
// ============================================================================

#[tokio::test]
async fn test_added_record_is_resolved_locally() {
    let upstream = MockUpstream::answering(UPSTREAM_IP).await;
    let server = TestServer::start(StoreConfig::default(), vec![upstream.addr()]).await;

    let (status, _) = server
        .api(
            "POST",
            "/api/records",
            Some(json!({"type": "A", "name": TestDomains::nas(), "address": "192.168.1.10"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let client = TestClient::new(server.dns_addr());
    let reply = client.query(TestDomains::nas(), RecordType::A).await;

    assert_eq!(reply.response_code(), ResponseCode::NoError);
    assert_eq!(first_a(&reply), Some(Ipv4Addr::new(192, 168, 1, 10)));
    assert_eq!(upstream.query_count(), 0);

    server.shutdown().await;
}

#[tokio::test]
async fn test_any_query_returns_every_stored_type() {
    let upstream = MockUpstream::answering(UPSTREAM_IP).await;
    let server = TestServer::start(StoreConfig::default(), vec![upstream.addr()]).await;

    server
        .api(
            "POST",
            "/api/records",
            Some(json!([
                {"type": "A", "name": TestDomains::printer(), "address": "192.168.1.20"},
                {"type": "TXT", "name": TestDomains::printer(), "address": "floor=2"}
            ])),
        )
        .await;

    let client = TestClient::new(server.dns_addr());
    let reply = client.query(TestDomains::printer(), RecordType::ANY).await;

    assert_eq!(reply.answers().len(), 2);
    assert!(reply
        .answers()
        .iter()
        .any(|rr| matches!(rr.data(), RData::TXT(_))));
    assert_eq!(upstream.query_count(), 0);

    server.shutdown().await;
}

// ============================================================================
// Misses go to the fallback resolver
// ============================================================================

#[tokio::test]
async fn test_unknown_name_is_forwarded() {
    let upstream = MockUpstream::answering(UPSTREAM_IP).await;
    let server = TestServer::start(StoreConfig::default(), vec![upstream.addr()]).await;

    let client = TestClient::new(server.dns_addr());
    let reply = client.query(TestDomains::upstream(), RecordType::A).await;

    assert_eq!(first_a(&reply), Some(UPSTREAM_IP));
    assert_eq!(upstream.query_count(), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_second_fallback_used_when_first_is_silent() {
    let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let upstream = MockUpstream::answering(UPSTREAM_IP).await;
    let server = TestServer::start(
        StoreConfig::default(),
        vec![silent.local_addr().unwrap(), upstream.addr()],
    )
    .await;

    let client = TestClient::new(server.dns_addr());
    let reply = client.query(TestDomains::upstream(), RecordType::A).await;

    assert_eq!(first_a(&reply), Some(UPSTREAM_IP));

    server.shutdown().await;
}

#[tokio::test]
async fn test_unreachable_fallback_is_servfail() {
    let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let server = TestServer::start(StoreConfig::default(), vec![silent.local_addr().unwrap()]).await;

    let client = TestClient::new(server.dns_addr());
    let reply = client.query(TestDomains::upstream(), RecordType::A).await;

    assert_eq!(reply.response_code(), ResponseCode::ServFail);
    assert!(reply.answers().is_empty());

    server.shutdown().await;
}

#[tokio::test]
async fn test_deleted_record_falls_back() {
    let upstream = MockUpstream::answering(UPSTREAM_IP).await;
    let server = TestServer::start(StoreConfig::default(), vec![upstream.addr()]).await;

    server
        .api(
            "POST",
            "/api/records",
            Some(json!({"type": "A", "name": TestDomains::nas(), "address": "192.168.1.10"})),
        )
        .await;
    let (status, _) = server
        .api(
            "DELETE",
            "/api/records",
            Some(json!({"name": TestDomains::nas()})),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let client = TestClient::new(server.dns_addr());
    let reply = client.query(TestDomains::nas(), RecordType::A).await;

    assert_eq!(first_a(&reply), Some(UPSTREAM_IP));
    assert_eq!(upstream.query_count(), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_updated_record_is_served_under_new_name() {
    let upstream = MockUpstream::answering(UPSTREAM_IP).await;
    let server = TestServer::start(StoreConfig::default(), vec![upstream.addr()]).await;

    server
        .api(
            "POST",
            "/api/records",
            Some(json!({"type": "A", "name": "old.home.lan", "address": "192.168.1.10"})),
        )
        .await;
    let (status, _) = server
        .api(
            "PUT",
            "/api/records",
            Some(json!({
                "target": "old.home.lan",
                "record": {"type": "A", "name": TestDomains::nas(), "address": "192.168.1.11"}
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let client = TestClient::new(server.dns_addr());
    let reply = client.query(TestDomains::nas(), RecordType::A).await;
    assert_eq!(first_a(&reply), Some(Ipv4Addr::new(192, 168, 1, 11)));

    let reply = client.query("old.home.lan", RecordType::A).await;
    assert_eq!(first_a(&reply), Some(UPSTREAM_IP));

    server.shutdown().await;
}

// ============================================================================
// Control and health
// ============================================================================

#[tokio::test]
async fn test_reload_keeps_serving() {
    let server = TestServer::start(StoreConfig::default(), vec![]).await;
    server
        .api(
            "POST",
            "/api/records",
            Some(json!({"type": "A", "name": TestDomains::nas(), "address": "192.168.1.10"})),
        )
        .await;

    let (status, body) = server.api("POST", "/api/dns/reload", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["running"], true);

    let addr = body["local_address"].as_str().unwrap().parse().unwrap();
    let reply = TestClient::new(addr).query(TestDomains::nas(), RecordType::A).await;
    assert_eq!(first_a(&reply), Some(Ipv4Addr::new(192, 168, 1, 10)));

    server.shutdown().await;
}

#[tokio::test]
async fn test_health_with_reachable_listener_and_fallback() {
    let upstream = MockUpstream::answering(UPSTREAM_IP).await;
    let server = TestServer::start(StoreConfig::default(), vec![upstream.addr()]).await;

    let (status, body) = server.api("GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dns"]["status"], "healthy");
    assert_eq!(body["store"]["records"], 0);

    server.shutdown().await;
}
