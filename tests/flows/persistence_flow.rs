#[path = "../common/mod.rs"]
mod common;

use axum::http::StatusCode;
use common::{TestClient, TestDomains, TestServer};
use ferrous_zone_domain::config::{StoreBackend, StoreConfig};
use hickory_proto::rr::{RData, RecordType};
use serde_json::json;
use std::net::Ipv4Addr;

fn file_store(backend: StoreBackend, path: &std::path::Path) -> StoreConfig {
    StoreConfig {
        backend,
        path: Some(path.to_string_lossy().into_owned()),
    }
}

async fn records_survive_restart(backend: StoreBackend, file_name: &str) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zones").join(file_name);

    let first = TestServer::start(file_store(backend, &path), vec![]).await;
    let (status, _) = first
        .api(
            "POST",
            "/api/records",
            Some(json!([
                {"type": "A", "name": TestDomains::nas(), "address": "192.168.1.10"},
                {"type": "A", "name": TestDomains::printer(), "address": "192.168.1.10"}
            ])),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    first.shutdown().await;

    assert!(path.exists());

    let second = TestServer::start(file_store(backend, &path), vec![]).await;
    let (status, body) = second.api("GET", "/api/records/by-address/192.168.1.10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let reply = TestClient::new(second.dns_addr())
        .query(TestDomains::printer(), RecordType::A)
        .await;
    assert!(matches!(
        reply.answers()[0].data(),
        RData::A(ip) if ip.0 == Ipv4Addr::new(192, 168, 1, 10)
    ));

    second.shutdown().await;
}

#[tokio::test]
async fn test_json_store_survives_restart() {
    records_survive_restart(StoreBackend::JsonFile, "records.json").await;
}

#[tokio::test]
async fn test_yaml_store_survives_restart() {
    records_survive_restart(StoreBackend::YamlFile, "records.yaml").await;
}

#[tokio::test]
async fn test_deletes_are_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");

    let first = TestServer::start(file_store(StoreBackend::JsonFile, &path), vec![]).await;
    first
        .api(
            "POST",
            "/api/records",
            Some(json!([
                {"type": "A", "name": TestDomains::nas(), "address": "192.168.1.10"},
                {"type": "A", "name": TestDomains::printer(), "address": "192.168.1.20"}
            ])),
        )
        .await;
    first
        .api(
            "DELETE",
            "/api/records",
            Some(json!({"address": "192.168.1.20"})),
        )
        .await;
    first.shutdown().await;

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains(TestDomains::nas()));
    assert!(!content.contains(TestDomains::printer()));

    let second = TestServer::start(file_store(StoreBackend::JsonFile, &path), vec![]).await;
    let (status, body) = second.api("GET", "/api/records", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    second.shutdown().await;
}
