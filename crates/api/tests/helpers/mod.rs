#![allow(dead_code)]
use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use ferrous_zone_api::{create_api_routes, AppState};
use ferrous_zone_application::ports::{DnsResponder, HealthReporter, RecordRepository};
use ferrous_zone_application::use_cases::{
    AddRecordsUseCase, DeleteRecordsUseCase, GetHealthUseCase, GetRecordUseCase,
    GetRecordsByAddressUseCase, GetRecordsByDomainUseCase, ListRecordsUseCase,
    ResolveQueryUseCase, UpdateRecordUseCase,
};
use ferrous_zone_domain::{
    DnsReport, HealthReport, HealthStatus, Record, RecordType, StoreReport,
};
use ferrous_zone_infrastructure::dns::{DnsRequestHandler, DnsServerController, HickoryResponder};
use ferrous_zone_infrastructure::repositories::MemoryRecordRepository;
use hickory_proto::op::Message;
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;

/// Reporter that never touches the network.
pub struct StaticHealthReporter;

#[async_trait]
impl HealthReporter for StaticHealthReporter {
    fn store(&self, records: Option<usize>, elapsed: Duration) -> StoreReport {
        StoreReport {
            status: if records.is_some() {
                HealthStatus::Healthy
            } else {
                HealthStatus::Unhealthy
            },
            records: records.unwrap_or(0),
            query_time_ms: elapsed.as_millis() as u64,
        }
    }

    async fn dns(&self, address: &str, fallback: Option<&str>, _: Option<&Record>) -> DnsReport {
        DnsReport {
            status: HealthStatus::Healthy,
            address: address.to_string(),
            fallback: fallback.map(str::to_string),
            local_query_ms: Some(1),
            fallback_query_ms: Some(1),
        }
    }

    fn merge(&self, store: StoreReport, dns: DnsReport) -> HealthReport {
        HealthReport {
            status: store.status.worst(dns.status),
            store,
            dns,
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<dyn RecordRepository>,
    pub dns_server: Arc<DnsServerController>,
}

pub async fn test_app(records: Vec<Record>) -> TestApp {
    let repo: Arc<dyn RecordRepository> = Arc::new(MemoryRecordRepository::new());
    if !records.is_empty() {
        repo.create(&records).await.unwrap();
    }

    let responder: Arc<dyn DnsResponder<Message>> = Arc::new(HickoryResponder::new(
        Vec::new(),
        Duration::from_millis(200),
        300,
    ));
    let resolve = Arc::new(ResolveQueryUseCase::new(repo.clone(), responder));
    let handler = Arc::new(DnsRequestHandler::new(resolve));
    let dns_server = Arc::new(DnsServerController::new(
        "127.0.0.1:0".parse().unwrap(),
        handler,
    ));

    let reporter: Arc<dyn HealthReporter> = Arc::new(StaticHealthReporter);

    let state = AppState {
        add_records: Arc::new(AddRecordsUseCase::new(repo.clone())),
        list_records: Arc::new(ListRecordsUseCase::new(repo.clone())),
        get_record: Arc::new(GetRecordUseCase::new(repo.clone())),
        get_records_by_domain: Arc::new(GetRecordsByDomainUseCase::new(repo.clone())),
        get_records_by_address: Arc::new(GetRecordsByAddressUseCase::new(repo.clone())),
        update_record: Arc::new(UpdateRecordUseCase::new(repo.clone())),
        delete_records: Arc::new(DeleteRecordsUseCase::new(repo.clone())),
        get_health: Arc::new(GetHealthUseCase::new(
            repo.clone(),
            reporter,
            "127.0.0.1:0",
            None,
        )),
        dns_server: dns_server.clone(),
    };

    TestApp {
        router: Router::new().nest("/api", create_api_routes(state)),
        repo,
        dns_server,
    }
}

pub fn a(domain: &str, address: &str) -> Record {
    Record::new(RecordType::A, domain, address)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
