use ferrous_zone_api::AppState;
use ferrous_zone_application::ports::{DnsResponder, HealthReporter, RecordRepository};
use ferrous_zone_application::use_cases::{
    AddRecordsUseCase, DeleteRecordsUseCase, GetHealthUseCase, GetRecordUseCase,
    GetRecordsByAddressUseCase, GetRecordsByDomainUseCase, ListRecordsUseCase,
    ResolveQueryUseCase, UpdateRecordUseCase,
};
use ferrous_zone_domain::Config;
use ferrous_zone_infrastructure::dns::{
    DnsRequestHandler, DnsServerController, HickoryResponder, TracedDnsResponder,
};
use ferrous_zone_infrastructure::health::{SimpleHealthReporter, TracedHealthReporter};
use ferrous_zone_infrastructure::repositories::RecordRepositoryBuilder;
use hickory_proto::op::Message;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Everything the binary runs, wired from one configuration.
pub struct Services {
    pub repo: Arc<dyn RecordRepository>,
    pub dns_server: Arc<DnsServerController>,
    pub health_reporter: Arc<dyn HealthReporter>,
    dns_address: String,
    fallback: Option<String>,
}

impl Services {
    pub async fn build(config: &Config) -> anyhow::Result<Self> {
        let repo = RecordRepositoryBuilder::new()
            .with_config(config.store.clone())
            .build()
            .await?;

        let query_timeout = Duration::from_millis(config.dns.query_timeout);
        let fallback_servers = config.dns.fallback_addrs()?;

        let hickory: Arc<dyn DnsResponder<Message>> = Arc::new(HickoryResponder::new(
            fallback_servers,
            query_timeout,
            config.dns.ttl,
        ));
        let responder: Arc<dyn DnsResponder<Message>> =
            Arc::new(TracedDnsResponder::new(hickory));

        let resolve = Arc::new(ResolveQueryUseCase::new(repo.clone(), responder));
        let handler = Arc::new(DnsRequestHandler::new(resolve));
        let dns_server = Arc::new(DnsServerController::new(
            config.dns.listen_addr()?,
            handler,
        ));

        let health_reporter: Arc<dyn HealthReporter> = Arc::new(TracedHealthReporter::new(
            Arc::new(SimpleHealthReporter::new(query_timeout)),
        ));

        info!(
            fallback_servers = config.dns.fallback_servers().len(),
            ttl = config.dns.ttl,
            "Services wired"
        );

        Ok(Self {
            repo,
            dns_server,
            health_reporter,
            dns_address: config.dns.address.clone(),
            fallback: config.dns.primary_fallback(),
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            add_records: Arc::new(AddRecordsUseCase::new(self.repo.clone())),
            list_records: Arc::new(ListRecordsUseCase::new(self.repo.clone())),
            get_record: Arc::new(GetRecordUseCase::new(self.repo.clone())),
            get_records_by_domain: Arc::new(GetRecordsByDomainUseCase::new(self.repo.clone())),
            get_records_by_address: Arc::new(GetRecordsByAddressUseCase::new(self.repo.clone())),
            update_record: Arc::new(UpdateRecordUseCase::new(self.repo.clone())),
            delete_records: Arc::new(DeleteRecordsUseCase::new(self.repo.clone())),
            get_health: Arc::new(GetHealthUseCase::new(
                self.repo.clone(),
                self.health_reporter.clone(),
                self.dns_address.clone(),
                self.fallback.clone(),
            )),
            dns_server: self.dns_server.clone(),
        }
    }
}
