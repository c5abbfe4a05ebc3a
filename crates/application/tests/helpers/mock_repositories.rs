#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_zone_application::ports::{DnsResponder, HealthReporter, RecordRepository};
use ferrous_zone_domain::{
    DnsQuery, DnsReport, DomainError, HealthReport, HealthStatus, Record, RecordType, StoreReport,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock RecordRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockRecordRepository {
    records: Arc<RwLock<HashMap<(RecordType, String), String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_records(records: Vec<Record>) -> Self {
        let repo = Self::new();
        repo.create(&records).await.unwrap();
        repo
    }

    /// Make every operation fail with a sync error
    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    async fn check(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Sync("mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn create(&self, records: &[Record]) -> Result<(), DomainError> {
        self.check().await?;
        let mut map = self.records.write().await;
        for r in records {
            map.insert((r.record_type, r.domain.clone()), r.address.clone());
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Record>, DomainError> {
        self.check().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .map(|((t, d), a)| Record::new(*t, d.clone(), a.clone()))
            .collect())
    }

    async fn find_by_type_and_domain(
        &self,
        record_type: RecordType,
        domain: &str,
    ) -> Result<Record, DomainError> {
        self.check().await?;
        self.records
            .read()
            .await
            .get(&(record_type, domain.to_string()))
            .map(|a| Record::new(record_type, domain, a.clone()))
            .ok_or_else(|| DomainError::does_not_exist(record_type, domain))
    }

    async fn filter_by_domain(&self, domain: &str) -> Result<Vec<Record>, DomainError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|r| r.domain == domain)
            .collect())
    }

    async fn filter_by_dest(&self, address: &str) -> Result<Vec<Record>, DomainError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|r| r.address == address)
            .collect())
    }

    async fn update(&self, target: &str, record: &Record) -> Result<(), DomainError> {
        self.check().await?;
        let mut map = self.records.write().await;
        if map
            .remove(&(record.record_type, target.to_string()))
            .is_none()
        {
            return Err(DomainError::does_not_exist(record.record_type, target));
        }
        map.insert(
            (record.record_type, record.domain.clone()),
            record.address.clone(),
        );
        Ok(())
    }

    async fn delete_by_address(&self, address: &str) -> Result<(), DomainError> {
        self.check().await?;
        self.records.write().await.retain(|_, a| a != address);
        Ok(())
    }

    async fn delete_by_domain(&self, domain: &str) -> Result<(), DomainError> {
        self.check().await?;
        self.records.write().await.retain(|(_, d), _| d != domain);
        Ok(())
    }

    async fn delete_by_type_and_domain(
        &self,
        record_type: RecordType,
        domain: &str,
    ) -> Result<(), DomainError> {
        self.check().await?;
        self.records
            .write()
            .await
            .remove(&(record_type, domain.to_string()));
        Ok(())
    }
}

// ============================================================================
// Mock DnsResponder (answers accumulate into a Vec<Record>)
// ============================================================================

#[derive(Clone, Default)]
pub struct MockDnsResponder {
    fallback_calls: Arc<RwLock<Vec<DnsQuery>>>,
    fallback_answer: Arc<RwLock<Option<Record>>>,
    fallback_fails: Arc<RwLock<bool>>,
}

impl MockDnsResponder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record appended by every successful fallback
    pub async fn set_fallback_answer(&self, record: Record) {
        *self.fallback_answer.write().await = Some(record);
    }

    pub async fn set_fallback_fails(&self, fails: bool) {
        *self.fallback_fails.write().await = fails;
    }

    pub async fn fallback_calls(&self) -> Vec<DnsQuery> {
        self.fallback_calls.read().await.clone()
    }
}

#[async_trait]
impl DnsResponder<Vec<Record>> for MockDnsResponder {
    fn answer(&self, record: &Record, message: &mut Vec<Record>) -> Result<(), DomainError> {
        message.push(record.clone());
        Ok(())
    }

    async fn fallback(
        &self,
        query: &DnsQuery,
        message: &mut Vec<Record>,
    ) -> Result<(), DomainError> {
        self.fallback_calls.write().await.push(query.clone());
        if *self.fallback_fails.read().await {
            return Err(DomainError::Fallback("upstream unreachable".to_string()));
        }
        if let Some(record) = self.fallback_answer.read().await.clone() {
            message.push(record);
        }
        Ok(())
    }
}

// ============================================================================
// Mock HealthReporter
// ============================================================================

#[derive(Clone, Default)]
pub struct MockHealthReporter {
    dns_status: Arc<RwLock<Option<HealthStatus>>>,
    probes: Arc<RwLock<Vec<Option<Record>>>>,
}

impl MockHealthReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_dns_status(&self, status: HealthStatus) {
        *self.dns_status.write().await = Some(status);
    }

    pub async fn probes(&self) -> Vec<Option<Record>> {
        self.probes.read().await.clone()
    }
}

#[async_trait]
impl HealthReporter for MockHealthReporter {
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

    async fn dns(
        &self,
        address: &str,
        fallback: Option<&str>,
        probe: Option<&Record>,
    ) -> DnsReport {
        self.probes.write().await.push(probe.cloned());
        DnsReport {
            status: self
                .dns_status
                .read()
                .await
                .unwrap_or(HealthStatus::Healthy),
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

// ============================================================================
// Fixtures
// ============================================================================

pub fn a(domain: &str, address: &str) -> Record {
    Record::new(RecordType::A, domain, address)
}

pub fn aaaa(domain: &str, address: &str) -> Record {
    Record::new(RecordType::AAAA, domain, address)
}
