use async_trait::async_trait;
use ferrous_zone_application::ports::RecordRepository;
use ferrous_zone_domain::{DomainError, Record, RecordType};
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};

/// Canonical store state: type → (domain → address).
pub type RecordIndex = HashMap<RecordType, HashMap<String, String>>;

/// Volatile record store.
///
/// A single mutex guards the whole index; every read and write holds it for
/// the duration of the call.
#[derive(Default)]
pub struct MemoryRecordRepository {
    index: Mutex<RecordIndex>,
}

impl MemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_index(index: RecordIndex) -> Self {
        Self {
            index: Mutex::new(index),
        }
    }

    /// Hold the index lock; the durable store keeps it across the file sync.
    pub async fn lock(&self) -> MutexGuard<'_, RecordIndex> {
        self.index.lock().await
    }

    /// Copy of the full index.
    pub async fn snapshot(&self) -> RecordIndex {
        self.index.lock().await.clone()
    }
}

/// Operations over an index the caller already holds.
pub(crate) mod ops {
    use super::RecordIndex;
    use ferrous_zone_domain::{DomainError, Record, RecordType};

    pub fn collect<F>(index: &RecordIndex, mut keep: F) -> Vec<Record>
    where
        F: FnMut(&str, &str) -> bool,
    {
        index
            .iter()
            .flat_map(|(record_type, names)| {
                names
                    .iter()
                    .map(move |(domain, address)| (*record_type, domain, address))
            })
            .filter(|(_, domain, address)| keep(domain, address))
            .map(|(record_type, domain, address)| {
                Record::new(record_type, domain.clone(), address.clone())
            })
            .collect()
    }

    pub fn find(
        index: &RecordIndex,
        record_type: RecordType,
        domain: &str,
    ) -> Result<Record, DomainError> {
        index
            .get(&record_type)
            .and_then(|names| names.get(domain))
            .map(|address| Record::new(record_type, domain, address.clone()))
            .ok_or_else(|| DomainError::does_not_exist(record_type, domain))
    }

    pub fn insert(index: &mut RecordIndex, records: &[Record]) {
        for record in records {
            index
                .entry(record.record_type)
                .or_default()
                .insert(record.domain.clone(), record.address.clone());
        }
    }

    pub fn update(index: &mut RecordIndex, target: &str, record: &Record) -> Result<(), DomainError> {
        let names = index
            .get_mut(&record.record_type)
            .filter(|names| names.contains_key(target))
            .ok_or_else(|| DomainError::does_not_exist(record.record_type, target))?;

        if record.domain != target {
            names.remove(target);
        }
        names.insert(record.domain.clone(), record.address.clone());
        Ok(())
    }

    pub fn remove_address(index: &mut RecordIndex, address: &str) {
        for names in index.values_mut() {
            names.retain(|_, a| a != address);
        }
        prune(index);
    }

    pub fn remove_domain(index: &mut RecordIndex, domain: &str) {
        for names in index.values_mut() {
            names.remove(domain);
        }
        prune(index);
    }

    pub fn remove_type_and_domain(index: &mut RecordIndex, record_type: RecordType, domain: &str) {
        if let Some(names) = index.get_mut(&record_type) {
            names.remove(domain);
        }
        prune(index);
    }

    fn prune(index: &mut RecordIndex) {
        index.retain(|_, names| !names.is_empty());
    }
}

#[async_trait]
impl RecordRepository for MemoryRecordRepository {
    async fn create(&self, records: &[Record]) -> Result<(), DomainError> {
        ops::insert(&mut *self.lock().await, records);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Record>, DomainError> {
        Ok(ops::collect(&*self.lock().await, |_, _| true))
    }

    async fn find_by_type_and_domain(
        &self,
        record_type: RecordType,
        domain: &str,
    ) -> Result<Record, DomainError> {
        ops::find(&*self.lock().await, record_type, domain)
    }

    async fn filter_by_domain(&self, domain: &str) -> Result<Vec<Record>, DomainError> {
        Ok(ops::collect(&*self.lock().await, |d, _| d == domain))
    }

    async fn filter_by_dest(&self, address: &str) -> Result<Vec<Record>, DomainError> {
        Ok(ops::collect(&*self.lock().await, |_, a| a == address))
    }

    async fn update(&self, target: &str, record: &Record) -> Result<(), DomainError> {
        ops::update(&mut *self.lock().await, target, record)
    }

    async fn delete_by_address(&self, address: &str) -> Result<(), DomainError> {
        ops::remove_address(&mut *self.lock().await, address);
        Ok(())
    }

    async fn delete_by_domain(&self, domain: &str) -> Result<(), DomainError> {
        ops::remove_domain(&mut *self.lock().await, domain);
        Ok(())
    }

    async fn delete_by_type_and_domain(
        &self,
        record_type: RecordType,
        domain: &str,
    ) -> Result<(), DomainError> {
        ops::remove_type_and_domain(&mut *self.lock().await, record_type, domain);
        Ok(())
    }
}
