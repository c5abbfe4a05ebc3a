use ferrous_zone_domain::{DomainError, Record};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RecordRepository;

pub struct ListRecordsUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl ListRecordsUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// Every stored record, sorted for stable output.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<Record>, DomainError> {
        let mut records = self.repo.list().await?;
        records.sort();

        debug!(count = records.len(), "Listed records");

        Ok(records)
    }
}
