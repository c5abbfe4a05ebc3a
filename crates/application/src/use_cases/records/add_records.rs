use ferrous_zone_domain::{DomainError, Record};
use std::sync::Arc;
use tracing::{info, instrument};

use super::validate_record;
use crate::ports::RecordRepository;

pub struct AddRecordsUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl AddRecordsUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// Upsert a batch; nothing is written if any record fails validation.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn execute(&self, records: Vec<Record>) -> Result<Vec<Record>, DomainError> {
        if records.is_empty() {
            return Err(DomainError::EmptyRecord);
        }
        for record in &records {
            validate_record(record)?;
        }

        self.repo.create(&records).await?;

        info!(count = records.len(), "Records stored");

        Ok(records)
    }
}
