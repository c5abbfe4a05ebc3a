use ferrous_zone_domain::{DomainError, Record, RecordUpdate};
use std::sync::Arc;
use tracing::{info, instrument};

use super::validate_record;
use crate::ports::RecordRepository;

pub struct UpdateRecordUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl UpdateRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// Replace the record stored at (`record.record_type`, `target`),
    /// renaming it when the new domain differs.
    #[instrument(skip(self))]
    pub async fn execute(&self, update: RecordUpdate) -> Result<Record, DomainError> {
        if update.target.trim().is_empty() {
            return Err(DomainError::NoName);
        }
        validate_record(&update.record)?;

        self.repo.update(&update.target, &update.record).await?;

        info!(
            target_domain = %update.target,
            domain = %update.record.domain,
            record_type = %update.record.record_type,
            "Record updated"
        );

        Ok(update.record)
    }
}
