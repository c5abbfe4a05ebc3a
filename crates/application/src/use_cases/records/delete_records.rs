use ferrous_zone_domain::{DomainError, RecordFilter};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RecordRepository;

pub struct DeleteRecordsUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl DeleteRecordsUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, filter: RecordFilter) -> Result<(), DomainError> {
        self.repo.delete(&filter).await?;

        info!(filter = ?filter, "Records deleted");

        Ok(())
    }
}
