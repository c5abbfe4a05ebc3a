use super::{
    FileRecordRepository, MemoryRecordRepository, StoreFileFormat, TracedRecordRepository,
    UnimplementedRecordRepository,
};
use ferrous_zone_application::ports::RecordRepository;
use ferrous_zone_domain::config::StoreConfig;
use ferrous_zone_domain::DomainError;
use std::sync::Arc;
use tracing::{info, warn};

/// Assembles the configured store and its decorators.
#[derive(Default)]
pub struct RecordRepositoryBuilder {
    config: Option<StoreConfig>,
}

impl RecordRepositoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Without a configuration the result is the unimplemented store, which
    /// rejects every operation.
    pub async fn build(self) -> Result<Arc<dyn RecordRepository>, DomainError> {
        let Some(config) = self.config else {
            warn!(
                backend = "unimplemented",
                "No store configuration given, every record operation will fail"
            );
            return Ok(Arc::new(TracedRecordRepository::new(Arc::new(
                UnimplementedRecordRepository,
            ))));
        };

        let store: Arc<dyn RecordRepository> =
            match (StoreFileFormat::for_backend(config.backend), config.path) {
                (None, _) => Arc::new(MemoryRecordRepository::new()),
                (Some(format), Some(path)) if !path.trim().is_empty() => {
                    Arc::new(FileRecordRepository::open(path, format).await?)
                }
                (Some(_), _) => {
                    return Err(DomainError::InvalidConfig(format!(
                        "store backend '{}' requires a path",
                        config.backend
                    )))
                }
            };

        info!(backend = %config.backend, "Record store ready");

        Ok(Arc::new(TracedRecordRepository::new(store)))
    }
}
