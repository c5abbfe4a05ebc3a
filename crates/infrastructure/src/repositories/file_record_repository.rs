use super::memory_record_repository::{ops, MemoryRecordRepository, RecordIndex};
use super::store_file::{StoreFile, StoreFileFormat};
use async_trait::async_trait;
use ferrous_zone_application::ports::RecordRepository;
use ferrous_zone_domain::{DomainError, Record, RecordType};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Durable record store: a memory store whose every mutation is followed by
/// a full rewrite of the backing file.
///
/// Reads and writes share the memory store's index lock, and a mutation
/// keeps it until the file is written to a sibling temp path and renamed
/// into place. If that fails the index is restored before the lock drops,
/// so no reader ever sees a change that is not on disk.
pub struct FileRecordRepository {
    memory: MemoryRecordRepository,
    path: PathBuf,
    format: StoreFileFormat,
}

impl FileRecordRepository {
    /// Open or create the store file.
    ///
    /// A missing file is created empty. A file that cannot be read or
    /// decoded is moved to `<path>.corrupt` and replaced by an empty store.
    pub async fn open(path: impl Into<PathBuf>, format: StoreFileFormat) -> Result<Self, DomainError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::IoError(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let (index, needs_write) = match tokio::fs::read(&path).await {
            Ok(bytes) => match format.decode(&bytes) {
                Ok(file) => (file.into_index(), false),
                Err(e) => {
                    move_aside(&path, &e.to_string()).await?;
                    (RecordIndex::new(), true)
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "Store file not found, creating it");
                (RecordIndex::new(), true)
            }
            Err(e) => {
                move_aside(&path, &e.to_string()).await?;
                (RecordIndex::new(), true)
            }
        };

        let repo = Self {
            memory: MemoryRecordRepository::from_index(index),
            path,
            format,
        };

        if needs_write {
            repo.sync(&RecordIndex::new()).await?;
        }

        info!(
            path = %repo.path.display(),
            format = ?repo.format,
            "File record store opened"
        );

        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn sync(&self, index: &RecordIndex) -> Result<(), DomainError> {
        let bytes = self.format.encode(&StoreFile::from_index(index))?;
        let tmp = sibling(&self.path, "tmp");

        write_private(&tmp, &bytes)
            .await
            .map_err(|e| DomainError::Sync(format!("{}: {}", tmp.display(), e)))?;

        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| DomainError::Sync(format!("{}: {}", self.path.display(), e)))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Store file synced");
        Ok(())
    }

    /// Apply `mutation` and persist under one hold of the index lock,
    /// restoring the previous state if persisting fails.
    async fn mutate<F>(&self, mutation: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut RecordIndex) -> Result<(), DomainError>,
    {
        let mut index = self.memory.lock().await;
        let before = index.clone();

        mutation(&mut *index)?;

        if let Err(e) = self.sync(&index).await {
            warn!(error = %e, "Store sync failed, rolling back");
            *index = before;
            return Err(e);
        }
        Ok(())
    }
}

async fn move_aside(path: &Path, reason: &str) -> Result<(), DomainError> {
    let aside = sibling(path, "corrupt");
    warn!(
        path = %path.display(),
        moved_to = %aside.display(),
        error = reason,
        "Store file is unreadable, starting empty"
    );
    tokio::fs::rename(path, &aside).await.map_err(|e| {
        DomainError::IoError(format!("Failed to move unreadable store file: {}", e))
    })
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

async fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await?;
    }
    Ok(())
}

#[async_trait]
impl RecordRepository for FileRecordRepository {
    async fn create(&self, records: &[Record]) -> Result<(), DomainError> {
        self.mutate(|index| {
            ops::insert(index, records);
            Ok(())
        })
        .await
    }

    async fn list(&self) -> Result<Vec<Record>, DomainError> {
        Ok(ops::collect(&*self.memory.lock().await, |_, _| true))
    }

    async fn find_by_type_and_domain(
        &self,
        record_type: RecordType,
        domain: &str,
    ) -> Result<Record, DomainError> {
        ops::find(&*self.memory.lock().await, record_type, domain)
    }

    async fn filter_by_domain(&self, domain: &str) -> Result<Vec<Record>, DomainError> {
        Ok(ops::collect(&*self.memory.lock().await, |d, _| d == domain))
    }

    async fn filter_by_dest(&self, address: &str) -> Result<Vec<Record>, DomainError> {
        Ok(ops::collect(&*self.memory.lock().await, |_, a| a == address))
    }

    async fn update(&self, target: &str, record: &Record) -> Result<(), DomainError> {
        self.mutate(|index| ops::update(index, target, record)).await
    }

    async fn delete_by_address(&self, address: &str) -> Result<(), DomainError> {
        self.mutate(|index| {
            ops::remove_address(index, address);
            Ok(())
        })
        .await
    }

    async fn delete_by_domain(&self, domain: &str) -> Result<(), DomainError> {
        self.mutate(|index| {
            ops::remove_domain(index, domain);
            Ok(())
        })
        .await
    }

    async fn delete_by_type_and_domain(
        &self,
        record_type: RecordType,
        domain: &str,
    ) -> Result<(), DomainError> {
        self.mutate(|index| {
            ops::remove_type_and_domain(index, record_type, domain);
            Ok(())
        })
        .await
    }
}
