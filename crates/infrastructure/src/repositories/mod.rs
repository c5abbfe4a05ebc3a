mod builder;
mod file_record_repository;
mod memory_record_repository;
mod store_file;
mod traced_record_repository;
mod unimplemented_record_repository;

pub use builder::RecordRepositoryBuilder;
pub use file_record_repository::FileRecordRepository;
pub use memory_record_repository::{MemoryRecordRepository, RecordIndex};
pub use store_file::{AddressEntry, StoreFile, StoreFileFormat, TypeEntry};
pub use traced_record_repository::TracedRecordRepository;
pub use unimplemented_record_repository::UnimplementedRecordRepository;
