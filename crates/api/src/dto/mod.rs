pub mod dns;
pub mod records;

pub use dns::DnsServerResponse;
pub use records::{AddRecordsRequest, DeleteRecordsRequest, RecordRequest, UpdateRecordRequest};
