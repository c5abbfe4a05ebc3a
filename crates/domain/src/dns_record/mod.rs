pub mod filter;
pub mod record;
pub mod record_type;

pub use filter::{RecordFilter, RecordUpdate};
pub use record::Record;
pub use record_type::RecordType;
