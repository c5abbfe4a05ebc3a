pub mod dns;
pub mod health;
pub mod records;

pub use dns::{dns_status, reload_dns, start_dns, stop_dns};
pub use health::get_health;
pub use records::{
    add_records, delete_records, get_record, get_records_by_address, get_records_by_domain,
    list_records, update_record,
};
