mod dns_responder;
mod health_reporter;
mod record_repository;

pub use dns_responder::DnsResponder;
pub use health_reporter::HealthReporter;
pub use record_repository::RecordRepository;
