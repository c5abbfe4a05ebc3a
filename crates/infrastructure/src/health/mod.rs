mod simple_reporter;
mod traced_reporter;

pub use simple_reporter::SimpleHealthReporter;
pub use traced_reporter::TracedHealthReporter;
