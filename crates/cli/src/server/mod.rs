pub mod dns;
pub mod web;

pub use dns::{start_dns_server, stop_dns_server};
pub use web::start_web_server;
