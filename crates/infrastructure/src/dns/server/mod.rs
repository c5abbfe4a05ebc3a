mod controller;
mod handler;
mod udp_server;

pub use controller::{ControllerError, DnsServerController};
pub use handler::DnsRequestHandler;
pub use udp_server::DnsServer;
