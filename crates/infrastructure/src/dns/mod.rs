pub mod forwarding;
pub mod responder;
pub mod server;
pub mod transport;

pub use responder::{HickoryResponder, TracedDnsResponder};
pub use server::{ControllerError, DnsRequestHandler, DnsServer, DnsServerController};
