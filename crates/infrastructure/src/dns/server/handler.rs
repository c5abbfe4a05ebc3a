use crate::dns::forwarding::{MessageBuilder, RecordTypeMapper};
use ferrous_zone_application::use_cases::ResolveQueryUseCase;
use ferrous_zone_domain::DnsQuery;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns one request datagram into one response datagram.
pub struct DnsRequestHandler {
    use_case: Arc<ResolveQueryUseCase<Message>>,
}

impl DnsRequestHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase<Message>>) -> Self {
        Self { use_case }
    }

    /// `None` means the datagram is dropped without a reply.
    pub async fn handle(&self, request_bytes: &[u8]) -> Option<Vec<u8>> {
        let request = match Message::from_vec(request_bytes) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, "Dropping malformed datagram");
                return None;
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(id = request.id(), "Ignoring datagram that is not a query");
            return None;
        }

        let response = self.respond(&request).await;

        match MessageBuilder::serialize_message(&response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(id = request.id(), error = %e, "Failed to serialize response");
                None
            }
        }
    }

    async fn respond(&self, request: &Message) -> Message {
        let mut response = MessageBuilder::build_response(request);

        if request.op_code() != OpCode::Query {
            response.set_response_code(ResponseCode::NotImp);
            return response;
        }

        for question in request.queries() {
            let Some(record_type) = RecordTypeMapper::from_hickory(question.query_type()) else {
                debug!(
                    name = %question.name(),
                    query_type = %question.query_type(),
                    "Unsupported query type"
                );
                continue;
            };

            let query = DnsQuery::from_wire_name(&question.name().to_utf8(), Some(record_type));
            if let Err(e) = self.use_case.execute(&query, &mut response).await {
                warn!(domain = %query.domain, error = %e, "Query resolution failed");
                response.set_response_code(ResponseCode::ServFail);
            }
        }

        response
    }
}
