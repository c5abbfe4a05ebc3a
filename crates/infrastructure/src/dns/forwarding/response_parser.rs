use ferrous_zone_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Parse an upstream reply, checking it answers the query with `expected_id`.
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<Message, DomainError> {
        let message = Message::from_vec(response_bytes)
            .map_err(|e| DomainError::Fallback(format!("Failed to parse DNS response: {}", e)))?;

        if message.id() != expected_id {
            return Err(DomainError::Fallback(format!(
                "Response ID mismatch: expected {}, got {}",
                expected_id,
                message.id()
            )));
        }

        debug!(
            rcode = Self::rcode_to_status(message.response_code()),
            answers = message.answers().len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(message)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
