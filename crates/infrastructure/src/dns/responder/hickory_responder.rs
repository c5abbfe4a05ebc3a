use super::answer_builder::AnswerBuilder;
use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use ferrous_zone_application::ports::DnsResponder;
use ferrous_zone_domain::{DnsQuery, DomainError, Record, RecordType};
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Writes answers into a hickory `Message` and forwards misses upstream.
pub struct HickoryResponder {
    fallback_servers: Vec<SocketAddr>,
    query_timeout: Duration,
    ttl: u32,
}

impl HickoryResponder {
    pub fn new(fallback_servers: Vec<SocketAddr>, query_timeout: Duration, ttl: u32) -> Self {
        Self {
            fallback_servers,
            query_timeout,
            ttl,
        }
    }

    pub fn fallback_servers(&self) -> &[SocketAddr] {
        &self.fallback_servers
    }

    fn copy_upstream(upstream: &Message, message: &mut Message) {
        if upstream.answers().is_empty() {
            message.set_response_code(upstream.response_code());
            return;
        }
        for answer in upstream.answers() {
            message.add_answer(answer.clone());
        }
    }
}

#[async_trait]
impl DnsResponder<Message> for HickoryResponder {
    fn answer(&self, record: &Record, message: &mut Message) -> Result<(), DomainError> {
        let answer = AnswerBuilder::build(record, self.ttl)?;
        message.add_answer(answer);
        Ok(())
    }

    async fn fallback(&self, query: &DnsQuery, message: &mut Message) -> Result<(), DomainError> {
        if self.fallback_servers.is_empty() {
            return Err(DomainError::Fallback(
                "no fallback servers configured".to_string(),
            ));
        }

        let record_type = query.record_type.unwrap_or(RecordType::ANY);
        let (id, bytes) = MessageBuilder::build_query(&query.domain, record_type)?;

        let mut last_error = None;
        for server in &self.fallback_servers {
            let reply = UdpTransport::new(*server)
                .send(&bytes, id, self.query_timeout)
                .await
                .and_then(|raw| ResponseParser::parse(&raw, id));

            match reply {
                Ok(upstream) => {
                    debug!(
                        server = %server,
                        answers = upstream.answers().len(),
                        "Fallback answered"
                    );
                    Self::copy_upstream(&upstream, message);
                    return Ok(());
                }
                Err(e) => {
                    warn!(server = %server, error = %e, "Fallback server failed");
                    last_error = Some(e);
                }
            }
        }

        Err(DomainError::Fallback(match last_error {
            Some(e) => e.to_string(),
            None => "no fallback server replied".to_string(),
        }))
    }
}
