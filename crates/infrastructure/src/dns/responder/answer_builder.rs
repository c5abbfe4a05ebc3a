use crate::dns::forwarding::MessageBuilder;
use ferrous_zone_domain::{DomainError, Record, RecordType};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS, PTR, TXT};
use hickory_proto::rr::{RData, Record as HickoryRecord};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Converts stored records into resource records.
pub struct AnswerBuilder;

impl AnswerBuilder {
    pub fn build(record: &Record, ttl: u32) -> Result<HickoryRecord, DomainError> {
        let name = MessageBuilder::parse_name(&record.domain)?;

        let rdata = match record.record_type {
            RecordType::A => {
                let ip: Ipv4Addr = record
                    .address
                    .parse()
                    .map_err(|_| invalid_address(record))?;
                RData::A(A(ip))
            }
            RecordType::AAAA => {
                let ip: Ipv6Addr = record
                    .address
                    .parse()
                    .map_err(|_| invalid_address(record))?;
                RData::AAAA(AAAA(ip))
            }
            RecordType::CNAME => RData::CNAME(CNAME(MessageBuilder::parse_name(&record.address)?)),
            RecordType::PTR => RData::PTR(PTR(MessageBuilder::parse_name(&record.address)?)),
            RecordType::NS => RData::NS(NS(MessageBuilder::parse_name(&record.address)?)),
            RecordType::TXT => RData::TXT(TXT::new(vec![record.address.clone()])),
            RecordType::ANY => {
                return Err(DomainError::InvalidRecordType(RecordType::ANY.to_string()))
            }
        };

        Ok(HickoryRecord::from_rdata(name, ttl, rdata))
    }
}

fn invalid_address(record: &Record) -> DomainError {
    DomainError::InvalidAddress(format!(
        "{} record {} -> {}",
        record.record_type, record.domain, record.address
    ))
}
