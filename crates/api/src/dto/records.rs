use ferrous_zone_domain::{DomainError, Record, RecordFilter, RecordType, RecordUpdate};
use serde::{Deserialize, Serialize};

/// Record as submitted by a client; every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordRequest {
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl RecordRequest {
    pub fn into_record(self) -> Result<Record, DomainError> {
        let record_type = present(&self.record_type);
        let name = present(&self.name);
        let address = present(&self.address);

        if record_type.is_none() && name.is_none() && address.is_none() {
            return Err(DomainError::EmptyRecord);
        }
        let name = name.ok_or(DomainError::NoName)?;
        let record_type: RecordType = record_type.ok_or(DomainError::NoType)?.parse()?;
        let address = address.ok_or(DomainError::NoAddr)?;

        Ok(Record::new(record_type, name, address))
    }
}

/// POST body: a single record or an array of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AddRecordsRequest {
    Many(Vec<RecordRequest>),
    One(RecordRequest),
}

impl AddRecordsRequest {
    pub fn into_records(self) -> Result<Vec<Record>, DomainError> {
        match self {
            AddRecordsRequest::One(record) => Ok(vec![record.into_record()?]),
            AddRecordsRequest::Many(records) => records
                .into_iter()
                .map(RecordRequest::into_record)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecordRequest {
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub record: RecordRequest,
}

impl UpdateRecordRequest {
    pub fn into_update(self) -> Result<RecordUpdate, DomainError> {
        let target = present(&self.target).ok_or(DomainError::NoName)?.to_string();
        Ok(RecordUpdate {
            target,
            record: self.record.into_record()?,
        })
    }
}

/// DELETE body selecting what to remove.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteRecordsRequest {
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl DeleteRecordsRequest {
    pub fn into_filter(self) -> Result<RecordFilter, DomainError> {
        let record_type = present(&self.record_type)
            .map(str::parse::<RecordType>)
            .transpose()?;
        RecordFilter::from_parts(record_type, present(&self.name), present(&self.address))
    }
}
