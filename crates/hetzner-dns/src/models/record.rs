use serde::{Deserialize, Serialize};

use super::{Meta, null_as_default};
use crate::timestamp::Timestamp;

/// A DNS resource record as reported by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Textual RR type, e.g. `"A"`, `"MX"`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub record_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub created: Timestamp,
    pub modified: Timestamp,
    /// Owning zone; a reference by ID only
    #[serde(deserialize_with = "null_as_default")]
    pub zone_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    /// Seconds; 0 means "use the zone default"
    #[serde(deserialize_with = "null_as_default")]
    pub ttl: u32,
}

/// Payload for creating or updating a record
///
/// An empty `id` means "create" and is left out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub zone_id: String,
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub ttl: u32,
}

impl RecordRequest {
    /// Create a request for a new record using the zone's default TTL
    pub fn new(
        zone_id: impl Into<String>,
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            zone_id: zone_id.into(),
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl: 0,
        }
    }

    /// Target an existing record
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the TTL (0 = zone default)
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Whether `record` is the one this request refers to
    ///
    /// By exact ID when the request carries one, otherwise by
    /// zone + type + name.
    pub fn matches(&self, record: &Record) -> bool {
        if !self.id.is_empty() {
            return record.id == self.id;
        }

        record.zone_id == self.zone_id
            && record.record_type == self.record_type
            && record.name == self.name
    }
}

/// Response of the single-record endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub record: Record,
}

/// Response of `GET /records`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub records: Vec<Record>,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Meta,
}

/// Body of the bulk endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRecordRequest {
    pub records: Vec<RecordRequest>,
}

impl From<Vec<RecordRequest>> for BulkRecordRequest {
    fn from(records: Vec<RecordRequest>) -> Self {
        Self { records }
    }
}

/// Response of the bulk endpoints
///
/// Create reports `valid_records`/`invalid_records`, update reports
/// `failed_records`. Categories the endpoint doesn't send stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkRecordResponse {
    /// Records the server accepted
    #[serde(deserialize_with = "null_as_default")]
    pub records: Vec<Record>,
    /// Valid but not (yet) processed
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub valid_records: Vec<RecordRequest>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub invalid_records: Vec<RecordRequest>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub failed_records: Vec<RecordRequest>,
}

impl BulkRecordResponse {
    /// Whether every submitted record went through
    pub fn is_complete(&self) -> bool {
        self.invalid_records.is_empty() && self.failed_records.is_empty()
    }
}
