use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Meta, null_as_default};
use crate::timestamp::Timestamp;

/// Verification state of a zone
///
/// Values the server adds later are kept verbatim in [`ZoneStatus::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ZoneStatus {
    #[default]
    Unverified,
    Verified,
    Failed,
    Other(String),
}

impl ZoneStatus {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            ZoneStatus::Unverified => "unverified",
            ZoneStatus::Verified => "verified",
            ZoneStatus::Failed => "failed",
            ZoneStatus::Other(status) => status,
        }
    }
}

impl From<String> for ZoneStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "unverified" => ZoneStatus::Unverified,
            "verified" => ZoneStatus::Verified,
            "failed" => ZoneStatus::Failed,
            _ => ZoneStatus::Other(status),
        }
    }
}

impl From<ZoneStatus> for String {
    fn from(status: ZoneStatus) -> Self {
        match status {
            ZoneStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TXT record the server expects before it marks a zone verified
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxtVerification {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
}

/// A DNS zone as reported by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    /// Server-assigned identifier, never empty once returned
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub created: Timestamp,
    pub modified: Timestamp,
    #[serde(deserialize_with = "null_as_default")]
    pub legacy_dns_host: String,
    #[serde(deserialize_with = "null_as_default")]
    pub legacy_ns: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ns: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(deserialize_with = "null_as_default")]
    pub paused: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub permission: String,
    #[serde(deserialize_with = "null_as_default")]
    pub project: String,
    #[serde(deserialize_with = "null_as_default")]
    pub registrar: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: ZoneStatus,
    /// Default TTL for records that don't set one
    #[serde(deserialize_with = "null_as_default")]
    pub ttl: u32,
    pub verified: Timestamp,
    #[serde(deserialize_with = "null_as_default")]
    pub records_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub is_secondary_dns: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub txt_verification: TxtVerification,
}

/// Payload for creating or updating a zone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl ZoneRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// Response of `GET /zones`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZonesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub zones: Vec<Zone>,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Meta,
}

/// Response of the single-zone endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub zone: Zone,
}
