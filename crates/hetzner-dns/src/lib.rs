// # hetzner-dns
//
// Client library for the Hetzner DNS REST API.
//
// ## Architecture Overview
//
// - **Timestamp**: tolerant codec for the API's many date-time shapes
// - **Transport**: trait for moving one HTTP request/response; `reqwest` by default
// - **CredentialResolver**: where the API token comes from (config, env, custom)
// - **Client**: the request pipeline (auth, query/body encoding, status, decoding)
// - **api**: typed zone, record and bulk operations on top of `Client`
//
// ## Design Principles
//
// 1. **One call, one round trip**: no caching, no retries, no auto-paging
// 2. **Fixed at construction**: a `Client` is immutable and shareable
// 3. **Injectable seams**: transport and credentials can be swapped for tests
//
// ## Usage
//
// ```rust,no_run
// use hetzner_dns::{Client, ClientConfig, RecordRequest};
//
// # async fn run() -> hetzner_dns::Result<()> {
// let client = Client::new(ClientConfig::default())?;
//
// let zones = client.list_zones("", "", 1, 100).await?;
// for zone in &zones.zones {
//     let records = client.list_records(&zone.id, 0, 0).await?;
//     println!("{}: {} record(s)", zone.name, records.records.len());
// }
//
// client
//     .create_record(&RecordRequest::new("zone-id", "A", "www", "192.0.2.1"))
//     .await?;
// # Ok(())
// # }
// ```

mod api;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod timestamp;
pub mod transport;

// Re-export core types for convenience
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use credentials::{API_KEY_ENV, CredentialResolver, EnvCredentials};
pub use error::{Error, Result};
pub use models::{
    BulkRecordRequest, BulkRecordResponse, Meta, Pagination, Record, RecordRequest,
    RecordResponse, RecordsResponse, TxtVerification, Zone, ZoneRequest, ZoneResponse,
    ZoneStatus, ZonesResponse,
};
pub use timestamp::{Timestamp, TimestampParseError};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
