use serde::Serialize;

use super::require_id;
use crate::client::Client;
use crate::error::Result;
use crate::models::{RecordRequest, RecordResponse, RecordsResponse};
use crate::transport::Method;

#[derive(Debug, Serialize)]
struct RecordsQuery<'a> {
    page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
    zone_id: &'a str,
}

impl RecordsQuery<'_> {
    // Without a usable page size only `page=1` is sent and the server picks
    // its default page size.
    fn new(zone_id: &str, page: u32, per_page: u32) -> RecordsQuery<'_> {
        if page > 0 && per_page > 0 {
            RecordsQuery {
                page,
                per_page: Some(per_page),
                zone_id,
            }
        } else {
            RecordsQuery {
                page: 1,
                per_page: None,
                zone_id,
            }
        }
    }
}

fn record_path(record_id: &str) -> String {
    format!("/records/{}", urlencoding::encode(record_id))
}

impl Client {
    /// List the records of a zone
    ///
    /// Pass `0` for `page` or `per_page` to request the first page at the
    /// server's default size.
    pub async fn list_records(&self, zone_id: &str, page: u32, per_page: u32) -> Result<RecordsResponse> {
        let query = RecordsQuery::new(zone_id, page, per_page);

        self.perform(Method::GET, "/records", Some(&query), None::<&()>)
            .await
    }

    /// Create a record
    pub async fn create_record(&self, request: &RecordRequest) -> Result<RecordResponse> {
        tracing::debug!(
            "Creating record {} ({}) in zone {}",
            request.name,
            request.record_type,
            request.zone_id
        );

        self.perform(Method::POST, "/records", None::<&()>, Some(request))
            .await
    }

    /// Fetch one record
    pub async fn get_record(&self, record_id: &str) -> Result<RecordResponse> {
        let record_id = require_id(record_id, "record")?;

        self.perform(Method::GET, &record_path(record_id), None::<&()>, None::<&()>)
            .await
    }

    /// Replace the record identified by `request.id` with the request's fields
    pub async fn update_record(&self, request: &RecordRequest) -> Result<RecordResponse> {
        let record_id = require_id(&request.id, "record")?;

        tracing::debug!("Updating record {}", record_id);
        self.perform(Method::PUT, &record_path(record_id), None::<&()>, Some(request))
            .await
    }

    /// Delete one record
    pub async fn delete_record(&self, record_id: &str) -> Result<()> {
        let record_id = require_id(record_id, "record")?;

        tracing::debug!("Deleting record {}", record_id);
        self.perform_empty(Method::DELETE, &record_path(record_id), None::<&()>, None::<&()>)
            .await
    }

    /// Update the matching record, or create it if there is none
    ///
    /// With an `id` this is [`Client::update_record`]. Otherwise the first
    /// page of the zone's records is scanned in response order and the first
    /// record with the same zone, type and name is updated in place (its ID
    /// is used, every other field comes from `request`). No match creates a
    /// new record.
    pub async fn create_or_update_record(&self, request: &RecordRequest) -> Result<RecordResponse> {
        if !request.id.is_empty() {
            return self.update_record(request).await;
        }

        let existing = self.list_records(&request.zone_id, 0, 0).await?;

        match existing.records.iter().find(|record| request.matches(record)) {
            Some(found) => {
                tracing::debug!(
                    "Record {} ({}) exists as {}, updating",
                    request.name,
                    request.record_type,
                    found.id
                );
                let update = RecordRequest {
                    id: found.id.clone(),
                    ..request.clone()
                };
                self.update_record(&update).await
            }
            None => self.create_record(request).await,
        }
    }
}
