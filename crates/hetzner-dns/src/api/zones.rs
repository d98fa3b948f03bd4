use serde::Serialize;

use super::require_id;
use crate::client::Client;
use crate::error::Result;
use crate::models::{ZoneRequest, ZoneResponse, ZonesResponse};
use crate::transport::Method;

#[derive(Debug, Serialize)]
struct ZonesQuery<'a> {
    name: &'a str,
    page: u32,
    per_page: u32,
    search_name: &'a str,
}

// Zone IDs are always one path segment, whatever they contain
fn zone_path(zone_id: &str) -> String {
    format!("/zones/{}", urlencoding::encode(zone_id))
}

impl Client {
    /// List zones, one page at a time
    ///
    /// `name` filters by exact zone name, `search_name` by substring. Empty
    /// strings are sent as-is and mean "no filter".
    pub async fn list_zones(
        &self,
        name: &str,
        search_name: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ZonesResponse> {
        let query = ZonesQuery {
            name,
            page,
            per_page,
            search_name,
        };

        self.perform(Method::GET, "/zones", Some(&query), None::<&()>)
            .await
    }

    /// Fetch one zone
    pub async fn get_zone(&self, zone_id: &str) -> Result<ZoneResponse> {
        let zone_id = require_id(zone_id, "zone")?;

        self.perform(Method::GET, &zone_path(zone_id), None::<&()>, None::<&()>)
            .await
    }

    /// Create a zone
    pub async fn create_zone(&self, request: &ZoneRequest) -> Result<ZoneResponse> {
        tracing::debug!("Creating zone {}", request.name);

        self.perform(Method::POST, "/zones", None::<&()>, Some(request))
            .await
    }

    /// Update a zone's name or default TTL
    pub async fn update_zone(&self, zone_id: &str, request: &ZoneRequest) -> Result<ZoneResponse> {
        let zone_id = require_id(zone_id, "zone")?;

        self.perform(Method::PUT, &zone_path(zone_id), None::<&()>, Some(request))
            .await
    }

    /// Delete a zone and all of its records
    pub async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        let zone_id = require_id(zone_id, "zone")?;

        tracing::debug!("Deleting zone {}", zone_id);
        self.perform_empty(Method::DELETE, &zone_path(zone_id), None::<&()>, None::<&()>)
            .await
    }
}
