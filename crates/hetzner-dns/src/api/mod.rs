//! Typed operations on zones and records
//!
//! Each operation is an `impl Client` block method that shapes its
//! parameters and hands them to [`Client::perform`](crate::Client::perform).
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | `list_zones` | `GET /zones` |
//! | `get_zone` / `create_zone` / `update_zone` / `delete_zone` | `/zones[/{id}]` |
//! | `list_records` | `GET /records` |
//! | `create_record` | `POST /records` |
//! | `get_record` / `update_record` / `delete_record` | `/records/{id}` |
//! | `create_or_update_record` | `GET /records` then `POST` or `PUT` |
//! | `bulk_create_records` / `bulk_update_records` | `POST` / `PUT /records/bulk` |

mod bulk;
mod records;
mod zones;

use crate::error::{Error, Result};

/// Reject empty identifiers before anything is sent
fn require_id<'a>(id: &'a str, what: &'static str) -> Result<&'a str> {
    if id.is_empty() {
        return Err(Error::MissingIdentifier(what));
    }
    Ok(id)
}
