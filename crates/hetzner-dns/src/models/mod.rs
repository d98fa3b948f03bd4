//! Wire types for zones, records and listings
//!
//! Response types are lenient: absent fields and JSON `null` decode to the
//! field's default instead of failing the whole response.

mod pagination;
mod record;
mod zone;

pub use pagination::{Meta, Pagination};
pub use record::{
    BulkRecordRequest, BulkRecordResponse, Record, RecordRequest, RecordResponse,
    RecordsResponse,
};
pub use zone::{TxtVerification, Zone, ZoneRequest, ZoneResponse, ZoneStatus, ZonesResponse};

use serde::{Deserialize, Deserializer};

/// Decode `null` as `T::default()`
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
