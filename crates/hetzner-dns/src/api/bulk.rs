use crate::client::Client;
use crate::error::Result;
use crate::models::{BulkRecordRequest, BulkRecordResponse, RecordRequest};
use crate::transport::Method;

const BULK_PATH: &str = "/records/bulk";

impl Client {
    /// Create many records in one request
    ///
    /// The response splits the input into `records` (created),
    /// `valid_records` and `invalid_records`.
    pub async fn bulk_create_records(&self, records: &[RecordRequest]) -> Result<BulkRecordResponse> {
        tracing::debug!("Bulk creating {} record(s)", records.len());

        let body = BulkRecordRequest::from(records.to_vec());
        self.perform(Method::POST, BULK_PATH, None::<&()>, Some(&body))
            .await
    }

    /// Update many records in one request
    ///
    /// Every request must carry the target record's `id`; the server lists
    /// the ones it could not apply in `failed_records`.
    pub async fn bulk_update_records(&self, records: &[RecordRequest]) -> Result<BulkRecordResponse> {
        tracing::debug!("Bulk updating {} record(s)", records.len());

        let body = BulkRecordRequest::from(records.to_vec());
        self.perform(Method::PUT, BULK_PATH, None::<&()>, Some(&body))
            .await
    }
}
