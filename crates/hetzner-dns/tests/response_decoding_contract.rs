//! Architectural Contract Test: Response Handling
//!
//! This test verifies how server answers turn into results.
//!
//! Constraints verified:
//! - 2xx bodies decode into the typed responses
//! - Non-2xx is always Error::Api, even with a decodable body
//! - Malformed JSON and unknown timestamp layouts are Error::Decode
//! - Network failures and timeouts are Error::Transport
//! - Exactly one transport call per operation, no retries
//!
//! If this test fails, someone has added:
//! - Automatic retries
//! - Lenient handling of error statuses

mod common;

use common::*;
use hetzner_dns::{Client, Error, RecordRequest, Timestamp, ZoneStatus};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn zones_page_decodes() {
    let transport = MockTransport::new();
    transport.push_response(200, SAMPLE_ZONES);
    let client = client(&transport);

    let page = client.list_zones("", "", 1, 100).await.unwrap();

    assert_eq!(page.zones.len(), 1);
    let zone = &page.zones[0];
    assert_eq!(zone.id, "sample-id");
    assert_eq!(zone.status, ZoneStatus::Verified);
    assert_eq!(zone.records_count, 0);
    assert_eq!(zone.created, Timestamp::parse("2021-01-28T14:23:31Z").unwrap());
    assert_eq!(
        zone.modified.to_utc().unwrap().timestamp_subsec_millis(),
        123
    );
    assert_eq!(page.meta.pagination.page, 1);
    assert_eq!(page.meta.pagination.per_page, 100);
    assert!(!page.meta.pagination.has_next());
}

#[tokio::test]
async fn records_with_mixed_timestamp_layouts_decode() {
    let transport = MockTransport::new();
    transport.push_response(200, SAMPLE_RECORDS);
    let client = client(&transport);

    let page = client.list_records("sample-zone", 0, 0).await.unwrap();

    assert_eq!(page.records.len(), 3);
    assert!(page.records.iter().all(|r| !r.created.is_zero()));
    assert!(page.records[1].modified.is_zero());
    assert_eq!(page.records[1].record_type, "MX");
    assert_eq!(page.records[1].ttl, 3600);
}

#[tokio::test]
async fn error_status_wins_over_body() {
    for status in [400u16, 401, 404, 422, 500, 503] {
        let transport = MockTransport::new();
        // A perfectly decodable body must not hide the status
        transport.push_response(status, SAMPLE_RECORD);
        let client = client(&transport);

        let err = client.get_record("sample-id").await.unwrap_err();

        match err {
            Error::Api { status: got, body } => {
                assert_eq!(got, status);
                assert_eq!(body, SAMPLE_RECORD);
            }
            other => panic!("status {status}: expected Api error, got {other:?}"),
        }
        assert_eq!(transport.call_count(), 1, "no retries on {status}");
    }
}

#[tokio::test]
async fn delete_reports_error_status() {
    let transport = MockTransport::new();
    transport.push_response(404, r#"{"message":"record not found"}"#);
    let client = client(&transport);

    let err = client.delete_record("missing").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let transport = MockTransport::new();
    transport.push_response(200, "<html>gateway</html>");
    let client = client(&transport);

    let err = client.list_zones("", "", 1, 100).await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unknown_timestamp_layout_is_a_decode_error() {
    let transport = MockTransport::new();
    transport.push_response(
        200,
        r#"{"record": {"id": "r", "created": "28/01/2021 14:23", "type": "A"}}"#,
    );
    let client = client(&transport);

    let err = client.get_record("r").await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)), "got {err:?}");
    assert!(err.to_string().contains("28/01/2021 14:23"));
}

#[tokio::test]
async fn network_failure_is_a_transport_error() {
    let transport = MockTransport::new();
    transport.push_failure("connection refused");
    let client = client(&transport);

    let err = client.list_zones("", "", 1, 100).await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }), "got {err:?}");
    assert!(err.is_retryable());
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn slow_server_times_out() {
    let client = Client::with_transport(
        test_config().with_timeout(Duration::from_secs(1)),
        Arc::new(StalledTransport),
    )
    .unwrap()
    .with_credentials(Arc::new(|| Some("dummy".to_string())));

    let err = client.list_zones("", "", 1, 100).await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }), "got {err:?}");
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn bulk_create_categories_decode() {
    let transport = MockTransport::new();
    transport.push_response(
        200,
        r#"{
          "records": [{"type": "A", "id": "new-1", "created": "2021-01-28T14:23:31Z",
                       "modified": "2021-01-28T14:23:31Z", "zone_id": "zone-1",
                       "name": "a", "value": "192.0.2.1", "ttl": 0}],
          "valid_records": [],
          "invalid_records": [{"zone_id": "zone-1", "type": "BOGUS", "name": "b",
                               "value": "x", "ttl": 0}]
        }"#,
    );
    let client = client(&transport);

    let batch = vec![
        RecordRequest::new("zone-1", "A", "a", "192.0.2.1"),
        RecordRequest::new("zone-1", "BOGUS", "b", "x"),
    ];
    let result = client.bulk_create_records(&batch).await.unwrap();

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].id, "new-1");
    assert!(result.valid_records.is_empty());
    assert_eq!(result.invalid_records.len(), 1);
    assert_eq!(result.invalid_records[0].record_type, "BOGUS");
    assert!(result.failed_records.is_empty());
    assert!(!result.is_complete());
}

#[tokio::test]
async fn bulk_update_failures_decode() {
    let transport = MockTransport::new();
    transport.push_response(
        200,
        r#"{"records": [], "failed_records": [{"id": "gone", "zone_id": "zone-1",
            "type": "A", "name": "a", "value": "192.0.2.9", "ttl": 60}]}"#,
    );
    let client = client(&transport);

    let batch = vec![RecordRequest::new("zone-1", "A", "a", "192.0.2.9").with_id("gone")];
    let result = client.bulk_update_records(&batch).await.unwrap();

    assert_eq!(result.failed_records.len(), 1);
    assert_eq!(result.failed_records[0].id, "gone");
    assert!(!result.is_complete());
}
