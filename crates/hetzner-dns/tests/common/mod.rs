//! Test doubles and common utilities for client contract tests
//!
//! - [`MockTransport`]: records every request and answers from a script
//! - [`TestServer`]: a tiny HTTP/1.1 server on a loopback socket, for
//!   exercising the real `reqwest` transport end to end

#![allow(dead_code)]

use async_trait::async_trait;
use hetzner_dns::error::Result;
use hetzner_dns::{Client, ClientConfig, Error, HttpRequest, HttpResponse, Transport};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const SAMPLE_ZONES: &str = r#"{
  "zones": [
    {
      "id": "sample-id",
      "created": "2021-01-28T14:23:31Z",
      "modified": "2021-01-28 14:23:31.123 +0000 UTC",
      "legacy_dns_host": "legacy-dns-host",
      "legacy_ns": ["legacy-ns-1"],
      "name": "sample-name",
      "ns": ["sample-ns-1"],
      "owner": "owner",
      "paused": true,
      "permission": "string",
      "project": "sample-project",
      "registrar": "sample-registrar",
      "status": "verified",
      "ttl": 0,
      "verified": "2021-01-28T14:23:31Z",
      "records_count": 0,
      "is_secondary_dns": true,
      "txt_verification": {"name": "string", "token": "string"}
    }
  ],
  "meta": {
    "pagination": {"page": 1, "per_page": 100, "last_page": 1, "total_entries": 1}
  }
}"#;

pub const SAMPLE_RECORDS: &str = r#"{
  "records": [
    {"type": "A", "id": "rec-1", "created": "2021-01-28T14:23:31Z",
     "modified": "2021-01-28T14:23:31Z", "zone_id": "sample-zone",
     "name": "www", "value": "192.0.2.1", "ttl": 0},
    {"type": "MX", "id": "rec-2", "created": "2021-01-28 14:23:31.12 +0000 UTC",
     "modified": "", "zone_id": "sample-zone",
     "name": "@", "value": "10 mail.example.com.", "ttl": 3600},
    {"type": "A", "id": "rec-3", "created": "2021-01-28 14:23:31 +0000 UTC",
     "modified": "2021-01-28T14:23:31.5Z", "zone_id": "sample-zone",
     "name": "www", "value": "192.0.2.2", "ttl": 0}
  ]
}"#;

pub const SAMPLE_RECORD: &str = r#"{
  "record": {
    "type": "A",
    "id": "sample-id",
    "created": "2021-01-28T14:23:31Z",
    "modified": "2021-01-28T14:23:31Z",
    "zone_id": "sample-zone",
    "name": "sample-name",
    "value": "sample-value",
    "ttl": 0
  }
}"#;

/// Scripted reply of a [`MockTransport`]
enum Reply {
    Response(HttpResponse),
    Failure(String),
}

/// A Transport that records requests and answers from a queue
///
/// When the queue is empty it answers `200 {}`.
pub struct MockTransport {
    /// Call counter for execute()
    call_count: AtomicUsize,
    /// Every request seen, in order
    requests: Mutex<Vec<HttpRequest>>,
    /// Replies still to hand out
    replies: Mutex<VecDeque<Reply>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(VecDeque::new()),
        })
    }

    /// Queue a response
    pub fn push_response(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Response(HttpResponse::new(status, body)));
    }

    /// Queue a network-level failure
    pub fn push_failure(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Failure(message.to_string()));
    }

    /// Get the number of times execute() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get all recorded requests
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the most recent request
    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Failure(message)) => Err(Error::transport(
                "mock transport",
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message),
            )),
            None => Ok(HttpResponse::new(200, "{}")),
        }
    }
}

/// A Transport that never answers within any reasonable timeout
pub struct StalledTransport;

#[async_trait]
impl Transport for StalledTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(HttpResponse::new(200, "{}"))
    }
}

/// Client over `transport` with a fixed token
pub fn client(transport: &Arc<MockTransport>) -> Client {
    Client::with_transport(test_config(), transport.clone())
        .expect("valid config")
        .with_credentials(Arc::new(|| Some("dummy".to_string())))
}

/// Client over `transport` that can never resolve a token
pub fn client_without_credentials(transport: &Arc<MockTransport>) -> Client {
    Client::with_transport(test_config(), transport.clone())
        .expect("valid config")
        .with_credentials(Arc::new(|| None))
}

pub fn test_config() -> ClientConfig {
    ClientConfig::new().with_base_url("https://dns.test/api/v1")
}

/// Query parameters of a request, in wire order
pub fn query_pairs(request: &HttpRequest) -> Vec<(String, String)> {
    request.url.query_pairs().into_owned().collect()
}

/// Request body parsed as JSON
pub fn json_body(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_slice(request.body.as_deref().expect("request has a body"))
        .expect("body is JSON")
}

/// A request as seen by [`TestServer`]
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    /// Path and query, as sent on the request line
    pub target: String,
    /// Lower-cased header names
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Minimal HTTP/1.1 server answering every request with one canned reply
pub struct TestServer {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl TestServer {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let captured = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&captured);
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let sink = Arc::clone(&sink);
                tokio::spawn(async move {
                    if let Some(request) = read_request(&mut socket).await {
                        sink.lock().unwrap().push(request);
                    }
                    let response = format!(
                        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        if status < 300 { "OK" } else { "Error" },
                        body.len(),
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}/api/v1"),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    /// Client using the real reqwest transport against this server
    pub fn client(&self, token: Option<&str>) -> Client {
        let http = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("reqwest client");
        let token = token.map(str::to_string);

        Client::with_transport(
            ClientConfig::new().with_base_url(&self.base_url),
            Arc::new(hetzner_dns::ReqwestTransport::from_client(http)),
        )
        .expect("valid config")
        .with_credentials(Arc::new(move || token.clone()))
    }
}

async fn read_request(socket: &mut TcpStream) -> Option<CapturedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some(CapturedRequest {
        method,
        target,
        headers,
        body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
    })
}
