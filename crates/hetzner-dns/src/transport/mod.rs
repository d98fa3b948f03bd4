//! HTTP transport abstraction
//!
//! The client turns every operation into one [`HttpRequest`] and hands it to
//! a [`Transport`]. The default transport is [`ReqwestTransport`]; tests and
//! embedders can plug in their own (recording, proxying, offline...).
//!
//! A transport only moves bytes. Status handling, authentication and JSON
//! decoding stay in [`Client`](crate::Client).

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use async_trait::async_trait;
use std::borrow::Cow;

pub use reqwest::header::HeaderMap;
pub use reqwest::{Method, Url};

use crate::error::Result;

/// A fully-formed request, ready to send
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the query string
    pub url: Url,
    /// Request headers (auth and content type included)
    pub headers: HeaderMap,
    /// Serialized JSON body, if any
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a request without headers or body
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Header value as text, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Body as text (lossy), if any
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        self.body.as_deref().map(String::from_utf8_lossy)
    }
}

/// A fully-read response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Body as text (lossy)
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Executes HTTP requests
///
/// # Contract
///
/// - Exactly one network exchange per call; no retries
/// - Failures that produced no HTTP response map to
///   [`Error::Transport`](crate::Error::Transport)
/// - Any HTTP response, whatever its status, is returned as `Ok`
///
/// Implementations must be usable from many tasks at once.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and read the complete response
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}
