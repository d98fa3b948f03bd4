use async_trait::async_trait;
use std::time::Duration;

use super::{HttpRequest, HttpResponse, Transport};
use crate::error::{Error, Result};

/// Default transport backed by a shared [`reqwest::Client`]
///
/// The inner client pools connections and is cheap to clone.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport("can't build HTTP client", e))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client (proxies, custom TLS, ...)
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let target = format!("{} {}", request.method, request.url.path());

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::transport(target.clone(), e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(format!("can't read body of {target}"), e))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
