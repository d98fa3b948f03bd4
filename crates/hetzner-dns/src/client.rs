// # Transport Core
//
// `Client` turns (method, path, query, body) into one authenticated HTTP
// request, sends it through a `Transport` and decodes the answer.
//
// ## Request pipeline
//
// 1. Resolve the API token (`CredentialResolver`), fail fast if missing
// 2. Base URL + path, query parameters URL-encoded in key order
// 3. JSON body + `Content-Type: application/json` when a body is given
// 4. `Auth-API-Token: <token>`
// 5. Optional verbatim dump of request and response (`debug` flag)
// 6. Transport call bounded by the configured timeout
// 7. Non-2xx → `Error::Api`, otherwise JSON decode into the target type
//
// ## Security
//
// - The token never appears in `Debug` output or in request dumps
// - No retries, no caching: one call, one round trip

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};

use crate::config::ClientConfig;
use crate::credentials::{CredentialResolver, EnvCredentials};
use crate::error::{Error, Result};
use crate::transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, Url};

/// Header carrying the raw API token
pub const AUTH_HEADER: HeaderName = HeaderName::from_static("auth-api-token");

/// Tracing target of the request/response dumps
pub const DUMP_TARGET: &str = "hetzner_dns::dump";

/// Hetzner DNS API client
///
/// Cheap to clone; clones share the transport and credential resolver.
/// Everything is fixed at construction, so a client can be used from any
/// number of tasks at once.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    debug: bool,
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialResolver>,
}

// Custom Debug implementation that hides the credential source
impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .field("credentials", &"<REDACTED>")
            .finish()
    }
}

impl Client {
    /// Create a client using the default `reqwest` transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client sending requests through `transport`
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| Error::config(format!("Invalid base URL {base_url}: {e}")))?;

        Ok(Self {
            base_url,
            timeout: config.timeout(),
            debug: config.debug,
            transport,
            credentials: Arc::new(EnvCredentials::new(config.api_key)),
        })
    }

    /// Replace the credential resolver
    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialResolver>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one request and decode the JSON response into `T`
    ///
    /// `query` must serialize to a flat object; its fields become query
    /// parameters, sorted by name. `body` is sent as JSON.
    pub async fn perform<Q, B, T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(method, path, query, body).await?;

        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::debug!("can't decode response of {}: {}", path, e);
            Error::Decode(e)
        })
    }

    /// Perform one request whose response body is not needed
    pub async fn perform_empty<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<()>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        self.execute(method, path, query, body).await.map(|_| ())
    }

    async fn execute<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<HttpResponse>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let token = self
            .credentials
            .resolve()
            .filter(|token| !token.is_empty())
            .ok_or(Error::MissingCredentials)?;

        let request = self.build_request(method, path, query, body, &token)?;
        let target = format!("{} {}", request.method, path);

        if self.debug {
            tracing::info!(target: DUMP_TARGET, "{}", dump_request(&request));
        }

        tracing::debug!("Performing request: {}", target);

        let response = tokio::time::timeout(self.timeout, self.transport.execute(request))
            .await
            .map_err(|elapsed| {
                Error::transport(format!("{target} timed out after {:?}", self.timeout), elapsed)
            })??;

        if self.debug {
            tracing::info!(target: DUMP_TARGET, "{}", dump_response(&response));
        }

        tracing::debug!("Response status for {}: {}", target, response.status);

        if !response.is_success() {
            return Err(Error::api(response.status, response.body_text()));
        }

        Ok(response)
    }

    fn build_request<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
        token: &str,
    ) -> Result<HttpRequest>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| Error::config(format!("Invalid request URL for {path}: {e}")))?;

        if let Some(query) = query {
            let pairs = encode_query(query)?;
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        let mut request = HttpRequest::new(method, url);

        let token = HeaderValue::from_str(token)
            .map_err(|_| Error::config("API key contains characters not allowed in a header"))?;
        request.headers.insert(AUTH_HEADER, token);

        if let Some(body) = body {
            let json = serde_json::to_vec(body)
                .map_err(|e| Error::encode(format!("can't encode body params: {e}")))?;
            request
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            request.body = Some(json);
        }

        Ok(request)
    }
}

/// Flatten `params` into sorted `(name, value)` query pairs
///
/// `null` fields are skipped; nested objects and arrays are rejected.
pub(crate) fn encode_query<Q: Serialize + ?Sized>(params: &Q) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params)
        .map_err(|e| Error::encode(format!("can't process query params: {e}")))?;

    let serde_json::Value::Object(fields) = value else {
        return Err(Error::encode("query params must serialize to an object"));
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (name, value) in fields {
        let value = match value {
            serde_json::Value::Null => continue,
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            _ => {
                return Err(Error::encode(format!(
                    "query param {name} must be a scalar"
                )));
            }
        };
        pairs.push((name, value));
    }

    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(pairs)
}

fn dump_request(request: &HttpRequest) -> String {
    let mut dump = format!("{} {} HTTP/1.1\n", request.method, request.url);
    for (name, value) in &request.headers {
        let value = if *name == AUTH_HEADER {
            Cow::Borrowed("<REDACTED>")
        } else {
            String::from_utf8_lossy(value.as_bytes())
        };
        dump.push_str(&format!("{name}: {value}\n"));
    }
    if let Some(body) = request.body_text() {
        dump.push('\n');
        dump.push_str(&body);
    }
    dump
}

fn dump_response(response: &HttpResponse) -> String {
    format!("HTTP/1.1 {}\n\n{}", response.status, response.body_text())
}
