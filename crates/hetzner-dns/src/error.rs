//! Error types for the Hetzner DNS client
//!
//! Every public operation returns [`Result`]. The variants are deliberately
//! few: callers usually only need to tell "fix your setup" errors
//! ([`Error::MissingCredentials`], [`Error::MissingIdentifier`]) apart from
//! transient ones ([`Error::Transport`]) and server rejections
//! ([`Error::Api`]).

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed underlying cause carried by [`Error::Transport`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Core error type for the Hetzner DNS client
#[derive(Error, Debug)]
pub enum Error {
    /// No API token could be resolved; no request was sent
    #[error("API key has not been set (configure one or export {})", crate::credentials::API_KEY_ENV)]
    MissingCredentials,

    /// A required identifier was empty; no request was sent
    #[error("missing {0} ID")]
    MissingIdentifier(&'static str),

    /// The request never produced an HTTP response (connect, DNS, timeout, cancellation)
    #[error("can't perform http request: {message}")]
    Transport {
        /// What the client was doing when it failed
        message: String,
        /// Underlying cause
        #[source]
        source: BoxError,
    },

    /// The server answered with a status outside 200-299
    #[error("API error: HTTP {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body did not match the expected JSON shape
    ///
    /// Timestamps in no known layout land here too; the message carries
    /// the [`TimestampParseError`](crate::TimestampParseError) text,
    /// including the offending value.
    #[error("can't parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Query or body parameters could not be serialized
    #[error("can't encode request parameters: {0}")]
    Encode(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a transport error wrapping its cause
    pub fn transport(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Create an API error from a status code and raw body
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an encoding error
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// HTTP status code, for [`Error::Api`]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether repeating the same call could succeed
    ///
    /// Transport failures and 429/5xx answers qualify. The client itself
    /// never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Api { status, .. } => *status == 429 || (500..=599).contains(status),
            _ => false,
        }
    }
}
