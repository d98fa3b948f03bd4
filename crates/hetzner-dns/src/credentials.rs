//! API token resolution
//!
//! The client asks its [`CredentialResolver`] for a token on every request.
//! The default, [`EnvCredentials`], prefers an explicitly configured key and
//! falls back to the `HETZNER_API_KEY` environment variable.

use std::fmt;

/// Environment variable consulted when no key is configured
pub const API_KEY_ENV: &str = "HETZNER_API_KEY";

/// Strategy for obtaining the API token
///
/// Returning `None` (or an empty string) makes the request fail with
/// [`Error::MissingCredentials`](crate::Error::MissingCredentials) before
/// anything is sent.
///
/// Any `Fn() -> Option<String>` closure is a resolver:
///
/// ```rust
/// use hetzner_dns::{Client, ClientConfig};
/// use std::sync::Arc;
///
/// let client = Client::new(ClientConfig::default())
///     .unwrap()
///     .with_credentials(Arc::new(|| Some("token-from-vault".to_string())));
/// ```
pub trait CredentialResolver: Send + Sync {
    /// Resolve the token for one request
    fn resolve(&self) -> Option<String>;
}

impl<F> CredentialResolver for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn resolve(&self) -> Option<String> {
        self()
    }
}

/// Explicit key, else environment variable
pub struct EnvCredentials {
    explicit: Option<String>,
    var: String,
}

impl EnvCredentials {
    /// Resolve from `explicit` if non-empty, else from [`API_KEY_ENV`]
    pub fn new(explicit: Option<String>) -> Self {
        Self::with_var(explicit, API_KEY_ENV)
    }

    /// Same as [`EnvCredentials::new`] but reading a different variable
    pub fn with_var(explicit: Option<String>, var: impl Into<String>) -> Self {
        Self {
            explicit: explicit.filter(|key| !key.is_empty()),
            var: var.into(),
        }
    }
}

impl CredentialResolver for EnvCredentials {
    fn resolve(&self) -> Option<String> {
        if let Some(key) = &self.explicit {
            return Some(key.clone());
        }

        std::env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}

// Never print the key itself
impl fmt::Debug for EnvCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvCredentials")
            .field("explicit", &self.explicit.as_ref().map(|_| "<REDACTED>"))
            .field("var", &self.var)
            .finish()
    }
}
