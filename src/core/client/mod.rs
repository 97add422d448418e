//! Public client surface + builder.
//! Defaults (base URL, UA, env var name) live in `constants`.

mod constants;

pub use constants::API_KEY_ENV;

use crate::core::MsError;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

/// A configured marketstack client: API key, base URL and a pooled HTTP transport.
///
/// Cloning is cheap and clones share the connection pool, so one client can be
/// handed to many tasks. Nothing about the client changes while a request runs.
///
/// # Example
///
/// ```no_run
/// # use marketstack_rs::{EodOptions, MsClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MsClient::from_env();
/// let bars = client.eod(&EodOptions::new().symbols(["AAPL"]).limit(5)).await?;
/// for bar in &bars {
///     println!("{} {} {:?}", bar.symbol, bar.date, bar.close);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MsClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl fmt::Debug for MsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MsClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl MsClient {
    /// Create a new builder.
    pub fn builder() -> MsClientBuilder {
        MsClientBuilder::default()
    }

    /// Creates a client with the given API key, the default base URL and a default transport.
    ///
    /// An empty key is treated as missing: every request then fails with
    /// [`MsError::MissingApiKey`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_parts(Client::new(), normalize_key(api_key.into()))
    }

    /// Creates a client whose API key is read once from `MARKETSTACK_API_KEY`.
    ///
    /// Call this at startup; the variable is not consulted again afterwards.
    pub fn from_env() -> Self {
        Self::with_parts(Client::new(), key_from_env())
    }

    fn with_parts(http: Client, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Replaces the base URL. A trailing `/` is removed so endpoint paths join cleanly.
    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = trim_base(base_url);
    }

    /// The base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `true` if an API key is configured.
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /* -------- internal getters used by the pipeline -------- */

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

fn normalize_key(key: String) -> Option<String> {
    if key.trim().is_empty() { None } else { Some(key) }
}

fn key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok().and_then(normalize_key)
}

fn trim_base(base_url: &str) -> String {
    base_url.strip_suffix('/').unwrap_or(base_url).to_string()
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`MsClient`].
#[derive(Default)]
pub struct MsClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    http: Option<Client>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl MsClientBuilder {
    /// Starts a builder whose API key is read once from `MARKETSTACK_API_KEY`.
    ///
    /// A later call to [`api_key`](Self::api_key) takes precedence.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: key_from_env(),
            ..Self::default()
        }
    }

    /// Sets the API key sent as `access_key` on every request.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        if let Some(key) = normalize_key(key.into()) {
            self.api_key = Some(key);
        }
        self
    }

    /// Override the base URL (default `http://api.marketstack.com/v1`). A trailing `/` is removed.
    #[must_use]
    pub fn base_url(mut self, url: impl AsRef<str>) -> Self {
        self.base_url = Some(trim_base(url.as_ref()));
        self
    }

    /// Use a preconfigured transport (proxy, custom TLS, ...).
    ///
    /// When set, [`user_agent`](Self::user_agent), [`timeout`](Self::timeout) and
    /// [`connect_timeout`](Self::connect_timeout) are ignored.
    #[must_use]
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// A missing API key is not an error here; it surfaces as
    /// [`MsError::MissingApiKey`] on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`MsError::Http`] if the HTTP transport cannot be constructed.
    pub fn build(self) -> Result<MsClient, MsError> {
        let http = match self.http {
            Some(http) => http,
            None => {
                let mut httpb = Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };

        Ok(MsClient {
            http,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: self.api_key,
        })
    }
}
