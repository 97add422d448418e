use serde::Deserialize;
use thiserror::Error;

use crate::core::wire::null_as_default;

/// The primary error type for all fallible operations in this crate.
///
/// Every variant is produced at exactly one stage of a request, so callers can
/// tell a configuration problem from a transport failure from a rejection by
/// the API itself.
#[derive(Debug, Error)]
pub enum MsError {
    /// No API key was configured. Raised before any network call is made.
    #[error(
        "API key is required: pass it to the client builder or load it with `from_env` (MARKETSTACK_API_KEY)"
    )]
    MissingApiKey,

    /// The base URL and endpoint path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The query-parameter object could not be turned into query pairs.
    #[error("Failed to encode query parameters: {0}")]
    Encode(String),

    /// The request could not be sent or no response arrived (DNS, connect, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response arrived but its body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(reqwest::Error),

    /// The API answered with a recognized `{"error": {...}}` envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The API answered with a non-200 status and a body that is not an error envelope.
    #[error("API request failed with status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// A 200 response whose body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Json(serde_json::Error),
}

impl MsError {
    /// Returns the structured API error, if the server sent one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// The API error code (e.g. `invalid_access_key`), if the server sent one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.api_error().map(|e| e.code.as_str())
    }
}

/// An error reported by the marketstack API in its `{"error": {...}}` envelope.
///
/// `code` is the stable discriminator; `message` is meant for humans. Either
/// may be missing or `null` on the wire and then decodes as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Error)]
#[error("marketstack API error [{code}]: {message}{}", symbol_suffix(.context))]
pub struct ApiError {
    /// Machine-readable code, e.g. `invalid_access_key` or `no_valid_symbols_provided`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Human-readable description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Extra detail for symbol-specific errors.
    #[serde(default)]
    pub context: Option<ApiErrorContext>,
}

impl ApiError {
    /// The symbol the error refers to, when it is symbol-specific.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.context.as_ref()?.symbol.as_deref()
    }
}

fn symbol_suffix(context: &Option<ApiErrorContext>) -> String {
    match context.as_ref().and_then(|c| c.symbol.as_deref()) {
        Some(symbol) if !symbol.is_empty() => format!(" (symbol: {symbol})"),
        _ => String::new(),
    }
}

/// The `context` object of an API error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorContext {
    /// The offending symbol, if any.
    #[serde(default)]
    pub symbol: Option<String>,
}
