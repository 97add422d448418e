//! Centralized constants for the default endpoint, UA and environment lookup.

/// marketstack v1 API base (endpoint paths are appended verbatim).
pub(crate) const DEFAULT_BASE_URL: &str = "http://api.marketstack.com/v1";

/// Environment variable read by the `from_env` constructors.
pub const API_KEY_ENV: &str = "MARKETSTACK_API_KEY";

/// Default User-Agent sent with every request.
pub(crate) const USER_AGENT: &str = concat!("marketstack-rs/", env!("CARGO_PKG_VERSION"));
