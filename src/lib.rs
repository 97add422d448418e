//! marketstack-rs: typed async client for the marketstack market-data REST API.
//!
//! Every accessor performs exactly one authenticated `GET`, decodes the JSON
//! body into a typed record (or a [`Paginated`] page of them), and maps API
//! error envelopes to [`MsError::Api`].
//!
//! ```no_run
//! use marketstack_rs::{EodOptions, MsClient, MsError, Sort};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), MsError> {
//! let client = MsClient::builder().api_key("YOUR_KEY").build()?;
//!
//! let page = client
//!     .eod(&EodOptions::new().symbols(["AAPL", "MSFT"]).sort(Sort::Desc).limit(10))
//!     .await?;
//! for bar in &page {
//!     println!("{} {} close={:?}", bar.symbol, bar.date, bar.close);
//! }
//!
//! match client.ticker("NOPE").await {
//!     Err(MsError::Api(e)) => eprintln!("rejected: {} ({})", e.code, e.message),
//!     other => println!("{other:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Enable the `tracing` feature to get a span per accessor and a `debug`
//! event per response.

pub mod core;
pub mod currencies;
pub mod eod;
pub mod exchanges;
pub mod intraday;
pub mod tickers;
pub mod timezones;

pub use crate::core::{
    API_KEY_ENV, ApiError, ApiErrorContext, MsClient, MsClientBuilder, MsError, PageOptions,
    Pagination, Paginated, Sort,
};
pub use currencies::Currency;
pub use eod::{EodBar, EodOptions};
pub use exchanges::{Exchange, ExchangesOptions};
pub use intraday::{Interval, IntradayBar, IntradayOptions};
pub use tickers::{Ticker, TickersOptions};
pub use timezones::Timezone;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`. Intended for demos and tests.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
