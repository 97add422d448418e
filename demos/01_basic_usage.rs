use chrono::{Duration, Utc};
use marketstack_rs::{EodOptions, MsClient, MsError, Sort};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    marketstack_rs::init_tracing();

    // 1. Load the key once at startup and build a client with a 10-second timeout.
    let client = MsClient::builder()
        .api_key(std::env::var(marketstack_rs::API_KEY_ENV).unwrap_or_default())
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    // 2. End-of-day prices for the last month.
    let today = Utc::now().date_naive();
    let opts = EodOptions::new()
        .symbols(["AAPL", "GOOG"])
        .date_range(today - Duration::days(30), today)
        .sort(Sort::Desc)
        .limit(5);
    let page = client.eod(&opts).await?;
    println!("--- Recent closes ({} of {}) ---", page.len(), page.pagination.total);
    for bar in &page {
        println!(
            "  {} on {}: {:.2} (volume {:.0})",
            bar.symbol,
            bar.timestamp().map(|t| t.date_naive().to_string()).unwrap_or_default(),
            bar.close.unwrap_or_default(),
            bar.volume.unwrap_or_default()
        );
    }
    println!();

    // 3. Ticker metadata.
    let ticker = client.ticker("TSLA").await?;
    println!("--- {} ({}) ---", ticker.name, ticker.symbol);
    if let Some(exchange) = &ticker.stock_exchange {
        println!("Exchange: {} ({})", exchange.name, exchange.mic);
    }
    println!();

    // 4. API errors carry a code to branch on.
    match client.eod(&EodOptions::new().symbols(["NOT-A-SYMBOL"])).await {
        Err(MsError::Api(e)) => println!("API refused the query: {} / {}", e.code, e.message),
        Err(other) => return Err(other.into()),
        Ok(page) => println!("Unexpectedly got {} bars", page.len()),
    }

    Ok(())
}
