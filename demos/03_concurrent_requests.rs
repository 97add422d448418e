use futures::future::try_join_all;
use marketstack_rs::{EodOptions, Interval, IntradayOptions, MsClient, MsError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One client, cloned per task; clones share the connection pool.
    let client = MsClient::from_env();
    let symbols = ["AAPL", "MSFT", "NVDA"];

    println!("--- Latest end-of-day bar per symbol, fetched concurrently ---");
    let tasks: Vec<_> = symbols
        .iter()
        .map(|&s| {
            let client = client.clone();
            async move {
                let page = client.eod_latest(&EodOptions::new().symbols([s])).await?;
                Ok::<_, MsError>((s, page.data.into_iter().next()))
            }
        })
        .collect();
    for (symbol, bar) in try_join_all(tasks).await? {
        match bar {
            Some(bar) => println!("  {symbol}: {:.2} on {}", bar.close.unwrap_or_default(), bar.date),
            None => println!("  {symbol}: no data"),
        }
    }
    println!();

    println!("--- Hourly intraday bars (needs an intraday-capable plan) ---");
    let intraday_opts = IntradayOptions::new()
        .symbols(symbols)
        .interval(Interval::I1hour)
        .limit(6);
    let intraday = client.intraday(&intraday_opts);
    // Deadlines are the caller's: wrap the call and drop it when time is up.
    match tokio::time::timeout(std::time::Duration::from_secs(5), intraday).await {
        Ok(Ok(page)) => {
            for bar in &page {
                println!("  {} {} last={:?}", bar.symbol, bar.date, bar.last);
            }
        }
        Ok(Err(e)) => println!("  intraday unavailable: {e}"),
        Err(_) => println!("  intraday request timed out"),
    }

    Ok(())
}
