use marketstack_rs::{ExchangesOptions, MsClient, PageOptions, TickersOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = MsClient::from_env();

    println!("--- Exchanges matching \"nasdaq\" ---");
    let exchanges = client
        .exchanges(&ExchangesOptions::new().search("nasdaq").limit(5))
        .await?;
    for ex in &exchanges {
        let tz = ex.timezone.as_ref().map(|t| t.timezone.as_str()).unwrap_or("?");
        println!("  {:<6} {} [{}]", ex.mic, ex.name, tz);
    }
    println!();

    println!("--- XNAS ---");
    let xnas = client.exchange("XNAS").await?;
    println!("{} in {}, {}", xnas.name, xnas.city, xnas.country);
    if let Some(tz) = xnas.timezone.as_ref().and_then(|t| t.tz()) {
        println!("Local time there: {}", chrono::Utc::now().with_timezone(&tz));
    }
    println!();

    println!("--- Tickers on XNAS matching \"micro\" ---");
    let tickers = client
        .tickers(&TickersOptions::new().search("micro").exchange("XNAS").limit(5))
        .await?;
    for t in &tickers {
        println!("  {:<6} {} (eod: {}, intraday: {})", t.symbol, t.name, t.has_eod, t.has_intraday);
    }
    println!();

    // Paging is manual: bump the offset while `has_more` says so.
    println!("--- All currencies ---");
    let mut offset = 0;
    loop {
        let page = client
            .currencies(&PageOptions::new().limit(100).offset(offset))
            .await?;
        for c in &page {
            println!("  {} {} {}", c.code, c.symbol, c.name);
        }
        if !page.has_more() || page.is_empty() {
            break;
        }
        offset += u32::try_from(page.len())?;
    }

    let zones = client.timezones(&PageOptions::new().limit(3)).await?;
    println!("\n{} timezones known, first few:", zones.pagination.total);
    for z in zones {
        println!("  {} ({} / {})", z.timezone, z.abbr, z.abbr_dst);
    }

    Ok(())
}
