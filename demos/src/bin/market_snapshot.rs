//! Demo: Market Snapshot
//!
//! Prints ticker, top of book, recent trades and fee for a pair using only
//! public endpoints.
//!
//! Run: cargo run --bin market_snapshot -- [pair]

use btce_rest::BtceClient;
use btce_types::{BookSide, Pair};
use colored::*;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let pair: Pair = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => Pair::BTC_USD.into(),
    };
    let client = BtceClient::new()?;

    println!("{}", "═".repeat(50).cyan());
    println!("{}", format!("  {} SNAPSHOT", pair.as_str().to_uppercase()).cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    let ticker = client.get_ticker(pair.as_str()).await?;
    println!(
        "  {} {}  {} {}  {} {}",
        "LAST:".yellow(),
        ticker.last,
        "HIGH:".yellow(),
        ticker.high,
        "LOW:".yellow(),
        ticker.low
    );
    println!(
        "  {} {}  {} {}",
        "VOL:".dimmed(),
        ticker.vol_cur,
        "MID:".dimmed(),
        ticker.mid_price()
    );

    let depth = client.get_depth(pair.as_str()).await?;
    println!();
    for level in depth.asks.iter().filter(|l| !l.is_zero()).take(5).collect::<Vec<_>>().into_iter().rev() {
        println!(
            "  {:>14} {:>14} {}",
            level.price.to_string().red(),
            level.amount,
            level.notional().round_dp(2).to_string().dimmed()
        );
    }
    match depth.spread() {
        Some(spread) => println!("  {} {}", "── spread".dimmed(), spread),
        None => warn!(%pair, "Orderbook has an empty side"),
    }
    for level in depth.bids.iter().filter(|l| !l.is_zero()).take(5) {
        println!(
            "  {:>14} {:>14} {}",
            level.price.to_string().green(),
            level.amount,
            level.notional().round_dp(2).to_string().dimmed()
        );
    }

    println!();
    for trade in client.get_trades(pair.as_str()).await?.iter().take(10) {
        let side = match trade.trade_type {
            BookSide::Bid => "BUY ".green(),
            BookSide::Ask => "SELL".red(),
        };
        println!("  {} {} @ {} (#{})", side, trade.amount, trade.price, trade.tid);
    }

    let fee = client.get_fee(pair.as_str()).await?;
    println!();
    println!("  {} {}%", "Fee:".dimmed(), fee.trade);

    Ok(())
}
