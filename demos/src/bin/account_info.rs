//! Demo: Account Info
//!
//! Loads credentials from BTCE_API_KEY / BTCE_API_SECRET and prints balances,
//! key rights and open orders.
//!
//! Run: cargo run --bin account_info

use btce_rest::{BtceClient, Credentials};
use colored::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = BtceClient::with_credentials(Credentials::from_env()?)?;
    let account = client.get_info().await?;
    info!(?account, "Fetched account info");

    println!("{}", "═".repeat(50).cyan());
    println!("{}", "  ACCOUNT".cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    for (currency, amount) in account.funds.non_zero() {
        println!("  {:>6}  {}", currency.to_uppercase().yellow(), amount);
    }
    println!();
    println!(
        "  {} info={} trade={} withdraw={}",
        "Rights:".dimmed(),
        account.rights.info,
        account.rights.trade,
        account.rights.withdraw
    );
    println!("  {} {}", "Transactions:".dimmed(), account.transaction_count);
    println!("  {} {}", "Open orders:".dimmed(), account.open_orders);
    if let Some(time) = account.server_time_utc() {
        println!("  {} {}", "Server time:".dimmed(), time);
    }

    if account.open_orders > 0 {
        println!();
        for order in client.active_orders(None).await? {
            println!(
                "  #{} {} {} {} @ {}",
                order.id,
                order.pair,
                order.trade_type,
                order.amount,
                order.rate
            );
        }
    }

    Ok(())
}
