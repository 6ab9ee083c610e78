/*
[INPUT]:  VALR_API_KEY / VALR_API_SECRET environment variables
[OUTPUT]: Account balances, recent trades and transactions
[POS]:    Examples - signed account queries
[UPDATE]: When adding new account endpoints
*/

use valr_adapter::*;

/// Example: Query account data (API key required)
///
/// Run with `VALR_API_KEY` and `VALR_API_SECRET` exported.
#[tokio::main]
async fn main() {
    println!("=== VALR Account Example ===\n");

    let client = match ValrClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Signed client created\n");

    println!("Querying balances...");
    match client.balances().await {
        Ok(balances) => {
            for balance in balances
                .iter()
                .filter(|b| b.total.as_decimal().is_ok_and(|total| !total.is_zero()))
            {
                println!("  {} available={} total={}", balance.currency, balance.available, balance.total);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying last 5 BTCZAR trades...");
    match client
        .trade_history("BTCZAR", &TradeHistoryRequest { limit: Some(5) })
        .await
    {
        Ok(trades) => println!("✓ {} trades", trades.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying recent transactions...");
    let request = TransactionHistoryRequest {
        limit: Some(10),
        ..Default::default()
    };
    match client.transaction_history(&request).await {
        Ok(transactions) => println!("✓ {} transactions", transactions.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Account example complete");
}
