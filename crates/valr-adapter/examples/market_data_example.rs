/*
[INPUT]:  Currency pair identifier (e.g., "BTCZAR")
[OUTPUT]: Market data (summary, order book, order types, status)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use valr_adapter::*;

/// Example: Query market data (no authentication required)
///
/// Public endpoints are never signed, so no API key is needed.
#[tokio::main]
async fn main() {
    println!("=== VALR Market Data Example ===\n");

    let client = match ValrClient::public() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    let pair = "BTCZAR";

    println!("Querying exchange status...");
    match client.status().await {
        Ok(status) => println!("✓ Status: {:?}", status),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying market summary for {}...", pair);
    match client.market_summary_for_pair(pair).await {
        Ok(summary) => println!(
            "✓ Last traded {} (bid {}, ask {})",
            summary.last_traded_price, summary.bid_price, summary.ask_price
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for {}...", pair);
    match client.order_book(pair).await {
        Ok(book) => println!("✓ {} asks, {} bids", book.asks.len(), book.bids.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order types...");
    match client.order_types().await {
        Ok(matrix) => println!(
            "✓ {} pairs, {} supports simple orders: {}",
            matrix.len(),
            pair,
            matrix.supports(pair, OrderType::Simple)
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
