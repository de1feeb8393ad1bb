/*
[INPUT]:  POINTSHUB_API_KEY and STEAM_LINK environment variables
[OUTPUT]: Balance check and a placed buy order
[POS]:    Examples - authenticated purchase flow
[UPDATE]: When the buy flow changes
*/

use pointshub_adapter::{MIN_POINTS, PointsHubClient, is_valid_steam_link};

/// Example: Check balance and buy points (requires an API key)
///
/// Authenticated endpoints require the API key from your PointsHub profile.
/// Buy orders are NOT idempotent: do not re-run this blindly on failure.
#[tokio::main]
async fn main() {
    println!("=== PointsHub Buy Example ===\n");

    let api_key = match std::env::var("POINTSHUB_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Set POINTSHUB_API_KEY to run this example");
            return;
        }
    };
    let steam_link = std::env::var("STEAM_LINK")
        .unwrap_or_else(|_| "https://steamcommunity.com/id/example".to_string());

    if !is_valid_steam_link(&steam_link) {
        eprintln!("STEAM_LINK must be an https:// profile URL or a Steam64ID");
        return;
    }

    let mut client = match PointsHubClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    client.set_api_key(api_key);

    if let Err(e) = client.open() {
        eprintln!("Failed to open session: {}", e);
        return;
    }
    println!("✓ HTTP session opened");

    println!("\nChecking account balance...");
    match client.get_balance().await {
        Ok(balance) => println!("✓ Balance: {} {}", balance.balance, balance.currency),
        Err(e) => {
            println!("✗ Error: {}", e);
            client.close();
            return;
        }
    }

    println!("\nBuying {} points for {}...", MIN_POINTS, steam_link);
    match client.buy(MIN_POINTS, &steam_link).await {
        Ok(order) => println!("✓ Order {} placed, status: {:?}", order.id, order.status),
        Err(e) => println!("✗ Error: {}", e),
    }

    client.close();
    println!("\n✓ Buy example complete");
}
