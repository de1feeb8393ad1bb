/*
[INPUT]:  None (public endpoint)
[OUTPUT]: Current Steam Points price
[POS]:    Examples - anonymous price lookup
[UPDATE]: When public endpoints change
*/

use pointshub_adapter::PointsHubClient;

/// Example: Query the current price (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== PointsHub Price Example ===\n");

    let mut client = match PointsHubClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    if let Err(e) = client.open() {
        eprintln!("Failed to open session: {}", e);
        return;
    }
    println!("✓ HTTP session opened (no auth required for price lookup)\n");

    println!("Querying price per point...");
    match client.get_price().await {
        Ok(price) => println!("✓ Price: {} {} per point", price.price, price.currency),
        Err(e) => println!("✗ Error: {}", e),
    }

    client.close();
    println!("\n✓ Price example complete");
}
