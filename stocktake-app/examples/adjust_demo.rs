// stocktake-app/examples/adjust_demo.rs
// Load the catalog (fallback when no backend is running), stage a couple
// of adjustments, and commit them.
//
// Usage: STOCKTAKE_API_URL=http://localhost:8080 cargo run --example adjust_demo

use std::sync::Arc;
use stocktake_app::AdjustmentLedger;
use stocktake_client::{ClientConfig, HttpInventoryClient, StaticSession, UserInfo};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env();
    let api = Arc::new(HttpInventoryClient::new(&config)?);
    let session = Arc::new(StaticSession::signed_in(UserInfo {
        id: "u1".to_string(),
        email: "demo@example.com".to_string(),
    }));

    let mut ledger = AdjustmentLedger::new(api, session);
    ledger.load_catalog().await;
    if ledger.is_degraded() {
        println!("backend unreachable; using fallback catalog (writes will not persist)");
    }

    let hits: Vec<_> = ledger.search("latte").into_iter().cloned().collect();
    for product in &hits {
        println!(
            "{} [{}] stock {}",
            product.name, product.sku, product.current_stock
        );
    }

    if let Some(first) = hits.first() {
        ledger.select(first);
        ledger.adjust(&first.id, 2);
        println!("pending changes: {}", ledger.pending_change_count());
        let status = ledger.commit().await;
        println!("commit: {status:?}");
    }

    Ok(())
}
