//! Integration tests against a live RPC endpoint.
//!
//! These tests require `tests/test-config.toml` and `CET_CONTRACT_ADDRESS`.
//! Burn additionally needs a private key (PRIVATE_KEY or
//! tests/test-config.local.toml).
//!
//! Run with:
//! ```bash
//! cargo test --package cet-dashboard --test live -- --ignored
//! ```


use cet_dashboard::{connect, execute, Action};
use setup::{load_private_key, load_test_config};

#[tokio::test]
#[ignore]
async fn test_live_show() {
    let config = load_test_config();
    let contract = config
        .contract_address
        .expect("Set CET_CONTRACT_ADDRESS for live tests");

    println!("RPC: {}", config.rpc_url);
    println!("Contract: {}", contract);

    let connected = connect(&config, contract, None)
        .await
        .expect("Failed to connect");
    let snapshot = connected
        .dashboard
        .session()
        .snapshot()
        .expect("No snapshot");

    println!("✓ {} ({})", snapshot.token.name, snapshot.token.symbol);
    println!("  Total supply: {}", snapshot.token.total_supply);
    println!("  Cashbacks: {}", snapshot.cashback_history.len());
    println!("  Burns: {}", snapshot.burn_history.len());

    assert_eq!(snapshot.chain_id, connected.chain_id);
    assert!(snapshot.cashback_history.len() <= config.dashboard.history_limit);
    assert!(snapshot.burn_history.len() <= config.dashboard.history_limit);
}

#[tokio::test]
#[ignore]
async fn test_live_burn_smallest_unit() {
    let config = load_test_config();
    let contract = config
        .contract_address
        .expect("Set CET_CONTRACT_ADDRESS for live tests");
    let private_key = load_private_key().expect("Private key required");

    let mut connected = connect(&config, contract, Some(&private_key))
        .await
        .expect("Failed to connect");
    let before = connected
        .dashboard
        .session()
        .snapshot()
        .expect("No snapshot")
        .token
        .raw_user_balance;

    let outcome = execute(
        &mut connected.dashboard,
        Action::Burn {
            amount: "0.000000000000000001".to_string(),
        },
    )
    .await
    .expect("Burn failed")
    .expect("Nothing submitted");

    println!("✓ Burn tx: {}", outcome.tx_hash);

    let after = connected
        .dashboard
        .session()
        .snapshot()
        .expect("No snapshot")
        .token
        .raw_user_balance;
    assert_eq!(after + alloy_primitives::U256::from(1), before);
}
