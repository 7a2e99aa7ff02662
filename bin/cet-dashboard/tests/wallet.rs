//! Wallet candidate selection from configuration.

use alloy_primitives::{address, Address};
use cet_dashboard::{config::Config, wallet_candidates};
use client::{discover, WalletKind, DEFAULT_PREFERENCE};

// anvil account #1
fn test_key() -> (String, Address) {
    (
        "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d".to_string(),
        address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
    )
}

#[test]
fn test_signer_proxy_preferred() {
    let (key, _) = test_key();
    let config = Config {
        signer_proxy_url: Some("http://localhost:9060".to_string()),
        account: Some(Address::repeat_byte(1)),
        ..Default::default()
    };

    let candidates = wallet_candidates(&config, Some(&key), 80002).unwrap();
    assert_eq!(candidates.len(), 3);

    let wallet = discover(candidates, &DEFAULT_PREFERENCE).unwrap();
    assert_eq!(wallet.kind(), WalletKind::SignerProxy);
    assert_eq!(wallet.address(), Address::repeat_byte(1));
}

#[test]
fn test_local_key_without_proxy() {
    let (key, address) = test_key();
    let candidates = wallet_candidates(&Config::default(), Some(&key), 80002).unwrap();

    let wallet = discover(candidates, &DEFAULT_PREFERENCE).unwrap();
    assert_eq!(wallet.kind(), WalletKind::LocalKey);
    assert_eq!(wallet.address(), address);
}

#[test]
fn test_proxy_without_account_is_skipped() {
    let config = Config {
        signer_proxy_url: Some("http://localhost:9060".to_string()),
        ..Default::default()
    };
    let candidates = wallet_candidates(&config, None, 80002).unwrap();
    assert!(candidates.is_empty());
    assert!(discover(candidates, &DEFAULT_PREFERENCE).is_err());
}

#[test]
fn test_watch_only_account() {
    let config = Config {
        account: Some(Address::repeat_byte(7)),
        ..Default::default()
    };
    let candidates = wallet_candidates(&config, Some("  "), 80002).unwrap();

    let wallet = discover(candidates, &DEFAULT_PREFERENCE).unwrap();
    assert_eq!(wallet.kind(), WalletKind::ReadOnly);
    assert!(!wallet.can_sign());
}

#[test]
fn test_bad_private_key() {
    assert!(wallet_candidates(&Config::default(), Some("0x1234"), 80002).is_err());
}
