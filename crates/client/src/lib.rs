//! Chain access for the CET dashboard: RPC provider, wallets and signing,
//! and wallet change notifications.

mod events;
mod remote_signer;
mod signer;
pub mod wallet;
mod watch;

use alloy_primitives::Address;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use thiserror::Error;

pub use events::{Subscription, WalletEvent, WalletEvents};
pub use remote_signer::{ProxyError, RemoteSigner};
pub use signer::{fill_transaction, with_gas_margin, SignerFn, SigningKey, GAS_MARGIN_PERCENT};
pub use wallet::{discover, Wallet, WalletKind, DEFAULT_PREFERENCE};
pub use watch::WalletWatcher;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid RPC URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Wallet unreachable: {0}")]
    WalletUnreachable(#[from] ProxyError),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("No wallet detected. Configure a signer proxy or a private key.")]
    NoWallet,

    #[error("No accounts returned from wallet.")]
    NoAccounts,

    #[error("Wallet {0} is read-only and cannot sign transactions")]
    ReadOnly(Address),
}

/// HTTP provider for `rpc_url`.
pub async fn create_provider(rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url.parse().map_err(|e| ClientError::InvalidUrl {
        url: rpc_url.to_string(),
        reason: format!("{e}"),
    })?;

    Ok(ProviderBuilder::new().connect_http(url))
}

/// Parse a hex private key, with or without `0x` prefix.
pub fn parse_private_key(private_key: &str) -> Result<PrivateKeySigner, ClientError> {
    private_key
        .trim()
        .parse()
        .map_err(|e| ClientError::InvalidPrivateKey(format!("{e}")))
}
