//! Wallet discovery.
//!
//! The dashboard talks to exactly one wallet per session. Candidates are
//! built from configuration and [`discover`] picks one using an ordered
//! preference list. The choice is made once at startup.

use crate::{ClientError, RemoteSigner, SignerFn, SigningKey};
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_signer_local::PrivateKeySigner;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// The kinds of wallet the dashboard knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalletKind {
    /// Signing delegated to a signer-proxy service
    SignerProxy,
    /// Signing with a local private key
    LocalKey,
    /// Watch-only account, can read but never sign
    ReadOnly,
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SignerProxy => "signer-proxy",
            Self::LocalKey => "local-key",
            Self::ReadOnly => "read-only",
        };
        f.write_str(name)
    }
}

/// Default discovery order: signer proxy, then local key, then whatever is first.
pub const DEFAULT_PREFERENCE: [WalletKind; 2] = [WalletKind::SignerProxy, WalletKind::LocalKey];

/// A wallet capability.
#[derive(Debug, Clone)]
pub enum Wallet {
    SignerProxy(RemoteSigner),
    LocalKey(PrivateKeySigner),
    ReadOnly(Address),
}

impl Wallet {
    pub const fn kind(&self) -> WalletKind {
        match self {
            Self::SignerProxy(_) => WalletKind::SignerProxy,
            Self::LocalKey(_) => WalletKind::LocalKey,
            Self::ReadOnly(_) => WalletKind::ReadOnly,
        }
    }

    /// The account this wallet was configured with.
    pub fn address(&self) -> Address {
        match self {
            Self::SignerProxy(remote) => remote.address(),
            Self::LocalKey(signer) => signer.address(),
            Self::ReadOnly(address) => *address,
        }
    }

    pub const fn can_sign(&self) -> bool {
        !matches!(self, Self::ReadOnly(_))
    }

    /// Accounts currently exposed by the wallet. May be empty.
    pub async fn accounts(&self) -> Result<Vec<Address>, ClientError> {
        match self {
            Self::SignerProxy(remote) => Ok(remote.accounts().await?),
            Self::LocalKey(signer) => Ok(vec![signer.address()]),
            Self::ReadOnly(address) => Ok(vec![*address]),
        }
    }

    /// Ask the wallet for accounts, failing when it exposes none.
    pub async fn request_accounts(&self) -> Result<Vec<Address>, ClientError> {
        let accounts = self.accounts().await?;
        if accounts.is_empty() {
            return Err(ClientError::NoAccounts);
        }
        info!(kind = %self.kind(), account = %accounts[0], "Wallet connected");
        Ok(accounts)
    }

    /// Build a signing function bound to `provider`.
    pub fn signer_fn<P>(&self, provider: P, chain_id: u64) -> Result<SignerFn, ClientError>
    where
        P: Provider + Clone + 'static,
    {
        let key = match self {
            Self::SignerProxy(remote) => SigningKey::Proxy(remote.clone()),
            Self::LocalKey(signer) => SigningKey::Local(signer.clone()),
            Self::ReadOnly(address) => return Err(ClientError::ReadOnly(*address)),
        };
        Ok(key.bind(provider, chain_id))
    }
}

/// Pick a wallet from `candidates`.
///
/// Each kind in `preference` is tried in order. If none matches, the first
/// candidate wins. An empty candidate list yields [`ClientError::NoWallet`].
pub fn discover(candidates: Vec<Wallet>, preference: &[WalletKind]) -> Result<Wallet, ClientError> {
    let index = preference
        .iter()
        .find_map(|kind| candidates.iter().position(|w| w.kind() == *kind))
        .unwrap_or(0);

    let wallet = candidates
        .into_iter()
        .nth(index)
        .ok_or(ClientError::NoWallet)?;

    debug!(kind = %wallet.kind(), address = %wallet.address(), "Wallet discovered");
    Ok(wallet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proxy() -> Wallet {
        Wallet::SignerProxy(RemoteSigner::new(
            "http://localhost:9060",
            Address::repeat_byte(1),
            80002,
        ))
    }

    fn local() -> Wallet {
        // anvil account #1
        Wallet::LocalKey(
            crate::parse_private_key(
                "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
            )
            .unwrap(),
        )
    }

    fn read_only() -> Wallet {
        Wallet::ReadOnly(Address::repeat_byte(3))
    }

    #[test]
    fn test_prefers_first_preference() {
        let wallet = discover(vec![read_only(), local(), proxy()], &DEFAULT_PREFERENCE).unwrap();
        assert_eq!(wallet.kind(), WalletKind::SignerProxy);
    }

    #[test]
    fn test_falls_back_to_second_preference() {
        let wallet = discover(vec![read_only(), local()], &DEFAULT_PREFERENCE).unwrap();
        assert_eq!(wallet.kind(), WalletKind::LocalKey);
    }

    #[test]
    fn test_falls_back_to_first_candidate() {
        let wallet = discover(vec![read_only()], &DEFAULT_PREFERENCE).unwrap();
        assert_eq!(wallet.kind(), WalletKind::ReadOnly);
        assert_eq!(wallet.address(), Address::repeat_byte(3));
    }

    #[test]
    fn test_custom_preference_order() {
        let wallet = discover(
            vec![proxy(), local()],
            &[WalletKind::LocalKey, WalletKind::SignerProxy],
        )
        .unwrap();
        assert_eq!(wallet.kind(), WalletKind::LocalKey);
    }

    #[test]
    fn test_no_candidates() {
        let err = discover(vec![], &DEFAULT_PREFERENCE).unwrap_err();
        assert!(matches!(err, ClientError::NoWallet));
    }

    #[tokio::test]
    async fn test_local_accounts() {
        let wallet = local();
        let address = wallet.address();

        assert_eq!(wallet.request_accounts().await.unwrap(), vec![address]);
        assert!(wallet.can_sign());
    }

    #[test]
    fn test_read_only_cannot_sign() {
        let wallet = read_only();
        assert!(!wallet.can_sign());
    }
}
