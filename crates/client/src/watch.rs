//! Polling watcher that turns wallet/provider state into [`WalletEvent`]s.

use crate::{Wallet, WalletEvent, WalletEvents};
use alloy_primitives::Address;
use alloy_provider::Provider;
use std::time::Duration;
use tokio::time;
use tracing::{debug, warn};

/// Remembers the last observed accounts and chain id.
#[derive(Debug, Default)]
pub struct WalletWatcher {
    accounts: Option<Vec<Address>>,
    chain_id: Option<u64>,
}

impl WalletWatcher {
    /// Start from a known state so the first poll does not report it as a change.
    pub const fn new(accounts: Vec<Address>, chain_id: u64) -> Self {
        Self {
            accounts: Some(accounts),
            chain_id: Some(chain_id),
        }
    }

    /// Record an observation and return the events it implies.
    pub fn observe(&mut self, accounts: Vec<Address>, chain_id: u64) -> Vec<WalletEvent> {
        let mut events = Vec::new();

        if self.chain_id.is_some_and(|prev| prev != chain_id) {
            events.push(WalletEvent::ChainChanged(chain_id));
        }
        self.chain_id = Some(chain_id);

        if self.accounts.as_ref().is_some_and(|prev| *prev != accounts) {
            events.push(WalletEvent::AccountsChanged(accounts.clone()));
        }
        self.accounts = Some(accounts);

        events
    }

    /// Poll once and publish any changes.
    pub async fn poll<P>(
        &mut self,
        wallet: &Wallet,
        provider: &P,
        hub: &WalletEvents,
    ) -> eyre::Result<()>
    where
        P: Provider,
    {
        let accounts = wallet.accounts().await?;
        let chain_id = provider.get_chain_id().await?;

        for event in self.observe(accounts, chain_id) {
            debug!(?event, "Wallet state changed");
            hub.publish(event);
        }
        Ok(())
    }

    /// Poll forever at `interval`. Poll failures are logged and skipped.
    pub async fn run<P>(mut self, wallet: Wallet, provider: P, hub: WalletEvents, interval: Duration)
    where
        P: Provider,
    {
        let mut ticker = time::interval(interval);
        loop {
            ticker.tick().await;
            if let Err(e) = self.poll(&wallet, &provider, &hub).await {
                warn!(error = %e, "Wallet poll failed");
            }
        }
    }
}
