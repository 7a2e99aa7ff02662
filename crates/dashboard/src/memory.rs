//! [`TokenLedger`] backed by the in-memory reference ledger.

use crate::{EventKind, LedgerLog, TokenLedger, TxOutcome};
use alloy_primitives::{Address, U256};
use eyre::eyre;
use ledger::{CetLedger, LedgerEvent};
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared handle to a [`CetLedger`].
///
/// Clones share the same ledger, so a test can hold one handle to mutate
/// state while the dashboard reads through another.
#[derive(Debug, Clone)]
pub struct MemoryLedger {
    inner: Arc<Mutex<CetLedger>>,
    chain_id: u64,
}

impl MemoryLedger {
    pub fn new(ledger: CetLedger, chain_id: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
            chain_id,
        }
    }

    /// Run `f` with exclusive access to the ledger.
    pub fn with<R>(&self, f: impl FnOnce(&mut CetLedger) -> R) -> eyre::Result<R> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    fn lock(&self) -> eyre::Result<MutexGuard<'_, CetLedger>> {
        self.inner
            .lock()
            .map_err(|_| eyre!("in-memory ledger lock poisoned"))
    }
}

impl TokenLedger for MemoryLedger {
    async fn chain_id(&self) -> eyre::Result<u64> {
        Ok(self.chain_id)
    }

    async fn name(&self) -> eyre::Result<String> {
        Ok(self.lock()?.name().to_string())
    }

    async fn symbol(&self) -> eyre::Result<String> {
        Ok(self.lock()?.symbol().to_string())
    }

    async fn decimals(&self) -> eyre::Result<u8> {
        Ok(self.lock()?.decimals())
    }

    async fn owner(&self) -> eyre::Result<Address> {
        Ok(self.lock()?.owner())
    }

    async fn total_supply(&self) -> eyre::Result<U256> {
        Ok(self.lock()?.total_supply())
    }

    async fn balance_of(&self, account: Address) -> eyre::Result<U256> {
        Ok(self.lock()?.balance_of(account))
    }

    async fn block_number(&self) -> eyre::Result<u64> {
        Ok(self.lock()?.block_number())
    }

    async fn block_timestamp(&self, number: u64) -> eyre::Result<u64> {
        self.lock()?
            .block_timestamp(number)
            .ok_or_else(|| eyre!("Block not found: {}", number))
    }

    async fn logs(
        &self,
        kind: EventKind,
        from_block: u64,
        to_block: u64,
    ) -> eyre::Result<Vec<LedgerLog>> {
        let ledger = self.lock()?;
        let logs = ledger
            .logs(from_block, to_block)
            .filter_map(|entry| {
                let (subject, amount) = match (&entry.event, kind) {
                    (LedgerEvent::Cashback { user, amount }, EventKind::Cashback) => {
                        (*user, *amount)
                    }
                    (LedgerEvent::Burned { from, amount }, EventKind::Burn) => (*from, *amount),
                    _ => return None,
                };
                Some(LedgerLog {
                    kind,
                    tx_hash: entry.tx_hash,
                    block_number: entry.block_number,
                    subject,
                    amount,
                })
            })
            .collect();
        Ok(logs)
    }

    async fn burn(&self, from: Address, amount: U256) -> eyre::Result<TxOutcome> {
        let receipt = self.lock()?.burn(from, amount)?;
        Ok(TxOutcome {
            tx_hash: receipt.tx_hash,
            block_number: Some(receipt.block_number),
        })
    }

    async fn give_cashback(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> eyre::Result<TxOutcome> {
        let receipt = self.lock()?.give_cashback(from, to, amount)?;
        Ok(TxOutcome {
            tx_hash: receipt.tx_hash,
            block_number: Some(receipt.block_number),
        })
    }
}
