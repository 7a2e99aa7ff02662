//! The ledger seam the dashboard reads from and writes to.

use crate::snapshot::EventKind;
use alloy_primitives::{Address, TxHash, U256};
use std::future::Future;

/// A raw `Cashback` or `Burned` log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerLog {
    pub kind: EventKind,
    pub tx_hash: TxHash,
    pub block_number: u64,
    /// Recipient for cashback, burner for burn
    pub subject: Address,
    pub amount: U256,
}

/// Result of a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutcome {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
}

/// Read and write access to a CET ledger.
pub trait TokenLedger: Send + Sync {
    fn chain_id(&self) -> impl Future<Output = eyre::Result<u64>> + Send;

    fn name(&self) -> impl Future<Output = eyre::Result<String>> + Send;

    fn symbol(&self) -> impl Future<Output = eyre::Result<String>> + Send;

    fn decimals(&self) -> impl Future<Output = eyre::Result<u8>> + Send;

    fn owner(&self) -> impl Future<Output = eyre::Result<Address>> + Send;

    fn total_supply(&self) -> impl Future<Output = eyre::Result<U256>> + Send;

    fn balance_of(&self, account: Address) -> impl Future<Output = eyre::Result<U256>> + Send;

    /// Latest block number.
    fn block_number(&self) -> impl Future<Output = eyre::Result<u64>> + Send;

    /// Unix timestamp of block `number`.
    fn block_timestamp(&self, number: u64) -> impl Future<Output = eyre::Result<u64>> + Send;

    /// Logs of `kind` in `[from_block, to_block]`.
    fn logs(
        &self,
        kind: EventKind,
        from_block: u64,
        to_block: u64,
    ) -> impl Future<Output = eyre::Result<Vec<LedgerLog>>> + Send;

    /// Burn `amount` from `from`'s own balance and wait for inclusion.
    fn burn(
        &self,
        from: Address,
        amount: U256,
    ) -> impl Future<Output = eyre::Result<TxOutcome>> + Send;

    /// Mint a cashback of `amount` to `to`, sent by `from`, and wait for inclusion.
    fn give_cashback(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> impl Future<Output = eyre::Result<TxOutcome>> + Send;
}
