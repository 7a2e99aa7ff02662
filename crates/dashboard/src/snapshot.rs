use alloy_primitives::{Address, TxHash, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two event types shown in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Cashback,
    Burn,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cashback => f.write_str("cashback"),
            Self::Burn => f.write_str("burn"),
        }
    }
}

/// One row of history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub kind: EventKind,
    pub tx_hash: TxHash,
    pub block_number: u64,
    pub timestamp: DateTime<Utc>,
    /// Decimal string formatted with the token's decimals
    pub amount: String,
    pub raw_amount: U256,
    /// Recipient for cashback, burner for burn
    pub address: Address,
}

/// Token metadata and balances as read from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenState {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub owner: Address,
    pub total_supply: String,
    pub user_balance: String,
    pub raw_total_supply: U256,
    pub raw_user_balance: U256,
}

/// Point-in-time view of the ledger for one account.
///
/// Never mutated after construction; a refresh builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub account: Address,
    pub chain_id: u64,
    pub token: TokenState,
    pub cashback_history: Vec<HistoryEvent>,
    pub burn_history: Vec<HistoryEvent>,
}

impl Snapshot {
    /// Whether the connected account owns the token.
    ///
    /// Addresses compare by bytes, so checksum casing never matters.
    pub fn is_owner(&self) -> bool {
        self.token.owner != Address::ZERO && self.token.owner == self.account
    }
}
