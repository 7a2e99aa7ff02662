use alloy_primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

/// Events emitted by the ledger, one variant per contract event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    Transfer {
        from: Address,
        to: Address,
        value: U256,
    },
    Approval {
        owner: Address,
        spender: Address,
        value: U256,
    },
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
    Minted {
        to: Address,
        amount: U256,
    },
    Burned {
        from: Address,
        amount: U256,
    },
    Cashback {
        user: Address,
        amount: U256,
    },
}

/// A mined event together with its position in the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub event: LedgerEvent,
    pub tx_hash: TxHash,
    pub block_number: u64,
    pub log_index: u64,
}

/// Outcome of a successful state-changing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub tx_hash: TxHash,
    pub block_number: u64,
    pub timestamp: u64,
    pub events: Vec<LedgerEvent>,
}
