use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Reverts raised by the ledger.
///
/// Variants carry the same arguments as the contract's custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("OwnableUnauthorizedAccount({0})")]
    OwnableUnauthorizedAccount(Address),

    #[error("OwnableInvalidOwner({0})")]
    OwnableInvalidOwner(Address),

    #[error("ERC20InsufficientBalance({sender}, {balance}, {needed})")]
    InsufficientBalance {
        sender: Address,
        balance: U256,
        needed: U256,
    },

    #[error("ERC20InsufficientAllowance({spender}, {allowance}, {needed})")]
    InsufficientAllowance {
        spender: Address,
        allowance: U256,
        needed: U256,
    },

    #[error("ERC20InvalidSender({0})")]
    InvalidSender(Address),

    #[error("ERC20InvalidReceiver({0})")]
    InvalidReceiver(Address),

    #[error("ERC20InvalidApprover({0})")]
    InvalidApprover(Address),

    #[error("ERC20InvalidSpender({0})")]
    InvalidSpender(Address),

    #[error("total supply overflow")]
    SupplyOverflow,
}
