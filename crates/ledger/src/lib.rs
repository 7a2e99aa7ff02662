//! In-memory reference implementation of the CET token ledger.
//!
//! [`CetLedger`] follows the deployed contract's rules: ERC20 balances and
//! allowances, `Ownable` access control, and the CET-specific `burn`,
//! `burnFrom`, `mint` and `giveCashback` entry points. Every successful
//! state-changing call is mined into its own block and returns a
//! [`Receipt`]. Failed calls leave balances, supply and logs untouched.

pub mod error;
pub mod events;
pub mod token;

pub use error::LedgerError;
pub use events::{LedgerEvent, LogEntry, Receipt};
pub use token::{CetLedger, INITIAL_SUPPLY, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};
