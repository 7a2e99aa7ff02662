//! CET dashboard client.
//!
//! Reads token state and event history from a [`TokenLedger`], keeps the
//! result as an immutable [`Snapshot`] inside a [`Session`], and submits
//! burn and cashback transactions through the connected wallet.

pub mod chain;
pub mod error;
pub mod history;
pub mod hydrate;
pub mod memory;
pub mod metrics;
pub mod render;
pub mod session;
pub mod snapshot;
pub mod source;
pub mod submit;
pub mod units;

pub use chain::ContractLedger;
pub use error::DashboardError;
pub use memory::MemoryLedger;
pub use session::{Dashboard, EventOutcome, Session};
pub use snapshot::{EventKind, HistoryEvent, Snapshot, TokenState};
pub use source::{LedgerLog, TokenLedger, TxOutcome};
pub use submit::{BurnForm, CashbackForm, FormPhase};
