//! Contract bindings for the CET ledger.
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod cet;
