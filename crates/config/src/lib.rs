//! Configuration types for the CET dashboard.
//!
//! This crate provides:
//! - Network configurations (Polygon mainnet, Amoy testnet)
//! - Dashboard settings (history window, limits, decimals)
//! - Contract address resolution from the environment

pub mod network;
pub mod settings;

pub use network::{NetworkConfig, NetworkConfigBuilder, NetworkType};
pub use settings::{
    contract_address_from_env, parse_contract_address, DashboardSettings, SettingsError,
    CONTRACT_ADDRESS_ENV, DEFAULT_DECIMALS, DEFAULT_SYMBOL, EVENT_LOOKBACK_BLOCKS, HISTORY_LIMIT,
};
