use alloy_primitives::Address;
use config::{
    contract_address_from_env, DashboardSettings, NetworkConfig, NetworkConfigBuilder,
    NetworkType,
};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

pub const RPC_URL_ENV: &str = "RPC_URL";
pub const SIGNER_PROXY_URL_ENV: &str = "SIGNER_PROXY_URL";

const DEFAULT_RPC_URL: &str = "https://rpc-amoy.polygon.technology";
const DEFAULT_WATCH_INTERVAL_SECS: u64 = 4;

/// Top-level dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Network preset
    pub network: NetworkType,

    /// Chain id override for forks and devnets
    pub chain_id: Option<u64>,

    /// Explorer base url override
    pub explorer_url: Option<String>,

    /// RPC endpoint url
    pub rpc_url: String,

    /// CET contract address. Without it every contract interaction is disabled.
    pub contract_address: Option<Address>,

    /// Explorer link template, `{hash}` is replaced by the tx hash.
    /// Defaults to the network's explorer.
    pub explorer_tx_template: Option<String>,

    /// Signer-proxy url (optional)
    pub signer_proxy_url: Option<String>,

    /// Account for the signer proxy, or a watch-only account
    pub account: Option<Address>,

    /// Seconds between wallet polls in `watch`
    pub watch_interval_secs: u64,

    /// History and formatting tunables
    pub dashboard: DashboardSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkType::Testnet,
            chain_id: None,
            explorer_url: None,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            contract_address: None,
            explorer_tx_template: None,
            signer_proxy_url: None,
            account: None,
            watch_interval_secs: DEFAULT_WATCH_INTERVAL_SECS,
            dashboard: DashboardSettings::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise start from defaults, then apply
    /// environment overrides and validate.
    pub fn load(path: Option<&Path>) -> eyre::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.dashboard.validate()?;
        Ok(config)
    }

    /// Environment variables win over file values.
    pub fn apply_env(&mut self) -> eyre::Result<()> {
        if let Some(address) = contract_address_from_env()? {
            self.contract_address = Some(address);
        }
        if let Some(url) = non_empty_env(RPC_URL_ENV) {
            self.rpc_url = url;
        }
        if let Some(url) = non_empty_env(SIGNER_PROXY_URL_ENV) {
            self.signer_proxy_url = Some(url);
        }
        Ok(())
    }

    /// Network preset with the configured overrides applied.
    pub fn network_config(&self) -> NetworkConfig {
        let mut builder = NetworkConfigBuilder::from_network_type(self.network);
        if let Some(chain_id) = self.chain_id {
            builder = builder.chain_id(chain_id);
        }
        if let Some(url) = &self.explorer_url {
            builder = builder.explorer_url(url.as_str());
        }
        builder.build()
    }

    /// Template for transaction links.
    pub fn explorer_tx_template(&self) -> String {
        self.explorer_tx_template
            .clone()
            .unwrap_or_else(|| self.network_config().tx_template())
    }

    pub const fn watch_interval(&self) -> Duration {
        Duration::from_secs(self.watch_interval_secs)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
