//! Network configuration for the CET dashboard.
//!
//! Provides chain-specific parameters for the networks CET is deployed on.

use serde::{Deserialize, Serialize};

/// Network type (mainnet or testnet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Mainnet,
    Testnet,
}

/// Complete network configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network type (mainnet or testnet)
    pub network_type: NetworkType,
    /// Chain ID
    pub chain_id: u64,
    /// Human readable chain name
    pub name: String,
    /// Block explorer base url, without trailing slash
    pub explorer_url: String,
    /// Block time in seconds
    pub block_time_secs: u64,
}

impl NetworkConfig {
    /// Polygon PoS mainnet configuration.
    pub fn polygon() -> Self {
        Self {
            network_type: NetworkType::Mainnet,
            chain_id: 137,
            name: "Polygon".to_string(),
            explorer_url: "https://polygonscan.com".to_string(),
            block_time_secs: 2,
        }
    }

    /// Polygon Amoy testnet configuration.
    pub fn amoy() -> Self {
        Self {
            network_type: NetworkType::Testnet,
            chain_id: 80002,
            name: "Polygon Amoy".to_string(),
            explorer_url: "https://amoy.polygonscan.com".to_string(),
            block_time_secs: 2,
        }
    }

    /// Create configuration from network type.
    pub fn from_network_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Mainnet => Self::polygon(),
            NetworkType::Testnet => Self::amoy(),
        }
    }

    /// Explorer link template for transactions. `{hash}` marks the tx hash.
    pub fn tx_template(&self) -> String {
        format!("{}/tx/{{hash}}", self.explorer_url)
    }
}

/// Builder for custom network configurations.
#[derive(Debug, Clone)]
pub struct NetworkConfigBuilder {
    config: NetworkConfig,
}

impl NetworkConfigBuilder {
    /// Start with mainnet defaults.
    pub fn mainnet() -> Self {
        Self {
            config: NetworkConfig::polygon(),
        }
    }

    /// Start with testnet defaults.
    pub fn testnet() -> Self {
        Self {
            config: NetworkConfig::amoy(),
        }
    }

    /// Start with the preset for `network_type`.
    pub fn from_network_type(network_type: NetworkType) -> Self {
        Self {
            config: NetworkConfig::from_network_type(network_type),
        }
    }

    /// Override the chain id (e.g. for a local devnet fork).
    pub const fn chain_id(mut self, chain_id: u64) -> Self {
        self.config.chain_id = chain_id;
        self
    }

    /// Override the explorer base url.
    pub fn explorer_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.config.explorer_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Build the network configuration.
    pub fn build(self) -> NetworkConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amoy_config() {
        let config = NetworkConfig::amoy();
        assert_eq!(config.chain_id, 80002);
        assert_eq!(config.network_type, NetworkType::Testnet);
    }

    #[test]
    fn test_polygon_config() {
        let config = NetworkConfig::polygon();
        assert_eq!(config.chain_id, 137);
        assert_eq!(config.network_type, NetworkType::Mainnet);
    }

    #[test]
    fn test_tx_template() {
        assert_eq!(
            NetworkConfig::amoy().tx_template(),
            "https://amoy.polygonscan.com/tx/{hash}"
        );
        assert_eq!(
            NetworkConfig::polygon().tx_template(),
            "https://polygonscan.com/tx/{hash}"
        );
    }

    #[test]
    fn test_custom_config_builder() {
        let config = NetworkConfigBuilder::testnet()
            .chain_id(31337)
            .explorer_url("http://localhost:4000/")
            .build();

        assert_eq!(config.chain_id, 31337);
        assert_eq!(config.explorer_url, "http://localhost:4000");
        assert_eq!(config.network_type, NetworkType::Testnet);
        assert_eq!(config.tx_template(), "http://localhost:4000/tx/{hash}");
    }

    #[test]
    fn test_builder_from_network_type() {
        let config = NetworkConfigBuilder::from_network_type(NetworkType::Mainnet).build();
        assert_eq!(config, NetworkConfig::polygon());
    }
}
