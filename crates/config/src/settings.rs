//! Dashboard behaviour settings and contract address resolution.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the CET contract address.
pub const CONTRACT_ADDRESS_ENV: &str = "CET_CONTRACT_ADDRESS";

/// Number of trailing blocks scanned for history events.
pub const EVENT_LOOKBACK_BLOCKS: u64 = 200_000;

/// Maximum history entries kept per event type.
pub const HISTORY_LIMIT: usize = 10;

/// Decimals assumed before the token has been read.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Symbol shown before the token has been read.
pub const DEFAULT_SYMBOL: &str = "CET";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid contract address {value:?}: {reason}")]
    InvalidContractAddress { value: String, reason: String },

    #[error("History limit must be greater than zero")]
    ZeroHistoryLimit,
}

/// Tunables for hydration and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Width of the trailing block window scanned for events
    pub lookback_blocks: u64,
    /// Entries kept per event type
    pub history_limit: usize,
    /// Decimals used until the ledger reports its own
    pub default_decimals: u8,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            lookback_blocks: EVENT_LOOKBACK_BLOCKS,
            history_limit: HISTORY_LIMIT,
            default_decimals: DEFAULT_DECIMALS,
        }
    }
}

impl DashboardSettings {
    pub const fn validate(&self) -> Result<(), SettingsError> {
        if self.history_limit == 0 {
            return Err(SettingsError::ZeroHistoryLimit);
        }
        Ok(())
    }
}

/// Parse an optional contract address.
///
/// Blank values count as "not configured" rather than as an error.
pub fn parse_contract_address(value: Option<&str>) -> Result<Option<Address>, SettingsError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    raw.parse::<Address>()
        .map(Some)
        .map_err(|e| SettingsError::InvalidContractAddress {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Read the contract address from [`CONTRACT_ADDRESS_ENV`].
pub fn contract_address_from_env() -> Result<Option<Address>, SettingsError> {
    let value = std::env::var(CONTRACT_ADDRESS_ENV).ok();
    parse_contract_address(value.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_default_settings() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.lookback_blocks, 200_000);
        assert_eq!(settings.history_limit, 10);
        assert_eq!(settings.default_decimals, 18);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_history_limit_rejected() {
        let settings = DashboardSettings {
            history_limit: 0,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::ZeroHistoryLimit));
    }

    #[test]
    fn test_parse_contract_address() {
        let parsed =
            parse_contract_address(Some(" 0x77f676eEd95f7752C8e76287cd386ed63218f71d ")).unwrap();
        assert_eq!(
            parsed,
            Some(address!("0x77f676eEd95f7752C8e76287cd386ed63218f71d"))
        );
    }

    #[test]
    fn test_blank_contract_address_is_unset() {
        assert_eq!(parse_contract_address(None).unwrap(), None);
        assert_eq!(parse_contract_address(Some("   ")).unwrap(), None);
    }

    #[test]
    fn test_bad_contract_address() {
        let err = parse_contract_address(Some("0x1234")).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidContractAddress { .. }));
    }

    #[test]
    fn test_settings_from_partial_toml() {
        let settings: DashboardSettings = toml::from_str("history_limit = 5").unwrap();
        assert_eq!(settings.history_limit, 5);
        assert_eq!(settings.lookback_blocks, EVENT_LOOKBACK_BLOCKS);
    }
}
