//! Plain-text rendering of a session.

use crate::{units::format_display_amount, HistoryEvent, Session, Snapshot};
use config::NetworkConfig;
use std::fmt;

/// Shown whenever no contract address is configured.
pub const MISSING_ADDRESS_WARNING: &str =
    "Contract address not configured. Set CET_CONTRACT_ADDRESS to enable reads and writes.";

const HISTORY_ADDRESS_CHARS: usize = 4;
const HISTORY_TX_CHARS: usize = 6;

/// Shorten a hex string to `0x1234...abcd` form.
///
/// Values too short to benefit are returned unchanged.
pub fn shorten(value: &str, chars: usize) -> String {
    if value.len() <= 2 * chars + 2 || !value.is_ascii() {
        return value.to_string();
    }
    format!("{}...{}", &value[..chars + 2], &value[value.len() - chars..])
}

/// Fill an explorer template with a transaction hash.
pub fn explorer_tx_url(template: &str, tx_hash: impl fmt::Display) -> String {
    template.replace("{hash}", &tx_hash.to_string())
}

/// Options for [`render_session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Explorer link template, `{hash}` is replaced by the tx hash
    pub explorer_tx_template: String,
    pub contract_configured: bool,
}

impl RenderOptions {
    /// Links pointing at `network`'s explorer.
    pub fn for_network(network: &NetworkConfig) -> Self {
        Self {
            explorer_tx_template: network.tx_template(),
            contract_configured: true,
        }
    }

    pub fn tx_url(&self, tx_hash: impl fmt::Display) -> String {
        explorer_tx_url(&self.explorer_tx_template, tx_hash)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::for_network(&NetworkConfig::amoy())
    }
}

/// Render the whole dashboard: warning, status line, token card, history.
pub fn render_session(session: &Session, options: &RenderOptions) -> String {
    SessionView { session, options }.to_string()
}

/// Token card followed by both history tables.
pub fn render_snapshot(snapshot: &Snapshot, options: &RenderOptions) -> String {
    SnapshotView { snapshot, options }.to_string()
}

struct SessionView<'a> {
    session: &'a Session,
    options: &'a RenderOptions,
}

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.options.contract_configured {
            writeln!(f, "WARNING: {MISSING_ADDRESS_WARNING}")?;
        }
        if let Some(status) = self.session.status() {
            writeln!(f, "{status}")?;
        }
        if let Some(error) = self.session.error() {
            writeln!(f, "Error: {error}")?;
        }

        match self.session.snapshot() {
            Some(snapshot) => write!(
                f,
                "{}",
                SnapshotView {
                    snapshot,
                    options: self.options,
                }
            ),
            None => writeln!(f, "Wallet not connected."),
        }
    }
}

struct SnapshotView<'a> {
    snapshot: &'a Snapshot,
    options: &'a RenderOptions,
}

impl fmt::Display for SnapshotView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot;
        let token = &snapshot.token;
        let amount = |value| format_display_amount(value, token.decimals, &token.symbol);

        writeln!(f, "{} ({})", token.name, token.symbol)?;
        writeln!(f, "  Total supply:  {}", amount(token.raw_total_supply))?;
        writeln!(f, "  Your balance:  {}", amount(token.raw_user_balance))?;
        writeln!(f, "  Owner:         {}", token.owner)?;
        writeln!(f, "  Connected:     {}", snapshot.account)?;
        writeln!(f, "  Network:       ChainId {}", snapshot.chain_id)?;
        if snapshot.is_owner() {
            writeln!(f, "  Role:          owner (cashback enabled)")?;
        }

        let tables = [
            ("Cashback history", "Recipient", &snapshot.cashback_history),
            ("Burn history", "Burner", &snapshot.burn_history),
        ];
        for (title, address_label, events) in tables {
            writeln!(f)?;
            writeln!(f, "{title}")?;
            if events.is_empty() {
                writeln!(f, "  No events yet.")?;
                continue;
            }
            for event in events {
                self.history_row(f, address_label, event)?;
            }
        }
        Ok(())
    }
}

impl SnapshotView<'_> {
    fn history_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        address_label: &str,
        event: &HistoryEvent,
    ) -> fmt::Result {
        let token = &self.snapshot.token;
        writeln!(
            f,
            "  {}  {address_label}: {}  {}  tx {}  {}",
            event.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            shorten(&event.address.to_string(), HISTORY_ADDRESS_CHARS),
            format_display_amount(event.raw_amount, token.decimals, &token.symbol),
            shorten(&event.tx_hash.to_string(), HISTORY_TX_CHARS),
            self.options.tx_url(event.tx_hash),
        )
    }
}
