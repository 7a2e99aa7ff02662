//! Building a [`Snapshot`] from ledger reads.

use crate::{
    history::load_history,
    units::format_amount,
    Snapshot, TokenLedger, TokenState,
};
use alloy_primitives::Address;
use config::DashboardSettings;
use eyre::eyre;
use tracing::debug;

/// A freshly read snapshot plus an optional non-fatal history error.
#[derive(Debug, Clone)]
pub struct Hydrated {
    pub snapshot: Snapshot,
    pub history_error: Option<String>,
}

/// Read everything the dashboard shows for `account`.
///
/// The six token reads run concurrently; any failure aborts the whole read
/// so no partial snapshot is ever produced. History failures do not abort.
pub async fn read_snapshot<L>(
    ledger: &L,
    account: Address,
    settings: &DashboardSettings,
) -> eyre::Result<Hydrated>
where
    L: TokenLedger,
{
    let chain_id = ledger.chain_id().await?;

    let (name, symbol, decimals, owner, total_supply, user_balance) = tokio::try_join!(
        ledger.name(),
        ledger.symbol(),
        ledger.decimals(),
        ledger.owner(),
        ledger.total_supply(),
        ledger.balance_of(account),
    )?;

    debug!(
        chain_id,
        %account,
        %owner,
        %total_supply,
        %user_balance,
        "Token state read"
    );

    let (history, history_error) = load_history(ledger, decimals, settings).await;

    let token = TokenState {
        name,
        symbol,
        decimals,
        owner,
        total_supply: format_amount(total_supply, decimals).map_err(|e| eyre!(e))?,
        user_balance: format_amount(user_balance, decimals).map_err(|e| eyre!(e))?,
        raw_total_supply: total_supply,
        raw_user_balance: user_balance,
    };

    Ok(Hydrated {
        snapshot: Snapshot {
            account,
            chain_id,
            token,
            cashback_history: history.cashbacks,
            burn_history: history.burns,
        },
        history_error,
    })
}
