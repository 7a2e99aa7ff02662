//! Recent `Cashback` / `Burned` history over a trailing block window.

use crate::{
    units::format_amount, EventKind, HistoryEvent, LedgerLog, TokenLedger,
};
use chrono::{DateTime, Utc};
use config::DashboardSettings;
use eyre::eyre;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Shown when history cannot be loaded. Hydration still succeeds.
pub const HISTORY_ERROR: &str =
    "Unable to load full history. Try refreshing or reduce lookback window.";

/// Both history lists, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    pub cashbacks: Vec<HistoryEvent>,
    pub burns: Vec<HistoryEvent>,
}

/// Fetch history, degrading to empty lists on failure.
///
/// Returns the history and, if the fetch failed, the message to surface.
pub async fn load_history<L>(
    ledger: &L,
    decimals: u8,
    settings: &DashboardSettings,
) -> (History, Option<String>)
where
    L: TokenLedger,
{
    match fetch_history(ledger, decimals, settings).await {
        Ok(history) => (history, None),
        Err(e) => {
            warn!(error = %e, "History fetch failed");
            crate::metrics::record_history_failure();
            (History::default(), Some(HISTORY_ERROR.to_string()))
        }
    }
}

/// Scan the lookback window for both event types.
pub async fn fetch_history<L>(
    ledger: &L,
    decimals: u8,
    settings: &DashboardSettings,
) -> eyre::Result<History>
where
    L: TokenLedger,
{
    let to_block = ledger.block_number().await?;
    let from_block = to_block.saturating_sub(settings.lookback_blocks);

    debug!(from = from_block, to = to_block, "Scanning CET history");

    let (cashbacks, burns) = tokio::try_join!(
        ledger.logs(EventKind::Cashback, from_block, to_block),
        ledger.logs(EventKind::Burn, from_block, to_block),
    )?;

    let mut timestamps = HashMap::new();
    let cashbacks = resolve(ledger, cashbacks, decimals, settings.history_limit, &mut timestamps).await?;
    let burns = resolve(ledger, burns, decimals, settings.history_limit, &mut timestamps).await?;

    Ok(History { cashbacks, burns })
}

/// Keep the newest `limit` logs and attach block timestamps.
async fn resolve<L>(
    ledger: &L,
    mut logs: Vec<LedgerLog>,
    decimals: u8,
    limit: usize,
    timestamps: &mut HashMap<u64, DateTime<Utc>>,
) -> eyre::Result<Vec<HistoryEvent>>
where
    L: TokenLedger,
{
    newest_first(&mut logs, limit);

    let mut events = Vec::with_capacity(logs.len());
    for log in logs {
        let timestamp = match timestamps.get(&log.block_number) {
            Some(ts) => *ts,
            None => {
                let secs = ledger.block_timestamp(log.block_number).await?;
                let ts = i64::try_from(secs)
                    .ok()
                    .and_then(|secs| DateTime::from_timestamp(secs, 0))
                    .ok_or_else(|| eyre!("Block {} has invalid timestamp {}", log.block_number, secs))?;
                timestamps.insert(log.block_number, ts);
                ts
            }
        };

        events.push(HistoryEvent {
            kind: log.kind,
            tx_hash: log.tx_hash,
            block_number: log.block_number,
            timestamp,
            amount: format_amount(log.amount, decimals).map_err(|e| eyre!(e))?,
            raw_amount: log.amount,
            address: log.subject,
        });
    }

    Ok(events)
}

/// Sort by block number descending and truncate to `limit`.
///
/// Logs within the same block keep their relative order.
pub fn newest_first(logs: &mut Vec<LedgerLog>, limit: usize) {
    logs.sort_by(|a, b| b.block_number.cmp(&a.block_number));
    logs.truncate(limit);
}
