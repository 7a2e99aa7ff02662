//! Session state and the operations that drive it.

use crate::{
    hydrate::read_snapshot,
    metrics,
    units::{display_symbol, parse_amount},
    BurnForm, CashbackForm, DashboardError, Snapshot, TokenLedger, TxOutcome,
};
use alloy_primitives::Address;
use client::{Wallet, WalletEvent};
use config::DashboardSettings;
use std::{sync::Arc, time::Instant};
use tracing::{error, info, warn};

pub const REFRESHED_STATUS: &str = "Token state refreshed from chain.";

/// What the dashboard knows right now.
///
/// The snapshot is only ever replaced as a whole.
#[derive(Debug, Clone, Default)]
pub struct Session {
    snapshot: Option<Arc<Snapshot>>,
    status: Option<String>,
    error: Option<String>,
    refreshing: bool,
}

impl Session {
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_deref()
    }

    pub fn account(&self) -> Option<Address> {
        self.snapshot.as_ref().map(|s| s.account)
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.snapshot.as_ref().map(|s| s.chain_id)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_owner(&self) -> bool {
        self.snapshot().is_some_and(Snapshot::is_owner)
    }
}

/// Result of handling a wallet event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// State was re-read for the new account
    Hydrated,
    /// Wallet disconnected; session cleared
    Reset,
    /// Chain switched; the caller must rebuild the dashboard from scratch
    ReloadRequired,
}

/// The dashboard: one ledger, one session, two forms.
pub struct Dashboard<L> {
    ledger: L,
    settings: DashboardSettings,
    session: Session,
    pub burn: BurnForm,
    pub cashback: CashbackForm,
}

impl<L> Dashboard<L>
where
    L: TokenLedger,
{
    pub fn new(ledger: L, settings: DashboardSettings) -> Self {
        Self {
            ledger,
            settings,
            session: Session::default(),
            burn: BurnForm::default(),
            cashback: CashbackForm::default(),
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Decimals of the current snapshot, or the configured default.
    pub fn decimals(&self) -> u8 {
        self.session
            .snapshot()
            .map_or(self.settings.default_decimals, |s| s.token.decimals)
    }

    /// Symbol of the current snapshot, or the default before the first read.
    pub fn symbol(&self) -> String {
        let symbol = self
            .session
            .snapshot()
            .map_or("", |s| s.token.symbol.as_str());
        display_symbol(symbol).to_string()
    }

    /// Ask the wallet for accounts and hydrate for the first one.
    pub async fn connect(&mut self, wallet: &Wallet) -> Result<(), DashboardError> {
        self.session.error = None;
        let accounts = match wallet.request_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                let err = DashboardError::from(e);
                self.session.error = Some(err.to_string());
                return Err(err);
            }
        };
        self.hydrate(accounts[0]).await
    }

    /// Re-read state for the connected account.
    pub async fn refresh(&mut self) -> Result<(), DashboardError> {
        let account = self.session.account().ok_or(DashboardError::NotConnected)?;
        self.hydrate(account).await
    }

    /// Replace the snapshot with a fresh read for `account`.
    ///
    /// On failure the previous snapshot stays in place.
    pub async fn hydrate(&mut self, account: Address) -> Result<(), DashboardError> {
        self.session.refreshing = true;
        self.session.error = None;
        let started = Instant::now();

        let result = read_snapshot(&self.ledger, account, &self.settings).await;
        self.session.refreshing = false;
        metrics::record_hydration(result.is_ok(), started.elapsed());

        match result {
            Ok(hydrated) => {
                metrics::set_total_supply(&hydrated.snapshot.token.total_supply);
                info!(
                    %account,
                    chain_id = hydrated.snapshot.chain_id,
                    balance = %hydrated.snapshot.token.user_balance,
                    "Dashboard hydrated"
                );
                self.session.snapshot = Some(Arc::new(hydrated.snapshot));
                self.session.status = Some(REFRESHED_STATUS.to_string());
                self.session.error = hydrated.history_error;
                Ok(())
            }
            Err(e) => {
                error!(%account, error = %e, "Hydration failed");
                let err = DashboardError::Read(e.to_string());
                self.session.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Clear everything, as on wallet disconnect.
    pub fn reset(&mut self) {
        self.session = Session::default();
    }

    /// React to a wallet event.
    pub async fn handle_wallet_event(
        &mut self,
        event: WalletEvent,
    ) -> Result<EventOutcome, DashboardError> {
        match event {
            WalletEvent::AccountsChanged(accounts) => match accounts.first() {
                None => {
                    info!("Wallet disconnected");
                    self.reset();
                    Ok(EventOutcome::Reset)
                }
                Some(account) => {
                    info!(%account, "Wallet account changed");
                    self.hydrate(*account).await?;
                    Ok(EventOutcome::Hydrated)
                }
            },
            WalletEvent::ChainChanged(chain_id) => {
                warn!(chain_id, "Wallet chain changed, reload required");
                Ok(EventOutcome::ReloadRequired)
            }
        }
    }

    /// Submit the burn form.
    ///
    /// Returns `Ok(None)` without sending anything when the amount is empty.
    pub async fn submit_burn(&mut self) -> Result<Option<TxOutcome>, DashboardError> {
        if !self.burn.is_complete() {
            return Ok(None);
        }
        let account = self.session.account().ok_or(DashboardError::NotConnected)?;
        self.burn.phase.begin()?;

        let amount = self.burn.amount.trim().to_string();
        self.session.status = Some("Submitting burn transaction...".to_string());
        self.session.error = None;

        let result = match parse_amount(&amount, self.decimals()) {
            Ok(value) => self
                .ledger
                .burn(account, value)
                .await
                .map_err(|e| DashboardError::Write(e.to_string())),
            Err(msg) => Err(DashboardError::InvalidInput(msg)),
        };
        metrics::record_submission("burn", result.is_ok());

        match result {
            Ok(outcome) => {
                info!(tx_hash = %outcome.tx_hash, %amount, "Burn confirmed");
                self.burn.phase.confirm(outcome.tx_hash);
                self.burn.clear();
                let symbol = self.symbol();
                self.finish_submission(account, format!("Burned {amount} {symbol}."))
                    .await;
                Ok(Some(outcome))
            }
            Err(e) => {
                error!(error = %e, "Burn failed");
                self.burn.phase.fail(e.to_string());
                self.session.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Submit the cashback form. Owner only.
    ///
    /// Returns `Ok(None)` without sending anything when a field is empty.
    pub async fn submit_cashback(&mut self) -> Result<Option<TxOutcome>, DashboardError> {
        if !self.cashback.is_complete() {
            return Ok(None);
        }
        let account = self.session.account().ok_or(DashboardError::NotConnected)?;
        if !self.session.is_owner() {
            self.session.error = Some(DashboardError::NotOwner.to_string());
            return Err(DashboardError::NotOwner);
        }
        self.cashback.phase.begin()?;

        let raw_address = self.cashback.address.trim().to_string();
        let amount = self.cashback.amount.trim().to_string();
        self.session.status = Some("Submitting cashback transaction...".to_string());
        self.session.error = None;

        let result = match (
            raw_address.parse::<Address>(),
            parse_amount(&amount, self.decimals()),
        ) {
            (Ok(recipient), Ok(value)) => self
                .ledger
                .give_cashback(account, recipient, value)
                .await
                .map_err(|e| DashboardError::Write(e.to_string())),
            (Err(e), _) => Err(DashboardError::InvalidInput(format!(
                "Invalid recipient address {raw_address:?}: {e}"
            ))),
            (_, Err(msg)) => Err(DashboardError::InvalidInput(msg)),
        };
        metrics::record_submission("cashback", result.is_ok());

        match result {
            Ok(outcome) => {
                info!(tx_hash = %outcome.tx_hash, recipient = %raw_address, %amount, "Cashback confirmed");
                self.cashback.phase.confirm(outcome.tx_hash);
                self.cashback.clear();
                let symbol = self.symbol();
                self.finish_submission(
                    account,
                    format!("Cashback of {amount} {symbol} sent to {raw_address}."),
                )
                .await;
                Ok(Some(outcome))
            }
            Err(e) => {
                error!(error = %e, "Cashback failed");
                self.cashback.phase.fail(e.to_string());
                self.session.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Show `status` for a mined transaction and re-read state.
    ///
    /// A failed re-read only sets the session error; the status stays.
    async fn finish_submission(&mut self, account: Address, status: String) {
        self.session.status = Some(status.clone());
        if self.hydrate(account).await.is_ok() {
            self.session.status = Some(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{history::HISTORY_ERROR, EventKind, LedgerLog, MemoryLedger};
    use alloy_primitives::U256;
    use eyre::bail;
    use ledger::CetLedger;
    use std::sync::atomic::{AtomicBool, Ordering};

    const CHAIN_ID: u64 = 80002;

    fn owner() -> Address {
        Address::repeat_byte(0xaa)
    }

    fn user() -> Address {
        Address::repeat_byte(0xbb)
    }

    fn cet(amount: u64) -> U256 {
        U256::from(amount) * U256::from(10u64).pow(U256::from(18u64))
    }

    fn memory_ledger() -> MemoryLedger {
        MemoryLedger::new(CetLedger::deploy(owner(), 1_700_000_000).unwrap(), CHAIN_ID)
    }

    /// Memory ledger whose reads or log queries can be switched off.
    ///
    /// With `fail_after_write` set, reads start failing once a write lands.
    #[derive(Clone)]
    struct FlakyLedger {
        inner: MemoryLedger,
        fail_reads: Arc<AtomicBool>,
        fail_logs: Arc<AtomicBool>,
        fail_after_write: Arc<AtomicBool>,
    }

    impl FlakyLedger {
        fn new(inner: MemoryLedger) -> Self {
            Self {
                inner,
                fail_reads: Arc::default(),
                fail_logs: Arc::default(),
                fail_after_write: Arc::default(),
            }
        }

        fn after_write(&self, outcome: eyre::Result<TxOutcome>) -> eyre::Result<TxOutcome> {
            if outcome.is_ok() && self.fail_after_write.load(Ordering::SeqCst) {
                self.fail_reads.store(true, Ordering::SeqCst);
            }
            outcome
        }

        fn check_reads(&self) -> eyre::Result<()> {
            if self.fail_reads.load(Ordering::SeqCst) {
                bail!("rpc unavailable");
            }
            Ok(())
        }
    }

    impl TokenLedger for FlakyLedger {
        async fn chain_id(&self) -> eyre::Result<u64> {
            self.inner.chain_id().await
        }

        async fn name(&self) -> eyre::Result<String> {
            self.inner.name().await
        }

        async fn symbol(&self) -> eyre::Result<String> {
            self.inner.symbol().await
        }

        async fn decimals(&self) -> eyre::Result<u8> {
            self.inner.decimals().await
        }

        async fn owner(&self) -> eyre::Result<Address> {
            self.inner.owner().await
        }

        async fn total_supply(&self) -> eyre::Result<U256> {
            self.inner.total_supply().await
        }

        async fn balance_of(&self, account: Address) -> eyre::Result<U256> {
            self.check_reads()?;
            self.inner.balance_of(account).await
        }

        async fn block_number(&self) -> eyre::Result<u64> {
            self.inner.block_number().await
        }

        async fn block_timestamp(&self, number: u64) -> eyre::Result<u64> {
            self.inner.block_timestamp(number).await
        }

        async fn logs(
            &self,
            kind: EventKind,
            from_block: u64,
            to_block: u64,
        ) -> eyre::Result<Vec<LedgerLog>> {
            if self.fail_logs.load(Ordering::SeqCst) {
                bail!("query returned more than 10000 results");
            }
            self.inner.logs(kind, from_block, to_block).await
        }

        async fn burn(&self, from: Address, amount: U256) -> eyre::Result<TxOutcome> {
            self.after_write(self.inner.burn(from, amount).await)
        }

        async fn give_cashback(
            &self,
            from: Address,
            to: Address,
            amount: U256,
        ) -> eyre::Result<TxOutcome> {
            self.after_write(self.inner.give_cashback(from, to, amount).await)
        }
    }

    #[tokio::test]
    async fn test_hydrate_builds_snapshot() {
        let ledger = memory_ledger();
        ledger
            .with(|l| l.give_cashback(owner(), user(), cet(25)))
            .unwrap()
            .unwrap();

        let mut dashboard = Dashboard::new(ledger, DashboardSettings::default());
        dashboard.hydrate(user()).await.unwrap();

        let session = dashboard.session();
        assert_eq!(session.account(), Some(user()));
        assert_eq!(session.chain_id(), Some(CHAIN_ID));
        assert_eq!(session.status(), Some(REFRESHED_STATUS));
        assert_eq!(session.error(), None);
        assert!(!session.is_refreshing());
        assert!(!session.is_owner());

        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.token.symbol, "CET");
        assert_eq!(snapshot.token.user_balance, "25.0");
        assert_eq!(snapshot.token.total_supply, "1000025.0");
        assert_eq!(snapshot.cashback_history.len(), 1);
        assert_eq!(snapshot.cashback_history[0].address, user());
        assert_eq!(snapshot.cashback_history[0].amount, "25.0");
        assert!(snapshot.burn_history.is_empty());
    }

    #[tokio::test]
    async fn test_connect_read_only_wallet() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        dashboard.connect(&Wallet::ReadOnly(owner())).await.unwrap();

        assert_eq!(dashboard.session().account(), Some(owner()));
        assert!(dashboard.session().is_owner());
    }

    #[tokio::test]
    async fn test_failed_read_keeps_previous_snapshot() {
        let ledger = FlakyLedger::new(memory_ledger());
        let mut dashboard = Dashboard::new(ledger.clone(), DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();
        let before = dashboard.session().snapshot().cloned();

        ledger.fail_reads.store(true, Ordering::SeqCst);
        let err = dashboard.refresh().await.unwrap_err();

        assert!(matches!(err, DashboardError::Read(_)));
        assert!(dashboard.session().error().unwrap().contains("rpc unavailable"));
        assert_eq!(dashboard.session().snapshot().cloned(), before);
        assert!(!dashboard.session().is_refreshing());
    }

    #[tokio::test]
    async fn test_history_failure_is_not_fatal() {
        let ledger = FlakyLedger::new(memory_ledger());
        ledger.fail_logs.store(true, Ordering::SeqCst);

        let mut dashboard = Dashboard::new(ledger, DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();

        let session = dashboard.session();
        assert_eq!(session.error(), Some(HISTORY_ERROR));
        let snapshot = session.snapshot().unwrap();
        assert!(snapshot.cashback_history.is_empty());
        assert!(snapshot.burn_history.is_empty());
        assert_eq!(snapshot.token.user_balance, "1000000.0");
    }

    #[tokio::test]
    async fn test_refresh_requires_connection() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        assert_eq!(dashboard.refresh().await, Err(DashboardError::NotConnected));
    }

    #[tokio::test]
    async fn test_symbol_before_first_read() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        assert_eq!(dashboard.symbol(), "CET");
        assert_eq!(dashboard.decimals(), 18);

        dashboard.hydrate(user()).await.unwrap();
        assert_eq!(dashboard.symbol(), "CET");
    }

    #[tokio::test]
    async fn test_burn_success() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();

        dashboard.burn.amount = "2.5".to_string();
        let outcome = dashboard.submit_burn().await.unwrap().unwrap();

        assert!(matches!(dashboard.burn.phase, crate::FormPhase::Confirmed(hash) if hash == outcome.tx_hash));
        assert!(dashboard.burn.amount.is_empty());
        let session = dashboard.session();
        assert_eq!(session.status(), Some("Burned 2.5 CET."));
        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.token.user_balance, "999997.5");
        assert_eq!(snapshot.burn_history.len(), 1);
        assert_eq!(snapshot.burn_history[0].tx_hash, outcome.tx_hash);
    }

    #[tokio::test]
    async fn test_burn_confirmed_when_refresh_fails() {
        let ledger = FlakyLedger::new(memory_ledger());
        let mut dashboard = Dashboard::new(ledger.clone(), DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();
        let before = dashboard.session().snapshot().cloned();

        ledger.fail_after_write.store(true, Ordering::SeqCst);
        dashboard.burn.amount = "1".to_string();
        let outcome = dashboard.submit_burn().await.unwrap().unwrap();

        assert!(matches!(dashboard.burn.phase, crate::FormPhase::Confirmed(hash) if hash == outcome.tx_hash));
        assert!(dashboard.burn.amount.is_empty());
        let session = dashboard.session();
        assert_eq!(session.status(), Some("Burned 1 CET."));
        assert!(session.error().unwrap().contains("rpc unavailable"));
        assert_eq!(session.snapshot().cloned(), before);
    }

    #[tokio::test]
    async fn test_cashback_confirmed_when_refresh_fails() {
        let ledger = FlakyLedger::new(memory_ledger());
        let mut dashboard = Dashboard::new(ledger.clone(), DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();

        ledger.fail_after_write.store(true, Ordering::SeqCst);
        let recipient = user().to_string();
        dashboard.cashback.address = recipient.clone();
        dashboard.cashback.amount = "3".to_string();
        dashboard.submit_cashback().await.unwrap().unwrap();

        assert!(matches!(dashboard.cashback.phase, crate::FormPhase::Confirmed(_)));
        let session = dashboard.session();
        assert_eq!(
            session.status(),
            Some(format!("Cashback of 3 CET sent to {recipient}.").as_str())
        );
        assert!(session.error().unwrap().contains("rpc unavailable"));
    }

    #[tokio::test]
    async fn test_burn_empty_amount_is_noop() {
        let ledger = memory_ledger();
        let mut dashboard = Dashboard::new(ledger.clone(), DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();

        dashboard.burn.amount = "   ".to_string();
        assert_eq!(dashboard.submit_burn().await, Ok(None));
        assert_eq!(ledger.with(|l| l.block_number()).unwrap(), 1);
    }

    #[tokio::test]
    async fn test_burn_requires_connection() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        dashboard.burn.amount = "1".to_string();
        assert_eq!(dashboard.submit_burn().await, Err(DashboardError::NotConnected));
    }

    #[tokio::test]
    async fn test_burn_insufficient_balance_keeps_input() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        dashboard.hydrate(user()).await.unwrap();

        dashboard.burn.amount = "1".to_string();
        let err = dashboard.submit_burn().await.unwrap_err();

        assert!(matches!(err, DashboardError::Write(_)));
        assert_eq!(dashboard.burn.amount, "1");
        assert!(matches!(dashboard.burn.phase, crate::FormPhase::Failed(_)));
        assert!(dashboard.session().error().is_some());
        assert_eq!(
            dashboard.session().snapshot().unwrap().token.user_balance,
            "0.0"
        );
    }

    #[tokio::test]
    async fn test_burn_rejects_bad_amount() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();

        dashboard.burn.amount = "abc".to_string();
        let err = dashboard.submit_burn().await.unwrap_err();
        assert!(matches!(err, DashboardError::InvalidInput(_)));
        assert_eq!(dashboard.burn.amount, "abc");
    }

    #[tokio::test]
    async fn test_burn_while_submitting_is_rejected() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();

        dashboard.burn.amount = "1".to_string();
        dashboard.burn.phase = crate::FormPhase::Submitting;
        assert_eq!(
            dashboard.submit_burn().await,
            Err(DashboardError::SubmissionInFlight)
        );
    }

    #[tokio::test]
    async fn test_cashback_success() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();

        let recipient = user().to_string().to_lowercase();
        dashboard.cashback.address = recipient.clone();
        dashboard.cashback.amount = "25".to_string();
        dashboard.submit_cashback().await.unwrap().unwrap();

        assert!(dashboard.cashback.address.is_empty());
        assert!(dashboard.cashback.amount.is_empty());
        let session = dashboard.session();
        assert_eq!(
            session.status(),
            Some(format!("Cashback of 25 CET sent to {recipient}.").as_str())
        );
        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.token.total_supply, "1000025.0");
        assert_eq!(snapshot.cashback_history[0].address, user());
        assert_eq!(snapshot.cashback_history[0].amount, "25.0");
    }

    #[tokio::test]
    async fn test_cashback_requires_owner() {
        let ledger = memory_ledger();
        let mut dashboard = Dashboard::new(ledger.clone(), DashboardSettings::default());
        dashboard.hydrate(user()).await.unwrap();

        dashboard.cashback.address = user().to_string();
        dashboard.cashback.amount = "1".to_string();
        assert_eq!(
            dashboard.submit_cashback().await,
            Err(DashboardError::NotOwner)
        );
        assert_eq!(ledger.with(|l| l.block_number()).unwrap(), 1);
    }

    #[tokio::test]
    async fn test_cashback_rejects_bad_address() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();

        dashboard.cashback.address = "0x1234".to_string();
        dashboard.cashback.amount = "1".to_string();
        let err = dashboard.submit_cashback().await.unwrap_err();

        assert!(matches!(err, DashboardError::InvalidInput(_)));
        assert_eq!(dashboard.cashback.address, "0x1234");
    }

    #[tokio::test]
    async fn test_cashback_missing_field_is_noop() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();

        dashboard.cashback.amount = "1".to_string();
        assert_eq!(dashboard.submit_cashback().await, Ok(None));
    }

    #[tokio::test]
    async fn test_wallet_events() {
        let mut dashboard = Dashboard::new(memory_ledger(), DashboardSettings::default());
        dashboard.hydrate(owner()).await.unwrap();

        let outcome = dashboard
            .handle_wallet_event(WalletEvent::AccountsChanged(vec![user()]))
            .await
            .unwrap();
        assert_eq!(outcome, EventOutcome::Hydrated);
        assert_eq!(dashboard.session().account(), Some(user()));

        let outcome = dashboard
            .handle_wallet_event(WalletEvent::ChainChanged(137))
            .await
            .unwrap();
        assert_eq!(outcome, EventOutcome::ReloadRequired);
        assert_eq!(dashboard.session().account(), Some(user()));

        let outcome = dashboard
            .handle_wallet_event(WalletEvent::AccountsChanged(vec![]))
            .await
            .unwrap();
        assert_eq!(outcome, EventOutcome::Reset);
        assert!(dashboard.session().snapshot().is_none());
        assert!(dashboard.session().status().is_none());
    }
}
