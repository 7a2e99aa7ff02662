//! Command-line CET dashboard.
//!
//! Wires configuration, wallet discovery and a [`TokenLedger`] into a
//! [`Dashboard`], and turns the resulting session into text or JSON.

pub mod config;
pub mod metrics;

use crate::config::Config;
use alloy_primitives::{address, Address, TxHash, U256};
use alloy_provider::Provider;
use client::{discover, RemoteSigner, Wallet, DEFAULT_PREFERENCE};
use dashboard::{
    render::{render_session, RenderOptions},
    ContractLedger, Dashboard, DashboardError, MemoryLedger, Session, Snapshot, TokenLedger,
    TxOutcome,
};
use ledger::CetLedger;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// A user action against the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Show,
    Burn { amount: String },
    Cashback { to: String, amount: String },
}

/// Build the wallet candidates the configuration allows.
///
/// Order does not matter here; [`discover`] applies the preference.
pub fn wallet_candidates(
    config: &Config,
    private_key: Option<&str>,
    chain_id: u64,
) -> eyre::Result<Vec<Wallet>> {
    let mut candidates = Vec::new();

    match (&config.signer_proxy_url, config.account) {
        (Some(url), Some(account)) => {
            candidates.push(Wallet::SignerProxy(RemoteSigner::new(
                url.clone(),
                account,
                chain_id,
            )));
        }
        (Some(url), None) => {
            warn!(%url, "Signer proxy configured without an account, skipping");
        }
        _ => {}
    }

    if let Some(key) = private_key.map(str::trim).filter(|k| !k.is_empty()) {
        candidates.push(Wallet::LocalKey(client::parse_private_key(key)?));
    }

    if let Some(account) = config.account {
        candidates.push(Wallet::ReadOnly(account));
    }

    Ok(candidates)
}

/// The configured contract address, required before any contract interaction.
pub fn contract_address(config: &Config) -> Result<Address, DashboardError> {
    config
        .contract_address
        .ok_or(DashboardError::MissingContractAddress)
}

/// A dashboard bound to a live contract.
pub struct Connected<P> {
    pub dashboard: Dashboard<ContractLedger<P>>,
    pub wallet: Wallet,
    pub provider: P,
    pub chain_id: u64,
}

/// Discover a wallet, connect to the contract and hydrate.
pub async fn connect(
    config: &Config,
    contract_address: Address,
    private_key: Option<&str>,
) -> eyre::Result<Connected<impl Provider + Clone + 'static>> {
    let provider = client::create_provider(&config.rpc_url).await?;
    let chain_id = provider.get_chain_id().await?;

    let expected = config.network_config();
    if chain_id != expected.chain_id {
        warn!(
            chain_id,
            expected = expected.chain_id,
            network = %expected.name,
            "RPC chain differs from configured network"
        );
    }

    let candidates = wallet_candidates(config, private_key, chain_id)?;
    let wallet = discover(candidates, &DEFAULT_PREFERENCE).map_err(DashboardError::from)?;
    info!(kind = %wallet.kind(), address = %wallet.address(), chain_id, "Using wallet");

    let mut ledger = ContractLedger::new(provider.clone(), contract_address);
    if wallet.can_sign() {
        ledger = ledger.with_signer(wallet.signer_fn(provider.clone(), chain_id)?);
    }

    let mut dashboard = Dashboard::new(ledger, config.dashboard.clone());
    dashboard.connect(&wallet).await?;

    Ok(Connected {
        dashboard,
        wallet,
        provider,
        chain_id,
    })
}

/// Apply `action` to the dashboard.
///
/// `Show` sends nothing. Burn and cashback fill the form and submit it.
pub async fn execute<L>(
    dashboard: &mut Dashboard<L>,
    action: Action,
) -> Result<Option<TxOutcome>, DashboardError>
where
    L: TokenLedger,
{
    match action {
        Action::Show => Ok(None),
        Action::Burn { amount } => {
            dashboard.burn.amount = amount;
            dashboard.submit_burn().await
        }
        Action::Cashback { to, amount } => {
            dashboard.cashback.address = to;
            dashboard.cashback.amount = amount;
            dashboard.submit_cashback().await
        }
    }
}

/// Machine-readable view of a session.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub status: Option<&'a str>,
    pub error: Option<&'a str>,
    pub is_owner: bool,
    pub contract_configured: bool,
    pub snapshot: Option<&'a Snapshot>,
    pub tx_hash: Option<TxHash>,
    pub tx_url: Option<String>,
}

impl<'a> Report<'a> {
    pub fn new(
        session: &'a Session,
        outcome: Option<&TxOutcome>,
        options: &RenderOptions,
    ) -> Self {
        Self {
            status: session.status(),
            error: session.error(),
            is_owner: session.is_owner(),
            contract_configured: options.contract_configured,
            snapshot: session.snapshot(),
            tx_hash: outcome.map(|o| o.tx_hash),
            tx_url: outcome.map(|o| options.tx_url(o.tx_hash)),
        }
    }
}

/// Render a session as text, or as pretty JSON when `json` is set.
pub fn format_output(
    session: &Session,
    outcome: Option<&TxOutcome>,
    options: &RenderOptions,
    json: bool,
) -> eyre::Result<String> {
    if json {
        let report = Report::new(session, outcome, options);
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = render_session(session, options);
    if let Some(outcome) = outcome {
        out.push_str(&format!(
            "\nTransaction: {}\n",
            options.tx_url(outcome.tx_hash)
        ));
    }
    Ok(out)
}

/// Accounts used by the in-memory demo.
pub const DEMO_OWNER: Address = address!("c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0");
pub const DEMO_CUSTOMER: Address = address!("c1c1c1c1c1c1c1c1c1c1c1c1c1c1c1c1c1c1c1c1");

const DEMO_CHAIN_ID: u64 = 80002;

/// Run a cashback and a burn against a fresh in-memory ledger.
///
/// Returns the dashboard connected as the owner after both transactions.
pub async fn run_demo(config: &Config) -> eyre::Result<Dashboard<MemoryLedger>> {
    let genesis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let ledger = MemoryLedger::new(CetLedger::deploy(DEMO_OWNER, genesis)?, DEMO_CHAIN_ID);

    let mut dashboard = Dashboard::new(ledger, config.dashboard.clone());
    dashboard.connect(&Wallet::ReadOnly(DEMO_OWNER)).await?;

    let cashback = Action::Cashback {
        to: DEMO_CUSTOMER.to_string(),
        amount: "25".to_string(),
    };
    execute(&mut dashboard, cashback).await?;

    let burn = Action::Burn {
        amount: "10.5".to_string(),
    };
    execute(&mut dashboard, burn).await?;

    let supply = dashboard
        .session()
        .snapshot()
        .map_or(U256::ZERO, |s| s.token.raw_total_supply);
    info!(%supply, "Demo finished");

    Ok(dashboard)
}
