//! CET dashboard CLI.
//!
//! - `show`: hydrate and print token state and history
//! - `burn`: burn tokens from the connected account
//! - `cashback`: send a cashback reward (owner only)
//! - `watch`: follow wallet account and chain changes
//! - `demo`: run against an in-memory ledger, no RPC needed

use cet_dashboard::{
    config::Config, connect, contract_address, execute, format_output, metrics::install_prometheus_exporter,
    run_demo, Action,
};
use clap::{Parser, Subcommand};
use client::{WalletEvents, WalletWatcher};
use dashboard::{render::RenderOptions, EventOutcome, TxOutcome};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "cet-dashboard")]
#[command(about = "Inspect and operate the CET token ledger")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Private key for signing transactions (hex string, with or without 0x prefix)
    #[arg(short = 'k', long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Serve Prometheus metrics on this port
    #[arg(long)]
    metrics_port: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print token state and recent history
    Show,

    /// Burn tokens from the connected account
    Burn {
        /// Amount in whole tokens, e.g. 12.5
        amount: String,
    },

    /// Send a cashback reward (owner only)
    Cashback {
        /// Recipient address
        to: String,
        /// Amount in whole tokens
        amount: String,
    },

    /// Follow wallet changes and re-render on each one
    Watch,

    /// Run a cashback and a burn against an in-memory ledger
    Demo,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Some(port) = cli.metrics_port {
        install_prometheus_exporter(port)?;
        info!(port, "Prometheus exporter listening");
    }

    let config = Config::load(cli.config.as_deref())?;
    let options = RenderOptions {
        explorer_tx_template: config.explorer_tx_template(),
        contract_configured: config.contract_address.is_some(),
    };

    info!("Loaded config:");
    info!("  Network: {:?}", config.network);
    info!("  RPC URL: {}", config.rpc_url);
    match config.contract_address {
        Some(address) => info!("  CET contract: {}", address),
        None => warn!("  CET contract: not configured"),
    }

    let action = match cli.command {
        Command::Demo => {
            let dashboard = run_demo(&config).await?;
            let options = RenderOptions {
                contract_configured: true,
                ..options.clone()
            };
            print!(
                "{}",
                format_output(dashboard.session(), None, &options, cli.json)?
            );
            return Ok(());
        }
        Command::Watch => None,
        Command::Show => Some(Action::Show),
        Command::Burn { amount } => Some(Action::Burn { amount }),
        Command::Cashback { to, amount } => Some(Action::Cashback { to, amount }),
    };

    let contract_address = match contract_address(&config) {
        Ok(address) => address,
        Err(e) => {
            warn!(error = %e, "Contract interaction disabled");
            let session = dashboard::Session::default();
            print!("{}", format_output(&session, None, &options, cli.json)?);
            return Ok(());
        }
    };
    let private_key = cli.private_key.as_deref();

    let Some(action) = action else {
        return watch(&config, contract_address, private_key, &options, cli.json).await;
    };

    let mut connected = connect(&config, contract_address, private_key).await?;
    let result = execute(&mut connected.dashboard, action).await;
    let outcome: Option<TxOutcome> = result.as_ref().ok().cloned().flatten();

    print!(
        "{}",
        format_output(
            connected.dashboard.session(),
            outcome.as_ref(),
            &options,
            cli.json
        )?
    );

    if let Err(e) = result {
        error!(error = %e, "Action failed");
        return Err(e.into());
    }
    Ok(())
}

/// Re-render on every wallet event until interrupted.
///
/// A chain change drops the whole dashboard and connects again from scratch.
async fn watch(
    config: &Config,
    contract_address: alloy_primitives::Address,
    private_key: Option<&str>,
    options: &RenderOptions,
    json: bool,
) -> eyre::Result<()> {
    loop {
        let mut connected = connect(config, contract_address, private_key).await?;
        print!(
            "{}",
            format_output(connected.dashboard.session(), None, options, json)?
        );

        let hub = WalletEvents::default();
        let mut subscription = hub.subscribe();
        let accounts = connected.wallet.accounts().await?;
        let watcher = WalletWatcher::new(accounts, connected.chain_id);
        let handle = tokio::spawn(watcher.run(
            connected.wallet.clone(),
            connected.provider.clone(),
            hub.clone(),
            config.watch_interval(),
        ));

        let reload = loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, stopping");
                    break false;
                }
                event = subscription.next() => {
                    let Some(event) = event else { break false };
                    match connected.dashboard.handle_wallet_event(event).await {
                        Ok(EventOutcome::ReloadRequired) => break true,
                        Ok(_) => {}
                        Err(e) => warn!(error = %e, "Failed to apply wallet event"),
                    }
                    print!(
                        "{}",
                        format_output(connected.dashboard.session(), None, options, json)?
                    );
                }
            }
        };

        handle.abort();
        subscription.unsubscribe();
        if !reload {
            return Ok(());
        }
        info!("Chain changed, reconnecting");
    }
}
