//! Signing functions bound to a provider.

use crate::RemoteSigner;
use alloy_consensus::TxEnvelope;
use alloy_network::{eip2718::Encodable2718, EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, Bytes};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_signer_local::PrivateKeySigner;
use std::{future::Future, pin::Pin, sync::Arc};

/// Signs a transaction request and returns the raw signed bytes.
///
/// The request is completed (nonce, fees, gas) against the chain first.
pub type SignerFn = Arc<
    dyn Fn(TransactionRequest) -> Pin<Box<dyn Future<Output = eyre::Result<Bytes>> + Send>>
        + Send
        + Sync,
>;

/// Headroom added on top of the node's gas estimate, in percent.
pub const GAS_MARGIN_PERCENT: u64 = 20;

/// Key material a [`SignerFn`] can be built from.
#[derive(Debug, Clone)]
pub enum SigningKey {
    Proxy(RemoteSigner),
    Local(PrivateKeySigner),
}

impl SigningKey {
    pub fn address(&self) -> Address {
        match self {
            Self::Proxy(remote) => remote.address(),
            Self::Local(signer) => signer.address(),
        }
    }

    /// Bind the key to `provider`, producing a [`SignerFn`].
    pub fn bind<P>(self, provider: P, chain_id: u64) -> SignerFn
    where
        P: Provider + Clone + 'static,
    {
        let from = self.address();
        let backend = match self {
            Self::Proxy(remote) => Backend::Proxy(remote),
            Self::Local(signer) => Backend::Local(EthereumWallet::from(signer)),
        };

        Arc::new(move |tx: TransactionRequest| {
            let backend = backend.clone();
            let provider = provider.clone();
            Box::pin(async move {
                let tx = fill_transaction(tx, &provider, from, chain_id).await?;
                backend.sign(tx).await
            })
        })
    }
}

#[derive(Clone)]
enum Backend {
    Proxy(RemoteSigner),
    Local(EthereumWallet),
}

impl Backend {
    async fn sign(&self, tx: TransactionRequest) -> eyre::Result<Bytes> {
        match self {
            Self::Proxy(remote) => Ok(remote.sign_transaction(tx).await?),
            Self::Local(wallet) => {
                let envelope: TxEnvelope = tx.build(wallet).await.map_err(|e| eyre::eyre!("{e}"))?;
                Ok(Bytes::from(envelope.encoded_2718()))
            }
        }
    }
}

/// Complete the fields a wallet would fill before signing.
///
/// Fields already set on `tx` are left alone.
pub async fn fill_transaction<P>(
    mut tx: TransactionRequest,
    provider: &P,
    from: Address,
    chain_id: u64,
) -> eyre::Result<TransactionRequest>
where
    P: Provider,
{
    tx.from.get_or_insert(from);
    tx.chain_id.get_or_insert(chain_id);

    if tx.nonce.is_none() {
        tx.nonce = Some(provider.get_transaction_count(from).await?);
    }

    // Fees before gas: estimation may depend on them
    if tx.max_fee_per_gas.is_none() || tx.max_priority_fee_per_gas.is_none() {
        let fees = provider.estimate_eip1559_fees().await?;
        tx.max_fee_per_gas.get_or_insert(fees.max_fee_per_gas);
        tx.max_priority_fee_per_gas
            .get_or_insert(fees.max_priority_fee_per_gas);
    }

    if tx.gas.is_none() {
        let estimate = provider.estimate_gas(tx.clone()).await?;
        tx.gas = Some(with_gas_margin(estimate));
    }

    Ok(tx)
}

pub const fn with_gas_margin(estimate: u64) -> u64 {
    estimate.saturating_add(estimate / 100 * GAS_MARGIN_PERCENT)
}
