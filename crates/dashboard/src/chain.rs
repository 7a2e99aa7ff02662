//! [`TokenLedger`] backed by the deployed CET contract.

use crate::{EventKind, LedgerLog, TokenLedger, TxOutcome};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::{BlockNumberOrTag, TransactionRequest};
use binding::cet::ICETToken;
use client::SignerFn;
use eyre::{bail, eyre};
use tracing::{debug, info};

/// Reads through `provider`; writes are signed by the connected wallet.
pub struct ContractLedger<P> {
    provider: P,
    address: Address,
    signer: Option<SignerFn>,
}

impl<P> ContractLedger<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, address: Address) -> Self {
        Self {
            provider,
            address,
            signer: None,
        }
    }

    /// Attach the wallet's signing function, enabling burn and cashback.
    pub fn with_signer(mut self, signer: SignerFn) -> Self {
        self.signer = Some(signer);
        self
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    fn contract(&self) -> ICETToken::ICETTokenInstance<&P> {
        ICETToken::new(self.address, &self.provider)
    }

    /// Sign, broadcast and wait for the receipt.
    async fn send(&self, from: Address, tx_request: TransactionRequest) -> eyre::Result<TxOutcome> {
        let signer = self
            .signer
            .as_ref()
            .ok_or_else(|| eyre!("Connected wallet cannot sign transactions"))?;

        let signed_tx = signer(tx_request.from(from)).await?;
        let pending = self.provider.send_raw_transaction(&signed_tx).await?;
        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            bail!("Transaction {} reverted", receipt.transaction_hash);
        }

        info!(
            tx_hash = %receipt.transaction_hash,
            block_number = receipt.block_number,
            gas_used = receipt.gas_used,
            "Transaction mined"
        );

        Ok(TxOutcome {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}

impl<P> TokenLedger for ContractLedger<P>
where
    P: Provider + Clone,
{
    async fn chain_id(&self) -> eyre::Result<u64> {
        Ok(self.provider.get_chain_id().await?)
    }

    async fn name(&self) -> eyre::Result<String> {
        Ok(self.contract().name().call().await?)
    }

    async fn symbol(&self) -> eyre::Result<String> {
        Ok(self.contract().symbol().call().await?)
    }

    async fn decimals(&self) -> eyre::Result<u8> {
        Ok(self.contract().decimals().call().await?)
    }

    async fn owner(&self) -> eyre::Result<Address> {
        Ok(self.contract().owner().call().await?)
    }

    async fn total_supply(&self) -> eyre::Result<U256> {
        Ok(self.contract().totalSupply().call().await?)
    }

    async fn balance_of(&self, account: Address) -> eyre::Result<U256> {
        Ok(self.contract().balanceOf(account).call().await?)
    }

    async fn block_number(&self) -> eyre::Result<u64> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn block_timestamp(&self, number: u64) -> eyre::Result<u64> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Number(number))
            .await?
            .ok_or_else(|| eyre!("Block not found: {}", number))?;
        Ok(block.header.timestamp)
    }

    async fn logs(
        &self,
        kind: EventKind,
        from_block: u64,
        to_block: u64,
    ) -> eyre::Result<Vec<LedgerLog>> {
        debug!(%kind, from = from_block, to = to_block, "Querying CET logs");

        let contract = self.contract();
        let logs = match kind {
            EventKind::Cashback => contract
                .Cashback_filter()
                .from_block(from_block)
                .to_block(to_block)
                .query()
                .await?
                .into_iter()
                .map(|(event, log)| (event.user, event.amount, log))
                .collect::<Vec<_>>(),
            EventKind::Burn => contract
                .Burned_filter()
                .from_block(from_block)
                .to_block(to_block)
                .query()
                .await?
                .into_iter()
                .map(|(event, log)| (event.from, event.amount, log))
                .collect::<Vec<_>>(),
        };

        logs.into_iter()
            .map(|(subject, amount, log)| {
                Ok(LedgerLog {
                    kind,
                    tx_hash: log
                        .transaction_hash
                        .ok_or_else(|| eyre!("{kind} log without transaction hash"))?,
                    block_number: log
                        .block_number
                        .ok_or_else(|| eyre!("{kind} log without block number"))?,
                    subject,
                    amount,
                })
            })
            .collect()
    }

    async fn burn(&self, from: Address, amount: U256) -> eyre::Result<TxOutcome> {
        let tx_request = self.contract().burn(amount).into_transaction_request();
        self.send(from, tx_request).await
    }

    async fn give_cashback(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> eyre::Result<TxOutcome> {
        let tx_request = self
            .contract()
            .giveCashback(to, amount)
            .into_transaction_request();
        self.send(from, tx_request).await
    }
}
