//! Client for a signer-proxy service.
//!
//! The proxy holds the keys. It answers `eth_accounts` with the accounts it
//! can sign for and `eth_signTransaction` with an RLP-encoded signed
//! transaction ready for `send_raw_transaction`.

use alloy_primitives::{Address, Bytes};
use alloy_rpc_types::eth::TransactionRequest;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("signer-proxy unreachable: {0}")]
    Http(#[from] reqwest::Error),

    #[error("signer-proxy returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("signer-proxy rejected {method}: {message} (code {code})")]
    Rpc {
        method: &'static str,
        code: i64,
        message: String,
    },

    #[error("signer-proxy returned malformed transaction: {0}")]
    Malformed(String),

    #[error("signer-proxy account is {expected}, refusing to sign for {requested}")]
    AccountMismatch { expected: Address, requested: Address },
}

/// Signs through a signer-proxy on behalf of one account.
///
/// Clones share the HTTP client and the request id counter.
#[derive(Debug, Clone)]
pub struct RemoteSigner {
    http: reqwest::Client,
    endpoint: String,
    account: Address,
    chain_id: u64,
    request_id: Arc<AtomicU64>,
}

impl RemoteSigner {
    pub fn new(endpoint: impl Into<String>, account: Address, chain_id: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            account,
            chain_id,
            request_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub const fn address(&self) -> Address {
        self.account
    }

    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Accounts the proxy will currently sign for. Empty when locked.
    pub async fn accounts(&self) -> Result<Vec<Address>, ProxyError> {
        self.request("eth_accounts", [(); 0]).await
    }

    /// Sign a filled transaction for this signer's account.
    ///
    /// A request with a different `from` is refused locally.
    pub async fn sign_transaction(&self, tx: TransactionRequest) -> Result<Bytes, ProxyError> {
        if let Some(requested) = tx.from.filter(|from| *from != self.account) {
            return Err(ProxyError::AccountMismatch {
                expected: self.account,
                requested,
            });
        }

        let signed: SignedTransaction = self.request("eth_signTransaction", [tx]).await?;
        signed
            .raw
            .parse()
            .map_err(|e| ProxyError::Malformed(format!("{e}")))
    }

    async fn request<T, R>(&self, method: &'static str, params: T) -> Result<R, ProxyError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let id = self.request_id.fetch_add(1, Ordering::Relaxed);
        debug!(method, id, endpoint = %self.endpoint, "signer-proxy request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&RpcRequest {
                jsonrpc: "2.0",
                id,
                method,
                params,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyError::Status { status, body });
        }

        match response.json::<RpcReply<R>>().await? {
            RpcReply::Result { result } => Ok(result),
            RpcReply::Error { error } => Err(ProxyError::Rpc {
                method,
                code: error.code,
                message: error.message,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct RpcRequest<T> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: T,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RpcReply<R> {
    Result { result: R },
    Error { error: RpcFault },
}

#[derive(Debug, Deserialize)]
struct RpcFault {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct SignedTransaction {
    raw: String,
}
