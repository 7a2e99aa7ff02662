use thiserror::Error;

/// Failures surfaced to the dashboard user.
///
/// None of these are retried. Each ends the operation that raised it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("No wallet detected. Configure a signer proxy or a private key.")]
    WalletUnavailable,

    #[error("Missing CET_CONTRACT_ADDRESS. Set it before interacting with the CET contract.")]
    MissingContractAddress,

    #[error("No account connected")]
    NotConnected,

    #[error("Connect with the owner wallet to unlock cashback minting.")]
    NotOwner,

    #[error("{0}")]
    InvalidInput(String),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// Ledger read failed; the last snapshot is kept.
    #[error("{0}")]
    Read(String),

    /// Transaction was rejected, reverted or could not be signed.
    #[error("{0}")]
    Write(String),
}

impl From<client::ClientError> for DashboardError {
    fn from(err: client::ClientError) -> Self {
        match err {
            client::ClientError::NoWallet => Self::WalletUnavailable,
            other => Self::Read(other.to_string()),
        }
    }
}
