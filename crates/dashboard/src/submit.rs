//! Burn and cashback forms.
//!
//! Each form moves `Idle → Submitting → Confirmed | Failed → Idle`. A form
//! that is `Submitting` refuses another submission.

use crate::DashboardError;
use alloy_primitives::TxHash;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Confirmed(TxHash),
    Failed(String),
}

impl FormPhase {
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Enter `Submitting`. Any settled phase passes through `Idle` first.
    pub fn begin(&mut self) -> Result<(), DashboardError> {
        if self.is_submitting() {
            return Err(DashboardError::SubmissionInFlight);
        }
        self.acknowledge();
        *self = Self::Submitting;
        Ok(())
    }

    pub fn confirm(&mut self, tx_hash: TxHash) {
        *self = Self::Confirmed(tx_hash);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Failed(message.into());
    }

    /// Return a settled form to `Idle`. No effect while submitting.
    pub fn acknowledge(&mut self) {
        if !self.is_submitting() {
            *self = Self::Idle;
        }
    }
}

/// Burn form input.
#[derive(Debug, Clone, Default)]
pub struct BurnForm {
    pub amount: String,
    pub phase: FormPhase,
}

impl BurnForm {
    /// Whether the required input is present.
    pub fn is_complete(&self) -> bool {
        !self.amount.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.amount.clear();
    }
}

/// Cashback form input.
#[derive(Debug, Clone, Default)]
pub struct CashbackForm {
    pub address: String,
    pub amount: String,
    pub phase: FormPhase,
}

impl CashbackForm {
    /// Whether the required inputs are present.
    pub fn is_complete(&self) -> bool {
        !self.address.trim().is_empty() && !self.amount.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.address.clear();
        self.amount.clear();
    }
}
