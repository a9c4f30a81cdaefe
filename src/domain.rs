//! Core domain types: transfer records, commission arithmetic, and status transitions.

use chrono::{DateTime, Utc};
use derive_more::{Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Newtype wrapper for transfer identifiers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    From,
    Into,
    Display,
)]
pub struct TransferId(u64);

/// Newtype wrapper for client identifiers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    From,
    Into,
    Display,
)]
pub struct ClientId(u32);

/// Newtype wrapper for external bank account identifiers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    From,
    Into,
    Display,
)]
pub struct AccountId(u32);

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Transfer amount must be positive, got {0}")]
    InvalidAmount(Decimal),
    #[error("Commission rate must not be negative, got {0}")]
    InvalidRate(Decimal),
    #[error("Illegal status transition: {from} -> {to}")]
    InvalidTransition {
        from: TransferStatus,
        to: TransferStatus,
    },
}

/// Direction of a transfer relative to the operator's managed accounts.
/// Only outgoing transfers carry a commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    #[display("incoming")]
    Incoming,
    #[display("outgoing")]
    Outgoing,
}

/// Transfer lifecycle state. `Pending` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    #[display("pending")]
    Pending,
    #[display("completed")]
    Completed,
    #[display("failed")]
    Failed,
}

impl TransferStatus {
    /// Explicit transition table: pending may complete or fail, both terminal.
    /// Every other request (including pending -> pending) is rejected.
    pub fn transition(self, to: TransferStatus) -> Result<TransferStatus, DomainError> {
        match (self, to) {
            (TransferStatus::Pending, TransferStatus::Completed)
            | (TransferStatus::Pending, TransferStatus::Failed) => Ok(to),
            (from, to) => Err(DomainError::InvalidTransition { from, to }),
        }
    }
}

/// The three monetary components of a transfer.
/// Invariant: gross = net + commission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionSplit {
    pub net: Decimal,
    pub gross: Decimal,
    pub commission: Decimal,
}

/// Splits a submitted amount into net, gross, and commission.
///
/// For outgoing transfers the submitted amount is the net the beneficiary
/// receives; the gross actually debited is `amount * (1 + rate / 100)` and
/// the commission is the difference. Incoming transfers cannot carry a
/// commission, so the rate input is ignored entirely and all three
/// components collapse to the submitted amount.
pub fn split_commission(
    amount: Decimal,
    transfer_type: TransferType,
    rate: Decimal,
) -> Result<CommissionSplit, DomainError> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::InvalidAmount(amount));
    }
    match transfer_type {
        TransferType::Incoming => Ok(CommissionSplit {
            net: amount,
            gross: amount,
            commission: Decimal::ZERO,
        }),
        TransferType::Outgoing => {
            if rate < Decimal::ZERO {
                return Err(DomainError::InvalidRate(rate));
            }
            let gross = amount * (Decimal::ONE + rate / Decimal::ONE_HUNDRED);
            Ok(CommissionSplit {
                net: amount,
                gross,
                commission: gross - amount,
            })
        }
    }
}

/// A fully derived ledger entry. `amount` is the gross value moved;
/// `net_amount` and `commission_amount` are fixed at creation and never
/// recomputed, not even on a status transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRecord {
    pub id: TransferId,
    pub client_id: ClientId,
    pub debit_account_id: AccountId,
    pub credit_account_id: AccountId,
    pub transfer_type: TransferType,
    pub amount: Decimal,
    pub commission_percentage: Decimal,
    pub commission_amount: Decimal,
    pub net_amount: Decimal,
    /// Incoming transfer whose balance this outgoing transfer draws down.
    pub parent_transfer_id: Option<TransferId>,
    pub note: Option<String>,
    pub status: TransferStatus,
    /// Ledger date used for all period filtering, distinct from any
    /// system-recorded timestamp the persistence layer may keep.
    pub created_at: DateTime<Utc>,
}

/// Raw creation request as submitted by a caller. `amount` is the net amount
/// for outgoing transfers and the received amount for incoming ones; the
/// ledger derives the rest. The caller picks the initial status.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSubmission {
    pub id: TransferId,
    pub client_id: ClientId,
    pub debit_account_id: AccountId,
    pub credit_account_id: AccountId,
    pub transfer_type: TransferType,
    pub amount: Decimal,
    pub commission_percentage: Decimal,
    pub parent_transfer_id: Option<TransferId>,
    pub note: Option<String>,
    pub status: TransferStatus,
    pub created_at: DateTime<Utc>,
}

/// Patch for the editable fields of an existing transfer. Amount and
/// commission fields are immutable after creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferAmendment {
    pub created_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}
