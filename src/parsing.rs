//! CSV deserialization.
//!
//! Each row is a full transfer submission: serde reads it into a flat
//! `CsvTransfer`, which converts into the domain `TransferSubmission`.
//! Malformed rows are logged and skipped.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{
    AccountId, ClientId, TransferId, TransferStatus, TransferSubmission, TransferType,
};

/// Flat representation of a single CSV row. `commission_rate`, `parent`, and
/// `note` are optional: incoming rows carry no rate and free-standing
/// outgoing rows carry no parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CsvTransfer {
    id: TransferId,
    client: ClientId,
    debit_account: AccountId,
    credit_account: AccountId,
    r#type: TransferType,
    amount: Decimal,
    commission_rate: Option<Decimal>,
    parent: Option<TransferId>,
    status: TransferStatus,
    created_at: DateTime<Utc>,
    note: Option<String>,
}

impl From<CsvTransfer> for TransferSubmission {
    fn from(row: CsvTransfer) -> Self {
        Self {
            id: row.id,
            client_id: row.client,
            debit_account_id: row.debit_account,
            credit_account_id: row.credit_account,
            transfer_type: row.r#type,
            amount: row.amount,
            commission_percentage: row.commission_rate.unwrap_or(Decimal::ZERO),
            parent_transfer_id: row.parent,
            note: row.note,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// Returns an iterator that lazily deserializes CSV rows into transfer
/// submissions, skipping any rows that fail to parse.
pub fn deserialize_csv<D: std::io::Read>(
    reader: &mut csv::Reader<D>,
) -> impl Iterator<Item = TransferSubmission> {
    reader
        .deserialize::<CsvTransfer>()
        .filter_map(|result| match result {
            Ok(row) => Some(TransferSubmission::from(row)),
            Err(e) => {
                warn!("Failed to parse transfer row: {e}");
                None
            }
        })
}
