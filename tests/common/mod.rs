use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use transfer_ledger::domain::{TransferStatus, TransferSubmission, TransferType};
use transfer_ledger::engine::TransferLedger;

#[allow(dead_code)]
pub fn run(submissions: Vec<TransferSubmission>) -> TransferLedger {
    let mut ledger = TransferLedger::new();
    ledger.ingest(submissions.into_iter());
    ledger
}

/// Midday timestamp, so tests sit well inside any day-based window.
#[allow(dead_code)]
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn incoming(
    id: u64,
    client: u32,
    amount: Decimal,
    status: TransferStatus,
    created_at: DateTime<Utc>,
) -> TransferSubmission {
    TransferSubmission {
        id: id.into(),
        client_id: client.into(),
        debit_account_id: 10.into(),
        credit_account_id: 20.into(),
        transfer_type: TransferType::Incoming,
        amount,
        commission_percentage: Decimal::ZERO,
        parent_transfer_id: None,
        note: None,
        status,
        created_at,
    }
}

/// Outgoing submission; `net` is the amount the beneficiary receives.
#[allow(dead_code)]
pub fn outgoing(
    id: u64,
    client: u32,
    net: Decimal,
    rate: Decimal,
    parent: Option<u64>,
    status: TransferStatus,
    created_at: DateTime<Utc>,
) -> TransferSubmission {
    TransferSubmission {
        id: id.into(),
        client_id: client.into(),
        debit_account_id: 30.into(),
        credit_account_id: 40.into(),
        transfer_type: TransferType::Outgoing,
        amount: net,
        commission_percentage: rate,
        parent_transfer_id: parent.map(Into::into),
        note: None,
        status,
        created_at,
    }
}
