//! Reductions over transfer collections: directional totals, monthly
//! activity, status counts, and per-account commission earnings.
//!
//! Every function here is a pure fold over the records it is handed; the
//! same formulas serve the global dashboard, a single client's detail view,
//! and a single account, the only difference being the input collection.

use std::collections::{BTreeMap, HashMap};
use std::ops::Add;

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

use crate::domain::{AccountId, TransferRecord, TransferStatus, TransferType};
use crate::window::DateWindow;

/// Directional totals over completed transfers. Only completed movements are
/// real money; pending and failed ones never contribute.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalanceSummary {
    pub total_incoming: Decimal,
    pub total_outgoing: Decimal,
    pub total_commissions: Decimal,
}

impl BalanceSummary {
    pub fn net_balance(&self) -> Decimal {
        self.total_incoming - self.total_outgoing - self.total_commissions
    }
}

/// Componentwise sum, so summaries of disjoint sets combine into the
/// summary of their union.
impl Add for BalanceSummary {
    type Output = BalanceSummary;

    fn add(self, rhs: BalanceSummary) -> BalanceSummary {
        BalanceSummary {
            total_incoming: self.total_incoming + rhs.total_incoming,
            total_outgoing: self.total_outgoing + rhs.total_outgoing,
            total_commissions: self.total_commissions + rhs.total_commissions,
        }
    }
}

/// Reduces completed transfers inside the window into directional totals.
/// An empty input yields the all-zero summary.
pub fn summarize<'a>(
    transfers: impl IntoIterator<Item = &'a TransferRecord>,
    window: &DateWindow,
) -> BalanceSummary {
    transfers
        .into_iter()
        .filter(|t| t.status == TransferStatus::Completed && window.contains(t.created_at))
        .fold(BalanceSummary::default(), |mut acc, t| {
            match t.transfer_type {
                TransferType::Incoming => acc.total_incoming += t.net_amount,
                TransferType::Outgoing => {
                    acc.total_outgoing += t.net_amount;
                    acc.total_commissions += t.commission_amount;
                }
            }
            acc
        })
}

/// Calendar month of a ledger date, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl From<DateTime<Utc>> for MonthKey {
    fn from(at: DateTime<Utc>) -> Self {
        Self {
            year: at.year(),
            month: at.month(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthlyStats {
    pub incoming: Decimal,
    pub outgoing: Decimal,
    pub commissions: Decimal,
}

/// Buckets transfers by the calendar month of their ledger date. A bucket
/// exists for every month that saw any transfer, but only completed
/// transfers add to its amounts, so a month of purely pending activity
/// shows up as an all-zero bar.
pub fn monthly_activity<'a>(
    transfers: impl IntoIterator<Item = &'a TransferRecord>,
) -> BTreeMap<MonthKey, MonthlyStats> {
    let mut months: BTreeMap<MonthKey, MonthlyStats> = BTreeMap::new();
    for t in transfers {
        let stats = months.entry(MonthKey::from(t.created_at)).or_default();
        if t.status != TransferStatus::Completed {
            continue;
        }
        match t.transfer_type {
            TransferType::Incoming => stats.incoming += t.net_amount,
            TransferType::Outgoing => {
                stats.outgoing += t.net_amount;
                stats.commissions += t.commission_amount;
            }
        }
    }
    months
}

/// Record counts per lifecycle state, over every transfer handed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub completed: usize,
    pub failed: usize,
}

pub fn status_counts<'a>(transfers: impl IntoIterator<Item = &'a TransferRecord>) -> StatusCounts {
    transfers
        .into_iter()
        .fold(StatusCounts::default(), |mut acc, t| {
            match t.status {
                TransferStatus::Pending => acc.pending += 1,
                TransferStatus::Completed => acc.completed += 1,
                TransferStatus::Failed => acc.failed += 1,
            }
            acc
        })
}

/// Commission revenue attributed to one debit account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionEarnings {
    pub total: Decimal,
    pub transfer_count: usize,
    pub last_transfer_at: DateTime<Utc>,
}

/// Groups commission revenue by the debit account it was earned on.
/// Only completed outgoing transfers with a positive commission count.
pub fn commissions_by_account<'a>(
    transfers: impl IntoIterator<Item = &'a TransferRecord>,
    window: &DateWindow,
) -> HashMap<AccountId, CommissionEarnings> {
    let mut earnings: HashMap<AccountId, CommissionEarnings> = HashMap::new();
    for t in transfers {
        if t.transfer_type != TransferType::Outgoing
            || t.status != TransferStatus::Completed
            || t.commission_amount <= Decimal::ZERO
            || !window.contains(t.created_at)
        {
            continue;
        }
        earnings
            .entry(t.debit_account_id)
            .and_modify(|e| {
                e.total += t.commission_amount;
                e.transfer_count += 1;
                e.last_transfer_at = e.last_transfer_at.max(t.created_at);
            })
            .or_insert(CommissionEarnings {
                total: t.commission_amount,
                transfer_count: 1,
                last_transfer_at: t.created_at,
            });
    }
    earnings
}
