//! Stateful transfer ledger.
//!
//! Holds the working set of transfer records, derives commission splits on
//! creation, maintains the parent-to-children linkage index, and applies
//! status transitions. All operations are synchronous transformations over
//! data already in memory; persistence and concurrency control belong to
//! the caller.

use rust_decimal::Decimal;
use tracing::warn;

use crate::{
    domain::{
        TransferAmendment, TransferId, TransferRecord, TransferStatus, TransferSubmission,
        TransferType, split_commission,
    },
    engine::errors::LedgerError,
};
pub use types::{ChildIndex, TransferBook};

pub mod errors;
mod types;

#[derive(Debug, Default)]
pub struct TransferLedger {
    book: TransferBook,
    /// Only outgoing transfers are ever linked - they are the only kind
    /// that can draw down a parent's balance.
    children: ChildIndex,
}

impl TransferLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transfers(&self) -> &TransferBook {
        &self.book
    }

    pub fn get(&self, id: TransferId) -> Option<&TransferRecord> {
        self.book.get(&id)
    }

    /// Validates a submission, derives the commission split, and stores the
    /// fully populated record. Either the whole record is stored or nothing
    /// is; a rejected submission leaves the ledger untouched.
    pub fn create(
        &mut self,
        submission: TransferSubmission,
    ) -> Result<&TransferRecord, LedgerError> {
        if self.book.contains(&submission.id) {
            return Err(LedgerError::DuplicateTransfer(submission.id));
        }
        if submission.debit_account_id == submission.credit_account_id {
            return Err(LedgerError::SameAccount(submission.debit_account_id));
        }
        if let Some(parent_id) = submission.parent_transfer_id {
            if submission.transfer_type == TransferType::Incoming {
                return Err(LedgerError::ParentOnIncoming);
            }
            let parent = self
                .book
                .get(&parent_id)
                .ok_or(LedgerError::ParentNotFound(parent_id))?;
            if parent.transfer_type != TransferType::Incoming {
                return Err(LedgerError::ParentNotIncoming(parent_id));
            }
        }

        let split = split_commission(
            submission.amount,
            submission.transfer_type,
            submission.commission_percentage,
        )?;
        // An incoming transfer cannot carry a commission; its submitted rate
        // is discarded rather than rejected.
        let commission_percentage = match submission.transfer_type {
            TransferType::Incoming => Decimal::ZERO,
            TransferType::Outgoing => submission.commission_percentage,
        };

        let record = TransferRecord {
            id: submission.id,
            client_id: submission.client_id,
            debit_account_id: submission.debit_account_id,
            credit_account_id: submission.credit_account_id,
            transfer_type: submission.transfer_type,
            amount: split.gross,
            commission_percentage,
            commission_amount: split.commission,
            net_amount: split.net,
            parent_transfer_id: submission.parent_transfer_id,
            note: submission.note,
            status: submission.status,
            created_at: submission.created_at,
        };

        if let Some(parent_id) = record.parent_transfer_id {
            self.children.link(parent_id, record.id);
        }
        Ok(self.book.insert(record))
    }

    /// Applies a status transition. The record is left unchanged when the
    /// transition is illegal, and amounts are never recomputed.
    pub fn set_status(
        &mut self,
        id: TransferId,
        to: TransferStatus,
    ) -> Result<&TransferRecord, LedgerError> {
        let record = self
            .book
            .get_mut(&id)
            .ok_or(LedgerError::TransferNotFound(id))?;
        record.status = record.status.transition(to)?;
        Ok(record)
    }

    /// Updates the editable fields (`created_at`, `note`) only.
    pub fn amend(
        &mut self,
        id: TransferId,
        amendment: TransferAmendment,
    ) -> Result<&TransferRecord, LedgerError> {
        let record = self
            .book
            .get_mut(&id)
            .ok_or(LedgerError::TransferNotFound(id))?;
        if let Some(created_at) = amendment.created_at {
            record.created_at = created_at;
        }
        if let Some(note) = amendment.note {
            record.note = Some(note);
        }
        Ok(record)
    }

    /// Hard removal. The ledger does not enforce referential integrity for
    /// surviving children of a deleted parent; a later remaining-balance
    /// query on the deleted id reports `TransferNotFound`.
    pub fn delete(&mut self, id: TransferId) -> Result<TransferRecord, LedgerError> {
        let record = self
            .book
            .remove(&id)
            .ok_or(LedgerError::TransferNotFound(id))?;
        if let Some(parent_id) = record.parent_transfer_id {
            self.children.unlink(parent_id, record.id);
        }
        Ok(record)
    }

    /// How much of an incoming transfer's net amount is still available to
    /// link outgoing transfers against: the parent's net minus each child's
    /// net plus commission. Children count regardless of their own status -
    /// a pending outgoing transfer still provisionally encumbers the parent.
    ///
    /// The result is signed; the ledger reports an over-drawn parent but
    /// never forbids one. Callers decide whether a negative balance blocks
    /// new linked transfers.
    pub fn remaining_balance(&self, parent_id: TransferId) -> Result<Decimal, LedgerError> {
        let parent = self
            .book
            .get(&parent_id)
            .ok_or(LedgerError::TransferNotFound(parent_id))?;
        if parent.transfer_type != TransferType::Incoming {
            return Err(LedgerError::ParentNotIncoming(parent_id));
        }

        let drawn: Decimal = self
            .children
            .children(&parent_id)
            .filter_map(|child_id| self.book.get(child_id))
            .filter(|child| child.transfer_type == TransferType::Outgoing)
            .map(|child| child.net_amount + child.commission_amount)
            .sum();

        Ok(parent.net_amount - drawn)
    }

    /// Bulk-loads submissions, logging and skipping any the ledger rejects.
    pub fn ingest(&mut self, submissions: impl Iterator<Item = TransferSubmission>) {
        for submission in submissions {
            let id = submission.id;
            if let Err(e) = self.create(submission) {
                warn!("Skipping transfer {id}: {e}");
            }
        }
    }
}
