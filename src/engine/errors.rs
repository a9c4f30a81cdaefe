use crate::domain::{AccountId, DomainError, TransferId};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("Transfer {0} already exists")]
    DuplicateTransfer(TransferId),
    #[error("Transfer {0} not found")]
    TransferNotFound(TransferId),
    #[error("Debit and credit account must differ, both are {0}")]
    SameAccount(AccountId),
    #[error("Parent transfer {0} not found")]
    ParentNotFound(TransferId),
    #[error("Parent transfer {0} is not an incoming transfer")]
    ParentNotIncoming(TransferId),
    #[error("Only outgoing transfers may draw on a parent transfer")]
    ParentOnIncoming,
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
