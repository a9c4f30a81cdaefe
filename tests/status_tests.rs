mod common;

use common::{at, incoming, outgoing, run};
use rust_decimal::dec;
use transfer_ledger::domain::TransferStatus::{Completed, Failed, Pending};
use transfer_ledger::domain::{DomainError, TransferStatus};
use transfer_ledger::engine::errors::LedgerError;

#[test]
fn pending_transfer_can_complete() {
    let mut ledger = run(vec![incoming(1, 1, dec!(500), Pending, at(2026, 1, 5))]);

    let record = ledger.set_status(1.into(), Completed).unwrap();
    assert_eq!(record.status, Completed);
}

#[test]
fn pending_transfer_can_fail() {
    let mut ledger = run(vec![incoming(1, 1, dec!(500), Pending, at(2026, 1, 5))]);

    let record = ledger.set_status(1.into(), Failed).unwrap();
    assert_eq!(record.status, Failed);
}

/// Completed and failed are terminal: every further transition attempt is
/// rejected and the record is left untouched.
#[test]
fn terminal_states_reject_all_transitions() {
    for terminal in [Completed, Failed] {
        for requested in [Pending, Completed, Failed] {
            let mut ledger = run(vec![incoming(1, 1, dec!(500), terminal, at(2026, 1, 5))]);
            let before = ledger.get(1.into()).unwrap().clone();

            let err = ledger.set_status(1.into(), requested).unwrap_err();
            assert_eq!(
                err,
                LedgerError::Domain(DomainError::InvalidTransition {
                    from: terminal,
                    to: requested,
                })
            );
            assert_eq!(ledger.get(1.into()).unwrap(), &before);
        }
    }
}

/// Even the no-op pending -> pending is not in the transition table.
#[test]
fn pending_to_pending_is_rejected() {
    let mut ledger = run(vec![incoming(1, 1, dec!(500), Pending, at(2026, 1, 5))]);

    let err = ledger.set_status(1.into(), Pending).unwrap_err();
    assert_eq!(
        err,
        LedgerError::Domain(DomainError::InvalidTransition {
            from: Pending,
            to: Pending,
        })
    );
}

/// Completing a transfer does not recompute its amounts; the commission
/// split was fixed at creation.
#[test]
fn transition_does_not_touch_amounts() {
    let mut ledger = run(vec![outgoing(
        1,
        1,
        dec!(400),
        dec!(5),
        None,
        Pending,
        at(2026, 1, 10),
    )]);

    ledger.set_status(1.into(), Completed).unwrap();

    let record = ledger.get(1.into()).unwrap();
    assert_eq!(record.net_amount, dec!(400));
    assert_eq!(record.commission_amount, dec!(20));
    assert_eq!(record.amount, dec!(420));
}

#[test]
fn transition_on_unknown_transfer_is_an_error() {
    let mut ledger = run(vec![]);

    assert_eq!(
        ledger.set_status(9.into(), TransferStatus::Completed).unwrap_err(),
        LedgerError::TransferNotFound(9.into())
    );
}
