//! Serializes windowed per-client balances to CSV.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    aggregate::summarize,
    domain::ClientId,
    engine::TransferLedger,
    window::DateWindow,
};

/// One output row per client: the four balance components over the window.
#[derive(Debug, Serialize)]
struct BalanceRow {
    client: ClientId,
    total_incoming: Decimal,
    total_outgoing: Decimal,
    total_commissions: Decimal,
    net_balance: Decimal,
}

pub fn print_client_balances(
    ledger: &TransferLedger,
    window: &DateWindow,
    writer: impl std::io::Write,
) -> anyhow::Result<()> {
    let mut clients: Vec<ClientId> = ledger
        .transfers()
        .records()
        .map(|t| t.client_id)
        .collect();
    clients.sort_unstable();
    clients.dedup();

    let mut wtr = csv::Writer::from_writer(writer);
    for client in clients {
        let summary = summarize(
            ledger
                .transfers()
                .records()
                .filter(|t| t.client_id == client),
            window,
        );
        wtr.serialize(BalanceRow {
            client,
            total_incoming: summary.total_incoming,
            total_outgoing: summary.total_outgoing,
            total_commissions: summary.total_commissions,
            net_balance: summary.net_balance(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
