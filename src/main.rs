use std::fs::File;

use chrono::NaiveDate;
use clap::Parser;

use transfer_ledger::engine::TransferLedger;
use transfer_ledger::output;
use transfer_ledger::parsing;
use transfer_ledger::window::DateWindow;

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    if let Some(log_level) = args.log_level {
        tracing_subscriber::fmt().with_max_level(log_level).init();
    }

    let file = File::open(&args.input_file)?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut ledger = TransferLedger::new();
    ledger.ingest(parsing::deserialize_csv(&mut rdr));

    let window = DateWindow::new(args.start, args.end);
    output::print_client_balances(&ledger, &window, std::io::stdout())?;
    Ok(())
}

/// Loads a transfer snapshot from CSV and prints per-client balances,
/// optionally restricted to an inclusive date window.
#[derive(Parser)]
struct Arguments {
    input_file: String,
    /// First ledger day to include (YYYY-MM-DD).
    #[arg(long)]
    start: Option<NaiveDate>,
    /// Last ledger day to include, whole day (YYYY-MM-DD).
    #[arg(long)]
    end: Option<NaiveDate>,
    #[arg(long)]
    log_level: Option<tracing::Level>,
}
