use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paylane::application::service::PaymentService;
use paylane::domain::ports::AccountStoreBox;
use paylane::infrastructure::in_memory::InMemoryAccountStore;
#[cfg(feature = "storage-rocksdb")]
use paylane::infrastructure::rocksdb::RocksDbAccountStore;
use paylane::interfaces::csv::accounts::{AccountReader, AccountWriter};
use paylane::interfaces::csv::payments::PaymentReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file
    payments: PathBuf,

    /// Seed accounts CSV file loaded into the store before processing
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,
}

/// Returns two handles to the same store: one for the payment service, one
/// for seeding and the final report.
#[cfg_attr(not(feature = "storage-rocksdb"), allow(unused_variables))]
fn build_stores(cli: &Cli) -> Result<(AccountStoreBox, AccountStoreBox)> {
    #[cfg(feature = "storage-rocksdb")]
    if let Some(db_path) = &cli.db_path {
        let store = RocksDbAccountStore::open(db_path).into_diagnostic()?;
        return Ok((Box::new(store.clone()), Box::new(store)));
    }

    let store = InMemoryAccountStore::new();
    Ok((Box::new(store.clone()), Box::new(store)))
}

fn note_account(seen: &mut Vec<String>, account_number: &str) {
    if !seen.iter().any(|n| n == account_number) {
        seen.push(account_number.to_string());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let (service_store, report_store) = build_stores(&cli)?;

    // Account numbers to report on, in first-seen order.
    let mut seen: Vec<String> = Vec::new();

    if let Some(path) = &cli.accounts {
        let file = File::open(path).into_diagnostic()?;
        for account in AccountReader::new(file).accounts() {
            let account = account.into_diagnostic()?;
            note_account(&mut seen, &account.account_number);
            report_store.update(account).await.into_diagnostic()?;
        }
    }

    let service = PaymentService::new(service_store);

    let file = File::open(&cli.payments).into_diagnostic()?;
    for (row, request) in PaymentReader::new(file).requests().enumerate() {
        match request {
            Ok(request) => {
                note_account(&mut seen, &request.debtor_account_number);
                match service.make_payment(Some(request)).await {
                    Ok(result) if result.success => {}
                    Ok(_) => warn!(row, "payment rejected"),
                    Err(e) => warn!(row, error = %e, "payment failed"),
                }
            }
            Err(e) => warn!(row, error = %e, "skipping malformed payment row"),
        }
    }

    // Final state of every account touched, fetched through the same port
    // the service uses.
    let mut accounts = Vec::with_capacity(seen.len());
    for account_number in &seen {
        if let Some(account) = report_store.get(account_number).await.into_diagnostic()? {
            accounts.push(account);
        }
    }

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(accounts).into_diagnostic()?;

    Ok(())
}
