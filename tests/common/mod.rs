use std::io::Error;
use std::path::Path;

pub const ACCOUNT_HEADER: [&str; 4] = ["account", "balance", "allowed", "status"];
pub const PAYMENT_HEADER: [&str; 5] = ["creditor", "debtor", "amount", "date", "scheme"];

pub fn write_accounts_csv(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(ACCOUNT_HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_payments_csv(path: &Path, rows: &[[&str; 5]]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(PAYMENT_HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
