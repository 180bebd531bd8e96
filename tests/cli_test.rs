use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

mod common;

#[test]
fn test_cli_happy_path_debits_account() {
    let dir = tempdir().unwrap();
    let accounts = dir.path().join("accounts.csv");
    let payments = dir.path().join("payments.csv");

    common::write_accounts_csv(
        &accounts,
        &[[
            "12345",
            "100.00",
            "bank-to-bank-transfer",
            "inbound-payments-only",
        ]],
    )
    .unwrap();
    common::write_payments_csv(
        &payments,
        &[[
            "5555",
            "12345",
            "500.00",
            "2026-08-26T00:00:00Z",
            "bank-to-bank-transfer",
        ]],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("paylane"));
    cmd.arg(&payments).arg("--accounts").arg(&accounts);

    // No balance floor for bank-to-bank: 100.00 - 500.00 = -400.00
    cmd.assert().success().stdout(predicate::str::contains(
        "12345,-400.00,bank-to-bank-transfer,inbound-payments-only",
    ));
}

#[test]
fn test_cli_rejected_payment_leaves_balance_unchanged() {
    let dir = tempdir().unwrap();
    let accounts = dir.path().join("accounts.csv");
    let payments = dir.path().join("payments.csv");

    common::write_accounts_csv(
        &accounts,
        &[["12345", "100.00", "expedited-payments", "live"]],
    )
    .unwrap();
    common::write_payments_csv(
        &payments,
        &[[
            "5555",
            "12345",
            "1000.00",
            "2026-08-26T00:00:00Z",
            "expedited-payments",
        ]],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("paylane"));
    cmd.arg(&payments).arg("--accounts").arg(&accounts);

    cmd.assert().success().stdout(predicate::str::contains(
        "12345,100.00,expedited-payments,live",
    ));
}

#[test]
fn test_cli_malformed_row_does_not_abort_run() {
    let dir = tempdir().unwrap();
    let accounts = dir.path().join("accounts.csv");
    let payments = dir.path().join("payments.csv");

    common::write_accounts_csv(
        &accounts,
        &[["12345", "100.00", "bank-to-bank-transfer", "live"]],
    )
    .unwrap();
    common::write_payments_csv(
        &payments,
        &[
            [
                "5555",
                "12345",
                "25.00",
                "2026-08-26T00:00:00Z",
                "carrier-pigeon",
            ],
            [
                "5555",
                "12345",
                "25.00",
                "2026-08-26T00:00:00Z",
                "bank-to-bank-transfer",
            ],
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("paylane"));
    cmd.arg(&payments).arg("--accounts").arg(&accounts);

    // Only the well-formed row lands: 100.00 - 25.00 = 75.00
    cmd.assert().success().stdout(predicate::str::contains(
        "12345,75.00,bank-to-bank-transfer,live",
    ));
}

#[test]
fn test_cli_unknown_debtor_reports_nothing() {
    let dir = tempdir().unwrap();
    let payments = dir.path().join("payments.csv");

    common::write_payments_csv(
        &payments,
        &[[
            "5555",
            "99999",
            "25.00",
            "2026-08-26T00:00:00Z",
            "bank-to-bank-transfer",
        ]],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("paylane"));
    cmd.arg(&payments);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("99999").not());
}
