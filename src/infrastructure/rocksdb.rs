use crate::domain::account::Account;
use crate::domain::ports::AccountStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing account records.
pub const CF_ACCOUNTS: &str = "accounts";

/// A persistent account store backed by RocksDB.
///
/// Accounts are keyed by account number and stored as JSON records in a
/// dedicated column family.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbAccountStore {
    db: Arc<DB>,
}

impl RocksDbAccountStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "accounts" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_accounts = ColumnFamilyDescriptor::new(CF_ACCOUNTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_accounts])
            .map_err(|e| PaymentError::InternalError(Box::new(e)))?;

        Ok(Self { db: Arc::new(db) })
    }

    fn accounts_cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_ACCOUNTS).ok_or_else(|| {
            PaymentError::InternalError(Box::new(std::io::Error::other(
                "Accounts column family not found",
            )))
        })
    }
}

#[async_trait]
impl AccountStore for RocksDbAccountStore {
    async fn get(&self, account_number: &str) -> Result<Option<Account>> {
        let cf = self.accounts_cf()?;
        let result = self
            .db
            .get_cf(cf, account_number.as_bytes())
            .map_err(|e| PaymentError::InternalError(Box::new(e)))?;

        match result {
            Some(bytes) => {
                let account = serde_json::from_slice(&bytes)
                    .map_err(|e| PaymentError::InternalError(Box::new(e)))?;
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }

    async fn update(&self, account: Account) -> Result<()> {
        let cf = self.accounts_cf()?;
        let value = serde_json::to_vec(&account)
            .map_err(|e| PaymentError::InternalError(Box::new(e)))?;

        self.db
            .put_cf(cf, account.account_number.as_bytes(), value)
            .map_err(|e| PaymentError::InternalError(Box::new(e)))?;

        Ok(())
    }
}
