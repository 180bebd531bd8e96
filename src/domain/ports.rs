use super::account::Account;
use crate::error::Result;
use async_trait::async_trait;

/// Storage capability for debtor accounts.
///
/// `get` signals an unknown account with `Ok(None)`, never an error. `update`
/// persists the full record and is assumed to enforce single-writer-per-account
/// semantics; the payment service does no locking of its own.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn get(&self, account_number: &str) -> Result<Option<Account>>;
    async fn update(&self, account: Account) -> Result<()>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
