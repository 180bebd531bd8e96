use crate::domain::account::Account;
use crate::domain::ports::AccountStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory account store.
///
/// Uses `Arc<RwLock<HashMap<String, Account>>>` to allow shared concurrent
/// access. Ideal for tests and small batches where persistence is not
/// required.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn get(&self, account_number: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(account_number).cloned())
    }

    async fn update(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.account_number.clone(), account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Balance;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_store_round_trip() {
        let store = InMemoryAccountStore::new();
        let mut account = Account::new("12345");
        account.balance = Balance::new(dec!(100.0));

        store.update(account.clone()).await.unwrap();
        let retrieved = store.get("12345").await.unwrap().unwrap();
        assert_eq!(retrieved, account);

        assert!(store.get("99999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_store_update_overwrites() {
        let store = InMemoryAccountStore::new();
        let mut account = Account::new("12345");
        account.balance = Balance::new(dec!(100.0));
        store.update(account.clone()).await.unwrap();

        account.balance = Balance::new(dec!(50.0));
        store.update(account.clone()).await.unwrap();

        let retrieved = store.get("12345").await.unwrap().unwrap();
        assert_eq!(retrieved.balance, Balance::new(dec!(50.0)));
    }
}
