use crate::domain::account::{Account, AccountId};
use crate::domain::ports::{AccountHandle, AccountStore};
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// A thread-safe in-memory account table.
///
/// The map is guarded by a `RwLock` that is only held long enough to insert or
/// clone a handle. Balances sit behind their own `Mutex`, so transfers on
/// disjoint accounts never contend on the map.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, AccountHandle>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }

    async fn handles(&self) -> Vec<(AccountId, AccountHandle)> {
        let accounts = self.accounts.read().await;
        accounts
            .iter()
            .map(|(id, handle)| (id.clone(), Arc::clone(handle)))
            .collect()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.id) {
            Entry::Occupied(entry) => Err(LedgerError::DuplicateAccount(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(Mutex::new(account.balance)));
                Ok(())
            }
        }
    }

    async fn get(&self, id: &AccountId) -> Result<Option<Account>> {
        // Release the map before waiting on the balance.
        let Some(handle) = self.handle(id).await? else {
            return Ok(None);
        };
        let balance = *handle.lock().await;
        Ok(Some(Account::new(id.clone(), balance)))
    }

    async fn handle(&self, id: &AccountId) -> Result<Option<AccountHandle>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id).map(Arc::clone))
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        let mut handles = self.handles().await;
        handles.sort_by(|(a, _), (b, _)| a.cmp(b));

        // Hold every balance lock at once, taken in id order like a transfer,
        // so no transfer can commit halfway through the snapshot.
        let mut guards = Vec::with_capacity(handles.len());
        for (_, handle) in &handles {
            guards.push(handle.lock().await);
        }
        let snapshots = handles
            .iter()
            .zip(&guards)
            .map(|((id, _), balance)| Account::new(id.clone(), **balance))
            .collect();
        Ok(snapshots)
    }

    async fn clear(&self) -> Result<()> {
        self.accounts.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Balance;
    use rust_decimal_macros::dec;

    fn account(id: &str, balance: rust_decimal::Decimal) -> Account {
        Account::new(
            AccountId::new(id).unwrap(),
            Balance::new(balance).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_in_memory_account_store() {
        let store = InMemoryAccountStore::new();
        let acc = account("Id-123", dec!(1000));

        store.create(acc.clone()).await.unwrap();
        let retrieved = store.get(&acc.id).await.unwrap().unwrap();
        assert_eq!(retrieved, acc);

        let missing = AccountId::new("Id-999").unwrap();
        assert!(store.get(&missing).await.unwrap().is_none());
        assert!(store.handle(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let store = InMemoryAccountStore::new();
        store.create(account("A", dec!(100))).await.unwrap();

        let result = store.create(account("A", dec!(5))).await;
        match result {
            Err(LedgerError::DuplicateAccount(id)) => assert_eq!(id.as_str(), "A"),
            other => panic!("expected DuplicateAccount, got {other:?}"),
        }

        // The original account is untouched.
        let retrieved = store.get(&AccountId::new("A").unwrap()).await.unwrap().unwrap();
        assert_eq!(retrieved.balance.value(), dec!(100));
    }

    #[tokio::test]
    async fn test_handle_shares_balance_with_snapshots() {
        let store = InMemoryAccountStore::new();
        let acc = account("A", dec!(10));
        store.create(acc.clone()).await.unwrap();

        let handle = store.handle(&acc.id).await.unwrap().unwrap();
        *handle.lock().await = Balance::new(dec!(7)).unwrap();

        let retrieved = store.get(&acc.id).await.unwrap().unwrap();
        assert_eq!(retrieved.balance.value(), dec!(7));
    }

    #[tokio::test]
    async fn test_all_accounts_sorted_by_id() {
        let store = InMemoryAccountStore::new();
        store.create(account("b", dec!(2))).await.unwrap();
        store.create(account("a", dec!(1))).await.unwrap();
        store.create(account("c", dec!(3))).await.unwrap();

        let all = store.all_accounts().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_all_accounts_waits_for_held_balance() {
        let store = InMemoryAccountStore::new();
        store.create(account("a", dec!(1))).await.unwrap();
        store.create(account("b", dec!(2))).await.unwrap();

        let handle = store.handle(&AccountId::new("b").unwrap()).await.unwrap().unwrap();
        let guard = handle.lock().await;

        let blocked = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            store.all_accounts(),
        )
        .await;
        assert!(blocked.is_err());

        drop(guard);
        let all = store.all_accounts().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryAccountStore::new();
        store.create(account("a", dec!(1))).await.unwrap();
        store.clear().await.unwrap();

        assert!(store.all_accounts().await.unwrap().is_empty());
        // The id can be reused after a reset.
        store.create(account("a", dec!(1))).await.unwrap();
    }
}
