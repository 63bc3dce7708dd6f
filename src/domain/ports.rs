use super::account::{Account, AccountId, Balance};
use crate::error::{NotificationError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Exclusive-access scope for a single account's balance.
pub type AccountHandle = Arc<Mutex<Balance>>;

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Inserts a new account, failing with `DuplicateAccount` if the id is taken.
    async fn create(&self, account: Account) -> Result<()>;
    /// Returns a snapshot of the account, reading its balance under its lock.
    async fn get(&self, id: &AccountId) -> Result<Option<Account>>;
    /// Returns the lock guarding the account's balance.
    async fn handle(&self, id: &AccountId) -> Result<Option<AccountHandle>>;
    /// Snapshots of every account, ordered by id, taken as one consistent cut.
    async fn all_accounts(&self) -> Result<Vec<Account>>;
    /// Drops every account. Must not run alongside transfers: a transfer that
    /// already resolved its handles would commit into detached balances.
    async fn clear(&self) -> Result<()>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        account_id: &AccountId,
        message: &str,
    ) -> std::result::Result<(), NotificationError>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type NotifierBox = Box<dyn Notifier>;
