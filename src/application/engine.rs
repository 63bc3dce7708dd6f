use crate::config::LedgerConfig;
use crate::domain::account::{Account, AccountId, Amount};
use crate::domain::ports::{AccountHandle, AccountStoreBox, NotifierBox};
use crate::domain::transfer::{TransferReceipt, TransferRequest};
use crate::error::{LedgerError, NotificationError, Result};

/// The entry point for account creation, lookup and transfers.
///
/// `TransferEngine` owns the account store and the notification hook. It is
/// `Send + Sync`; share it behind an `Arc` to serve concurrent callers.
///
/// Transfers lock both accounts in ascending id order, so two transfers over
/// the same pair in opposite directions can never wait on each other in a
/// cycle.
pub struct TransferEngine {
    account_store: AccountStoreBox,
    notifier: NotifierBox,
    config: LedgerConfig,
}

impl TransferEngine {
    /// Creates a new `TransferEngine` with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `account_store` - The store holding the accounts.
    /// * `notifier` - The hook told about every committed debit and credit.
    pub fn new(account_store: AccountStoreBox, notifier: NotifierBox) -> Self {
        Self::with_config(account_store, notifier, LedgerConfig::default())
    }

    /// Creates a new `TransferEngine` with an explicit configuration.
    pub fn with_config(
        account_store: AccountStoreBox,
        notifier: NotifierBox,
        config: LedgerConfig,
    ) -> Self {
        Self {
            account_store,
            notifier,
            config,
        }
    }

    /// Opens a new account, failing with `DuplicateAccount` if the id is taken.
    pub async fn create_account(&self, account: Account) -> Result<()> {
        tracing::info!(account = %account.id, balance = %account.balance, "creating account");
        self.account_store.create(account).await
    }

    /// Returns a snapshot of the account, or `None` if it does not exist.
    pub async fn get_account(&self, id: &AccountId) -> Result<Option<Account>> {
        tracing::debug!(account = %id, "retrieving account");
        self.account_store.get(id).await
    }

    /// Snapshots of all accounts, ordered by id.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        self.account_store.all_accounts().await
    }

    /// Moves funds between two accounts.
    ///
    /// Not idempotent: submitting the same request twice transfers twice.
    /// Notification failures are logged and never turn a committed transfer
    /// into an error.
    pub async fn transfer(&self, request: TransferRequest) -> Result<TransferReceipt> {
        tracing::debug!(?request, "validating transfer request");
        let amount = Amount::new(request.amount_to_transfer)?;
        let from = self.resolve(&request.account_from_id).await?;
        let to = self.resolve(&request.account_to_id).await?;

        // Advisory only; re-checked once both locks are held.
        let current = *from.lock().await;
        if let Err(e) = current.debit(&request.account_from_id, amount) {
            tracing::warn!(account = %request.account_from_id, "insufficient balance to transfer");
            return Err(e);
        }

        let receipt = if request.is_self_transfer() {
            self.commit_self_transfer(&request.account_from_id, &from, amount)
                .await?
        } else {
            self.commit_transfer(
                &request.account_from_id,
                &request.account_to_id,
                &from,
                &to,
                amount,
            )
            .await?
        };

        tracing::info!(
            from = %receipt.from,
            to = %receipt.to,
            amount = %receipt.amount,
            "funds transferred"
        );

        self.notify(&receipt.from, &receipt.debit_message()).await;
        self.notify(&receipt.to, &receipt.credit_message()).await;

        Ok(receipt)
    }

    async fn resolve(&self, id: &AccountId) -> Result<AccountHandle> {
        self.account_store.handle(id).await?.ok_or_else(|| {
            tracing::warn!(account = %id, "account does not exist");
            LedgerError::InvalidAccount(id.clone())
        })
    }

    /// Debits `from` and credits `to` while holding both balance locks.
    ///
    /// Both new balances are computed before either is written, so a failed
    /// credit leaves the debit unapplied.
    async fn commit_transfer(
        &self,
        from_id: &AccountId,
        to_id: &AccountId,
        from: &AccountHandle,
        to: &AccountHandle,
        amount: Amount,
    ) -> Result<TransferReceipt> {
        let from_first = from_id < to_id;
        let (first, second) = if from_first { (from, to) } else { (to, from) };

        let mut first_guard = first.lock().await;
        let mut second_guard = second.lock().await;
        let (from_balance, to_balance) = if from_first {
            (&mut *first_guard, &mut *second_guard)
        } else {
            (&mut *second_guard, &mut *first_guard)
        };

        tracing::debug!(
            from = %from_id,
            from_balance = %from_balance,
            to = %to_id,
            to_balance = %to_balance,
            "balances before transfer"
        );

        let debited = from_balance.debit(from_id, amount)?;
        let credited = to_balance.credit(to_id, amount)?;
        *from_balance = debited;
        *to_balance = credited;

        Ok(TransferReceipt::new(
            from_id.clone(),
            to_id.clone(),
            amount,
            debited,
            credited,
        ))
    }

    /// A self-transfer takes the single lock once and leaves the balance as is.
    async fn commit_self_transfer(
        &self,
        id: &AccountId,
        account: &AccountHandle,
        amount: Amount,
    ) -> Result<TransferReceipt> {
        let guard = account.lock().await;
        let balance = *guard;
        balance.debit(id, amount)?;
        Ok(TransferReceipt::new(
            id.clone(),
            id.clone(),
            amount,
            balance,
            balance,
        ))
    }

    async fn notify(&self, account_id: &AccountId, message: &str) {
        let timeout = self.config.notify_timeout;
        let outcome =
            match tokio::time::timeout(timeout, self.notifier.notify(account_id, message)).await {
                Ok(result) => result,
                Err(_) => Err(NotificationError::Timeout(timeout)),
            };

        if let Err(e) = outcome {
            tracing::warn!(account = %account_id, error = %e, "notification not delivered");
        }
    }
}
