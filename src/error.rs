use crate::domain::account::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Account id {0} already exists!")]
    DuplicateAccount(AccountId),
    #[error("Account with number '{0}' does not exist. Please provide valid account number.")]
    InvalidAccount(AccountId),
    #[error("Amount to be transferred should be positive, got {0}")]
    InvalidAmount(Decimal),
    #[error("You don't have sufficient balance: account {account} holds {balance}, requested {requested}")]
    InsufficientBalance {
        account: AccountId,
        balance: Decimal,
        requested: Decimal,
    },
    #[error("Account id must not be empty")]
    InvalidAccountId,
    #[error("Initial balance must not be negative, got {0}")]
    InvalidBalance(Decimal),
    #[error("Balance of account {0} would overflow")]
    BalanceOverflow(AccountId),
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Failure reported by a notification hook. Never escalates to a transfer failure.
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
    #[error("Notification timed out after {0:?}")]
    Timeout(std::time::Duration),
}
