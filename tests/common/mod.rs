#![allow(dead_code)]

use ledger_transfer::application::engine::TransferEngine;
use ledger_transfer::domain::account::{Account, AccountId, Balance};
use ledger_transfer::domain::ports::NotifierBox;
use ledger_transfer::domain::transfer::TransferRequest;
use ledger_transfer::infrastructure::in_memory::InMemoryAccountStore;
use ledger_transfer::infrastructure::notifier::LogNotifier;
use rust_decimal::Decimal;
use std::sync::Arc;

pub fn id(s: &str) -> AccountId {
    AccountId::new(s).unwrap()
}

pub fn request(from: &str, to: &str, amount: Decimal) -> TransferRequest {
    TransferRequest::new(id(from), id(to), amount)
}

pub async fn engine_with_notifier(
    notifier: NotifierBox,
    accounts: &[(&str, Decimal)],
) -> Arc<TransferEngine> {
    let engine = TransferEngine::new(Box::new(InMemoryAccountStore::new()), notifier);
    for (acc, balance) in accounts {
        engine
            .create_account(Account::new(id(acc), Balance::new(*balance).unwrap()))
            .await
            .unwrap();
    }
    Arc::new(engine)
}

pub async fn engine_with(accounts: &[(&str, Decimal)]) -> Arc<TransferEngine> {
    engine_with_notifier(Box::new(LogNotifier::new()), accounts).await
}

pub async fn balance(engine: &TransferEngine, acc: &str) -> Decimal {
    engine
        .get_account(&id(acc))
        .await
        .unwrap()
        .unwrap()
        .balance
        .value()
}

pub async fn total_balance(engine: &TransferEngine) -> Decimal {
    engine
        .accounts()
        .await
        .unwrap()
        .iter()
        .map(|a| a.balance.value())
        .sum()
}
