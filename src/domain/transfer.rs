use super::account::{AccountId, Amount, Balance};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TRANSFER_SUCCESS_MESSAGE: &str = "Funds have been transferred successfully";

/// A request to move `amount` from one account to another.
///
/// The amount is kept as a raw decimal so that the engine, not the caller,
/// decides whether it is valid.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub account_from_id: AccountId,
    pub account_to_id: AccountId,
    pub amount_to_transfer: Decimal,
}

impl TransferRequest {
    pub fn new(from: AccountId, to: AccountId, amount: Decimal) -> Self {
        Self {
            account_from_id: from,
            account_to_id: to,
            amount_to_transfer: amount,
        }
    }

    pub fn is_self_transfer(&self) -> bool {
        self.account_from_id == self.account_to_id
    }
}

/// Confirmation of a committed transfer.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct TransferReceipt {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Amount,
    /// Balance of the source account right after the commit.
    pub from_balance: Balance,
    /// Balance of the target account right after the commit.
    pub to_balance: Balance,
    pub message: &'static str,
}

impl TransferReceipt {
    pub(crate) fn new(
        from: AccountId,
        to: AccountId,
        amount: Amount,
        from_balance: Balance,
        to_balance: Balance,
    ) -> Self {
        Self {
            from,
            to,
            amount,
            from_balance,
            to_balance,
            message: TRANSFER_SUCCESS_MESSAGE,
        }
    }

    pub fn debit_message(&self) -> String {
        format!(
            "Your account has been debited with amount {}. Your updated balance is {}",
            self.amount, self.from_balance
        )
    }

    pub fn credit_message(&self) -> String {
        format!(
            "Your account has been credited with amount {}. Your updated balance is {}",
            self.amount, self.to_balance
        )
    }
}
