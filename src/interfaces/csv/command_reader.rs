use crate::domain::account::{Account, AccountId, Balance};
use crate::domain::transfer::TransferRequest;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Create,
    Transfer,
}

/// One raw CSV row: `type, account, counterparty, amount`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CommandRecord {
    pub r#type: CommandType,
    pub account: String,
    pub counterparty: Option<String>,
    pub amount: Option<Decimal>,
}

/// A validated ledger command.
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    /// Open `account` with the given initial balance (zero when omitted).
    Create(Account),
    /// Move `amount` from `account` to `counterparty`.
    Transfer(TransferRequest),
}

impl TryFrom<CommandRecord> for Command {
    type Error = LedgerError;

    fn try_from(record: CommandRecord) -> Result<Self> {
        let account = AccountId::new(record.account)?;
        match record.r#type {
            CommandType::Create => {
                let balance = Balance::new(record.amount.unwrap_or(Decimal::ZERO))?;
                Ok(Command::Create(Account::new(account, balance)))
            }
            CommandType::Transfer => {
                let counterparty = record.counterparty.ok_or_else(|| {
                    LedgerError::InvalidCommand(format!("transfer from {account} has no counterparty"))
                })?;
                let amount = record.amount.ok_or_else(|| {
                    LedgerError::InvalidCommand(format!("transfer from {account} has no amount"))
                })?;
                Ok(Command::Transfer(TransferRequest::new(
                    account,
                    AccountId::new(counterparty)?,
                    amount,
                )))
            }
        }
    }
}

/// Reads ledger commands from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and tolerating short rows.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads, deserializes and validates commands, one per row.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize::<CommandRecord>()
            .map(|result| result.map_err(LedgerError::from).and_then(Command::try_from))
    }
}
