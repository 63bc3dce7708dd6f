use crate::domain::account::Account;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct AccountRecord<'a> {
    account: &'a str,
    balance: Decimal,
}

/// Writes account snapshots as CSV rows `account,balance`.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_accounts(&mut self, accounts: Vec<Account>) -> Result<()> {
        for account in &accounts {
            self.writer.serialize(AccountRecord {
                account: account.id.as_str(),
                balance: account.balance.value().normalize(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
