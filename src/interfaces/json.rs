use crate::domain::account::Account;
use crate::error::Result;
use std::io::Write;

/// Writes account snapshots as a pretty-printed JSON array.
pub fn write_accounts<W: Write>(mut sink: W, accounts: &[Account]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, accounts)?;
    writeln!(sink)?;
    sink.flush()?;
    Ok(())
}
