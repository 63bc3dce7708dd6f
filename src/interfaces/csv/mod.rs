//! Batch CSV front end: reads ledger commands, writes account snapshots.

pub mod account_writer;
pub mod command_reader;
