//! Application layer containing the ledger orchestration.
//!
//! This module defines the `TransferEngine`, the entry point for creating,
//! reading and moving funds between accounts under concurrent callers.

pub mod engine;
