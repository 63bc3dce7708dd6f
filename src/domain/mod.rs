//! Domain layer: ledger value types and the ports the engine talks through.

pub mod account;
pub mod ports;
pub mod transfer;
