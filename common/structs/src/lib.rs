#![no_std]

pub mod aliases;
pub mod fee;
pub mod ledger;
pub mod network;
pub mod settlement;
pub mod transfer;

/// Gas kept back after the last transfer for refund, fee booking and logs.
pub const SETTLEMENT_GAS_RESERVE: u64 = 2_000_000;
