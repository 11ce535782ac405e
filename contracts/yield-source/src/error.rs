//! Yield source error types

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum YieldSourceError {
    // Initialization
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Accounting
    InvalidAmount = 10,
    InsufficientShares = 11,
    /// Shares outstanding but nothing left to back them
    Insolvent = 12,
}
