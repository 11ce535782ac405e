//! Yield source types

use soroban_sdk::{contracttype, Address};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Config,
    /// Total shares in circulation
    TotalShares,
    /// Share balance per owner
    Shares(Address),
}

// ============================================================
// CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct YieldSourceConfig {
    pub admin: Address,
    /// The single token this source manages
    pub asset: Address,
}
