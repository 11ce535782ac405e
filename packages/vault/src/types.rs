// Vault types

use soroban_sdk::{contracttype, Address};

// ============================================================
// REHYPOTHECATION CONFIG
// ============================================================

/// Window and tax settings owned by the yield manager
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RehypothecationConfig {
    /// Inclusive lower tick of the participation window
    pub tick_lower: i32,
    /// Exclusive upper tick of the participation window
    pub tick_upper: i32,
    /// Tax on positive yield, parts per million
    pub yield_tax_pips: u32,
    pub yield_treasury: Option<Address>,
}

// ============================================================
// VAULT STATE
// ============================================================

/// Share supply plus the per-currency yield checkpoints.
///
/// `last_accounted` is the net balance (gross minus owed tax) at the last
/// accrual; anything above it on the next accrual is yield.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VaultState {
    pub total_supply: i128,
    pub last_accounted0: i128,
    pub last_accounted1: i128,
    pub accumulated_tax0: i128,
    pub accumulated_tax1: i128,
}

// ============================================================
// JIT
// ============================================================

/// Liquidity and token amounts lent to the pool for one swap
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct JitSizing {
    pub liquidity: i128,
    pub amount0: i128,
    pub amount1: i128,
}
