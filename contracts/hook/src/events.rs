// Hook events module
// Topics carry the event name and, for pool-scoped events, the pool id

use soroban_sdk::{Address, BytesN, Env, Symbol};

use crate::types::{PoolParams, PoolType};

// ============================================================
// LIFECYCLE
// ============================================================

/// Topics: ("HookInit",)
/// Data: (host, gate, global_max_adj_rate)
pub fn emit_initialized(env: &Env, host: &Address, gate: &Address, rate: u128) {
    env.events().publish(
        (Symbol::new(env, "HookInit"),),
        (host.clone(), gate.clone(), rate),
    );
}

/// Topics: ("PoolConfigured", pool_id)
/// Data: (initial_fee, initial_target_ratio, pool_type)
pub fn emit_pool_configured(
    env: &Env,
    pool_id: &BytesN<32>,
    initial_fee: u32,
    initial_target_ratio: u128,
    pool_type: PoolType,
) {
    env.events().publish(
        (Symbol::new(env, "PoolConfigured"), pool_id.clone()),
        (initial_fee, initial_target_ratio, pool_type),
    );
}

/// Topics: ("PoolActivated", pool_id)
pub fn emit_pool_activated(env: &Env, pool_id: &BytesN<32>) {
    env.events()
        .publish((Symbol::new(env, "PoolActivated"), pool_id.clone()), ());
}

/// Topics: ("PoolDeactivated", pool_id)
pub fn emit_pool_deactivated(env: &Env, pool_id: &BytesN<32>) {
    env.events()
        .publish((Symbol::new(env, "PoolDeactivated"), pool_id.clone()), ());
}

pub fn emit_paused(env: &Env, by: &Address) {
    env.events().publish((Symbol::new(env, "Paused"),), by.clone());
}

pub fn emit_unpaused(env: &Env, by: &Address) {
    env.events().publish((Symbol::new(env, "Unpaused"),), by.clone());
}

// ============================================================
// FEE CONTROLLER
// ============================================================

/// Topics: ("FeeUpdated", pool_id)
/// Data: (old_fee, new_fee, old_target_ratio, new_target_ratio)
pub fn emit_fee_updated(
    env: &Env,
    pool_id: &BytesN<32>,
    old_fee: u32,
    new_fee: u32,
    old_target_ratio: u128,
    new_target_ratio: u128,
) {
    env.events().publish(
        (Symbol::new(env, "FeeUpdated"), pool_id.clone()),
        (old_fee, new_fee, old_target_ratio, new_target_ratio),
    );
}

/// Topics: ("ParamsUpdated",)
/// Data: params
pub fn emit_params_updated(env: &Env, params: &PoolParams) {
    env.events()
        .publish((Symbol::new(env, "ParamsUpdated"),), params.clone());
}

/// Topics: ("MaxAdjRateUpdated",)
/// Data: (old_rate, new_rate)
pub fn emit_max_adj_rate_updated(env: &Env, old_rate: u128, new_rate: u128) {
    env.events().publish(
        (Symbol::new(env, "MaxAdjRateUpdated"),),
        (old_rate, new_rate),
    );
}

// ============================================================
// REHYPOTHECATION CONFIG
// ============================================================

/// Topics: ("YieldSourceUpdated", currency)
/// Data: (old_source, new_source, migrated)
pub fn emit_yield_source_updated(
    env: &Env,
    currency: &Address,
    old_source: &Option<Address>,
    new_source: &Address,
    migrated: i128,
) {
    env.events().publish(
        (Symbol::new(env, "YieldSourceUpdated"), currency.clone()),
        (old_source.clone(), new_source.clone(), migrated),
    );
}

/// Topics: ("TickRangeUpdated",)
/// Data: (tick_lower, tick_upper)
pub fn emit_tick_range_updated(env: &Env, tick_lower: i32, tick_upper: i32) {
    env.events().publish(
        (Symbol::new(env, "TickRangeUpdated"),),
        (tick_lower, tick_upper),
    );
}

/// Topics: ("YieldTaxUpdated",)
/// Data: (old_pips, new_pips)
pub fn emit_yield_tax_updated(env: &Env, old_pips: u32, new_pips: u32) {
    env.events().publish(
        (Symbol::new(env, "YieldTaxUpdated"),),
        (old_pips, new_pips),
    );
}

/// Topics: ("YieldTreasuryUpdated",)
/// Data: (old_treasury, new_treasury)
pub fn emit_yield_treasury_updated(env: &Env, old: &Option<Address>, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "YieldTreasuryUpdated"),),
        (old.clone(), new.clone()),
    );
}

// ============================================================
// VAULT
// ============================================================

/// Topics: ("LiquidityAdded", depositor)
/// Data: (shares, amount0, amount1)
pub fn emit_liquidity_added(env: &Env, depositor: &Address, shares: i128, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "LiquidityAdded"), depositor.clone()),
        (shares, amount0, amount1),
    );
}

/// Topics: ("LiquidityRemoved", owner)
/// Data: (shares, amount0, amount1)
pub fn emit_liquidity_removed(env: &Env, owner: &Address, shares: i128, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "LiquidityRemoved"), owner.clone()),
        (shares, amount0, amount1),
    );
}

/// Topics: ("TaxCollected", treasury)
/// Data: (amount0, amount1)
pub fn emit_tax_collected(env: &Env, treasury: &Address, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "TaxCollected"), treasury.clone()),
        (amount0, amount1),
    );
}

// ============================================================
// JIT
// ============================================================

/// Topics: ("JitProvided", pool_id)
/// Data: (tick, liquidity, amount0, amount1)
pub fn emit_jit_provided(
    env: &Env,
    pool_id: &BytesN<32>,
    tick: i32,
    liquidity: i128,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "JitProvided"), pool_id.clone()),
        (tick, liquidity, amount0, amount1),
    );
}

/// Topics: ("JitSettled", pool_id)
/// Data: (liquidity, returned0, returned1)
pub fn emit_jit_settled(
    env: &Env,
    pool_id: &BytesN<32>,
    liquidity: i128,
    returned0: i128,
    returned1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "JitSettled"), pool_id.clone()),
        (liquidity, returned0, returned1),
    );
}

/// Topics: ("SharesTransferred", from, to)
/// Data: shares
pub fn emit_shares_transferred(env: &Env, from: &Address, to: &Address, shares: i128) {
    env.events().publish(
        (Symbol::new(env, "SharesTransferred"), from.clone(), to.clone()),
        shares,
    );
}
