// Storage module for the dynamic fee hook

use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::types::{
    FeeState, HookConfig, JitPosition, PoolConfig, PoolKey, PoolParams, PoolStatus,
    RehypothecationConfig, Slot, VaultState,
};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage
    /// Host, gate and native asset wiring
    HookConfig,
    /// Global cap on the per-step fee move (WAD)
    GlobalMaxAdjRate,

    // Persistent storage
    PoolConfig,
    PoolParams,
    PoolKey,
    PoolId,
    Status,
    FeeState,
    /// Last observed price
    Slot,
    RehypothecationConfig,
    VaultState,
    /// Yield source per currency
    YieldSource(Address),
    /// Vault share balance per holder
    Shares(Address),

    // Temporary storage
    /// Reentrancy lock, tagged with the ledger it was taken in
    Lock,
    /// Liquidity lent out between before_swap and after_swap
    JitPosition,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

/// Instance storage lifetime (~30 days)
const INSTANCE_LIFETIME: u32 = 518_400;
const INSTANCE_BUMP: u32 = 518_400;

/// Temporary entries only need to outlive one transaction
const TEMPORARY_LIFETIME: u32 = 100;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME, INSTANCE_BUMP);
}

fn read_persistent<T: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>>(
    env: &Env,
    key: &DataKey,
) -> Option<T> {
    let result = env.storage().persistent().get(key);
    if result.is_some() {
        extend_ttl(env, key);
    }
    result
}

fn write_persistent<T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(
    env: &Env,
    key: &DataKey,
    value: &T,
) {
    env.storage().persistent().set(key, value);
    extend_ttl(env, key);
}

// ============================================================
// HOOK WIRING (instance)
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::HookConfig)
}

pub fn write_hook_config(env: &Env, config: &HookConfig) {
    env.storage().instance().set(&DataKey::HookConfig, config);
    extend_instance(env);
}

pub fn read_hook_config(env: &Env) -> Option<HookConfig> {
    env.storage().instance().get(&DataKey::HookConfig)
}

pub fn write_global_max_adj_rate(env: &Env, rate: u128) {
    env.storage().instance().set(&DataKey::GlobalMaxAdjRate, &rate);
    extend_instance(env);
}

pub fn read_global_max_adj_rate(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::GlobalMaxAdjRate)
        .unwrap_or(belugahook_fee::DEFAULT_GLOBAL_MAX_ADJ_RATE)
}

// ============================================================
// POOL CONFIGURATION
// ============================================================

pub fn write_pool_config(env: &Env, config: &PoolConfig) {
    write_persistent(env, &DataKey::PoolConfig, config);
}

pub fn read_pool_config(env: &Env) -> Option<PoolConfig> {
    read_persistent(env, &DataKey::PoolConfig)
}

pub fn write_pool_params(env: &Env, params: &PoolParams) {
    write_persistent(env, &DataKey::PoolParams, params);
}

pub fn read_pool_params(env: &Env) -> Option<PoolParams> {
    read_persistent(env, &DataKey::PoolParams)
}

// ============================================================
// POOL BINDING
// ============================================================

pub fn write_pool_binding(env: &Env, key: &PoolKey, pool_id: &BytesN<32>) {
    write_persistent(env, &DataKey::PoolKey, key);
    write_persistent(env, &DataKey::PoolId, pool_id);
}

pub fn read_pool_key(env: &Env) -> Option<PoolKey> {
    read_persistent(env, &DataKey::PoolKey)
}

pub fn read_pool_id(env: &Env) -> Option<BytesN<32>> {
    read_persistent(env, &DataKey::PoolId)
}

pub fn write_status(env: &Env, status: PoolStatus) {
    write_persistent(env, &DataKey::Status, &status);
}

pub fn read_status(env: &Env) -> PoolStatus {
    read_persistent(env, &DataKey::Status).unwrap_or(PoolStatus::Unconfigured)
}

pub fn is_paused(env: &Env) -> bool {
    matches!(read_status(env), PoolStatus::Paused(_))
}

pub fn write_slot(env: &Env, slot: &Slot) {
    write_persistent(env, &DataKey::Slot, slot);
}

pub fn read_slot(env: &Env) -> Option<Slot> {
    read_persistent(env, &DataKey::Slot)
}

// ============================================================
// FEE STATE
// ============================================================

pub fn write_fee_state(env: &Env, state: &FeeState) {
    write_persistent(env, &DataKey::FeeState, state);
}

pub fn read_fee_state(env: &Env) -> Option<FeeState> {
    read_persistent(env, &DataKey::FeeState)
}

// ============================================================
// VAULT
// ============================================================

pub fn write_rehypothecation_config(env: &Env, config: &RehypothecationConfig) {
    write_persistent(env, &DataKey::RehypothecationConfig, config);
}

pub fn read_rehypothecation_config(env: &Env) -> RehypothecationConfig {
    read_persistent(env, &DataKey::RehypothecationConfig).unwrap_or_default()
}

pub fn write_vault_state(env: &Env, state: &VaultState) {
    write_persistent(env, &DataKey::VaultState, state);
}

pub fn read_vault_state(env: &Env) -> VaultState {
    read_persistent(env, &DataKey::VaultState).unwrap_or_default()
}

pub fn write_yield_source(env: &Env, currency: &Address, source: &Address) {
    write_persistent(env, &DataKey::YieldSource(currency.clone()), source);
}

pub fn read_yield_source(env: &Env, currency: &Address) -> Option<Address> {
    read_persistent(env, &DataKey::YieldSource(currency.clone()))
}

pub fn read_shares(env: &Env, holder: &Address) -> i128 {
    read_persistent(env, &DataKey::Shares(holder.clone())).unwrap_or(0)
}

pub fn write_shares(env: &Env, holder: &Address, shares: i128) {
    let key = DataKey::Shares(holder.clone());
    if shares == 0 {
        env.storage().persistent().remove(&key);
    } else {
        write_persistent(env, &key, &shares);
    }
}

// ============================================================
// TRANSIENT (temporary)
// ============================================================

/// A lock left over from an earlier ledger is stale and does not count
pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .temporary()
        .get::<_, u32>(&DataKey::Lock)
        .map_or(false, |sequence| sequence == env.ledger().sequence())
}

pub fn set_lock(env: &Env) {
    env.storage()
        .temporary()
        .set(&DataKey::Lock, &env.ledger().sequence());
    env.storage()
        .temporary()
        .extend_ttl(&DataKey::Lock, TEMPORARY_LIFETIME, TEMPORARY_LIFETIME);
}

pub fn clear_lock(env: &Env) {
    env.storage().temporary().remove(&DataKey::Lock);
}

pub fn write_jit_position(env: &Env, position: &JitPosition) {
    env.storage().temporary().set(&DataKey::JitPosition, position);
    env.storage().temporary().extend_ttl(
        &DataKey::JitPosition,
        TEMPORARY_LIFETIME,
        TEMPORARY_LIFETIME,
    );
}

pub fn take_jit_position(env: &Env) -> Option<JitPosition> {
    let position = env.storage().temporary().get(&DataKey::JitPosition);
    if position.is_some() {
        env.storage().temporary().remove(&DataKey::JitPosition);
    }
    position
}
