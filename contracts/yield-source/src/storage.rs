//! Yield source storage operations

use soroban_sdk::{Address, Env};

use crate::types::{DataKey, YieldSourceConfig};

// ============================================================
// TTL CONFIG
// ============================================================

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &YieldSourceConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Option<YieldSourceConfig> {
    let key = DataKey::Config;
    let config = env.storage().persistent().get(&key);
    if config.is_some() {
        extend_ttl(env, &key);
    }
    config
}

// ============================================================
// SHARES
// ============================================================

pub fn read_total_shares(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

pub fn write_total_shares(env: &Env, total: i128) {
    env.storage().persistent().set(&DataKey::TotalShares, &total);
    extend_ttl(env, &DataKey::TotalShares);
}

pub fn read_shares(env: &Env, owner: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Shares(owner.clone()))
        .unwrap_or(0)
}

pub fn write_shares(env: &Env, owner: &Address, shares: i128) {
    let key = DataKey::Shares(owner.clone());
    if shares == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &shares);
    extend_ttl(env, &key);
}
