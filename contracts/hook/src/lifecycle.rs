// Pool lifecycle gating, access checks and the reentrancy lock

use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env};

use crate::error::HookError;
use crate::interfaces::AccessGateClient;
use crate::storage::*;
use crate::types::{HookConfig, PoolKey, PoolStatus, Role};

// ============================================================
// POOL IDENTITY
// ============================================================

/// sha256 over the XDR encoding of the key
pub fn pool_id(env: &Env, key: &PoolKey) -> BytesN<32> {
    env.crypto().sha256(&key.clone().to_xdr(env)).to_bytes()
}

// ============================================================
// ACCESS
// ============================================================

pub fn hook_config(env: &Env) -> Result<HookConfig, HookError> {
    read_hook_config(env).ok_or(HookError::NotInitialized)
}

/// `account` authorizes the call and holds `role` in the gate.
/// Gate failures abort the invocation unchanged.
pub fn require_role(env: &Env, account: &Address, role: Role) -> Result<HookConfig, HookError> {
    account.require_auth();
    let config = hook_config(env)?;
    AccessGateClient::new(env, &config.gate).require_role(account, &role);
    Ok(config)
}

/// Callbacks are only accepted from the host bound at initialization
pub fn require_host(env: &Env, sender: &Address) -> Result<HookConfig, HookError> {
    let config = hook_config(env)?;
    if *sender != config.host {
        return Err(HookError::InvalidCaller);
    }
    sender.require_auth();
    Ok(config)
}

// ============================================================
// STATE GATES
// ============================================================

pub fn require_unpaused(env: &Env) -> Result<(), HookError> {
    if is_paused(env) {
        return Err(HookError::ProtocolPaused);
    }
    Ok(())
}

/// The bound pool key
pub fn bound_pool(env: &Env) -> Result<PoolKey, HookError> {
    read_pool_key(env).ok_or(HookError::PoolNotConfigured)
}

pub fn bound_pool_id(env: &Env) -> Result<BytesN<32>, HookError> {
    read_pool_id(env).ok_or(HookError::PoolNotConfigured)
}

/// Checks shared by the liquidity and swap callbacks: host, pause, pool
/// binding, key, then an active pool.
pub fn require_callable(env: &Env, sender: &Address, key: &PoolKey) -> Result<PoolKey, HookError> {
    require_host(env, sender)?;
    require_unpaused(env)?;

    let bound = bound_pool(env)?;
    if *key != bound {
        return Err(HookError::InvalidPoolKey);
    }

    match read_status(env) {
        PoolStatus::Active => Ok(bound),
        PoolStatus::Unconfigured => Err(HookError::PoolNotConfigured),
        _ => Err(HookError::PoolPaused),
    }
}

/// Vault deposits need an unpaused, active pool
pub fn require_active(env: &Env) -> Result<PoolKey, HookError> {
    require_unpaused(env)?;
    let key = bound_pool(env)?;
    if read_status(env) != PoolStatus::Active {
        return Err(HookError::PoolPaused);
    }
    Ok(key)
}

// ============================================================
// REENTRANCY LOCK
// ============================================================

pub fn enter(env: &Env) -> Result<(), HookError> {
    if is_locked(env) {
        return Err(HookError::Reentrancy);
    }
    set_lock(env);
    Ok(())
}

pub fn exit(env: &Env) {
    clear_lock(env);
}
