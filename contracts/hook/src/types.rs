// Hook Types - Pool wiring, callback payloads and access roles

use soroban_sdk::{contracttype, Address, Symbol};

// Re-export types from packages
pub use belugahook_fee::{FeeState, PoolConfig, PoolParams, PoolType, Smoothing};
pub use belugahook_vault::{JitSizing as JitPosition, RehypothecationConfig, VaultState};

// ============================================================
// HOOK WIRING
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HookConfig {
    /// Account that initialized the hook
    pub deployer: Address,
    /// Pool-management runtime allowed to drive the callbacks
    pub host: Address,
    /// Role gate consulted for every privileged call
    pub gate: Address,
    /// Native asset of the network, never routed to a yield source
    pub native_asset: Option<Address>,
}

/// Capabilities checked against the access gate
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    PoolOwner,
    YieldManager,
    FeePoker,
}

// ============================================================
// POOL
// ============================================================

/// Identity of a host pool; the hook is bound to exactly one
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    /// Sorted: currency0 < currency1
    pub currency0: Address,
    pub currency1: Address,
    /// Static fee tier registered with the host
    pub fee: u32,
    pub tick_spacing: i32,
    /// Hook contract the pool dispatches to
    pub hooks: Address,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolStatus {
    Unconfigured,
    Inactive,
    Active,
    /// Emergency override of a configured pool. Holds whether the pool
    /// resumes as `Active` once unpaused.
    Paused(bool),
}


/// Last observed pool price
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Slot {
    /// Current sqrt price as Q64.64 fixed point
    pub sqrt_price_x64: u128,
    pub tick: i32,
}

// ============================================================
// CALLBACK PAYLOADS
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModifyLiquidityParams {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity_delta: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapParams {
    pub zero_for_one: bool,
    /// Positive for exact input, negative for exact output
    pub amount_specified: i128,
    pub sqrt_price_limit_x64: u128,
}

/// Liquidity the hook lends to the pool for the duration of one swap.
/// The tokens are transferred to the host before `before_swap` returns.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JitLiquidity {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: i128,
    pub amount0: i128,
    pub amount1: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeforeSwapResult {
    pub ack: Symbol,
    /// Always the current dynamic fee
    pub fee_override: Option<u32>,
    pub jit: Option<JitLiquidity>,
}
