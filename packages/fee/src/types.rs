// Fee controller types

use belugahook_math::WAD;
use soroban_sdk::contracttype;

use crate::constants::{ONE_DAY, ONE_HOUR};

// ============================================================
// POOL CONFIGURATION
// ============================================================

/// Fee profile of the pool
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolType {
    Stable,
    Standard,
    Volatile,
}

/// One-time configuration registered for the bound pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Fee in force right after initialization (hundredths of a bip)
    pub initial_fee: u32,
    /// Target activity ratio at initialization (WAD)
    pub initial_target_ratio: u128,
    pub pool_type: PoolType,
    /// Set once the pool has been initialized against this config
    pub is_configured: bool,
}

// ============================================================
// CONTROLLER PARAMETERS
// ============================================================

/// How the target ratio follows the observed ratio
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Smoothing {
    /// Blend weight `min(elapsed, lookback) / lookback`
    TimeWeightedEma,
    /// Target stays at its configured value
    Frozen,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolParams {
    /// Lower fee bound
    pub min_fee: u32,
    /// Upper fee bound
    pub max_fee: u32,
    /// Largest fee move a single step may make
    pub base_max_fee_delta: u32,
    /// Smoothing window for the target ratio, seconds
    pub lookback_period: u64,
    /// Cooldown between adjustments, seconds
    pub min_period: u64,
    /// Dead-band around the target (WAD ratio units)
    pub ratio_tolerance: u128,
    /// Fee units per 1.0 (WAD) of ratio error
    pub linear_slope: u128,
    /// Reported ratios are clamped to this value; 0 disables the clamp
    pub max_current_ratio: u128,
    /// Gain multiplier (WAD) when the ratio is below target
    pub lower_side_factor: u128,
    /// Gain multiplier (WAD) when the ratio is above target
    pub upper_side_factor: u128,
    pub smoothing: Smoothing,
}

impl PoolParams {
    /// Default parameter set for a pool type
    pub fn preset(pool_type: PoolType) -> Self {
        match pool_type {
            PoolType::Stable => PoolParams {
                min_fee: 10,
                max_fee: 1_000,
                base_max_fee_delta: 50,
                lookback_period: ONE_DAY,
                min_period: ONE_HOUR,
                ratio_tolerance: WAD / 20,
                linear_slope: 2_000,
                max_current_ratio: 10 * WAD,
                lower_side_factor: WAD,
                upper_side_factor: WAD,
                smoothing: Smoothing::TimeWeightedEma,
            },
            PoolType::Standard => PoolParams {
                min_fee: 500,
                max_fee: 10_000,
                base_max_fee_delta: 500,
                lookback_period: ONE_DAY,
                min_period: ONE_HOUR,
                ratio_tolerance: WAD / 50,
                linear_slope: 10_000,
                max_current_ratio: 10 * WAD,
                lower_side_factor: WAD,
                upper_side_factor: WAD,
                smoothing: Smoothing::TimeWeightedEma,
            },
            PoolType::Volatile => PoolParams {
                min_fee: 3_000,
                max_fee: 50_000,
                base_max_fee_delta: 2_500,
                lookback_period: ONE_DAY / 2,
                min_period: ONE_HOUR / 2,
                ratio_tolerance: WAD / 20,
                linear_slope: 50_000,
                max_current_ratio: 20 * WAD,
                // Fees come down slower than they go up
                lower_side_factor: WAD / 2,
                upper_side_factor: WAD + WAD / 2,
                smoothing: Smoothing::TimeWeightedEma,
            },
        }
    }
}

// ============================================================
// FEE STATE
// ============================================================

/// Live controller state; `current_fee` is what swaps are priced with
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeState {
    pub current_fee: u32,
    pub current_target_ratio: u128,
    pub last_adjustment_timestamp: u64,
}

/// Outcome of one controller step
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Adjustment {
    pub old_fee: u32,
    pub new_fee: u32,
    pub old_target_ratio: u128,
    pub new_target_ratio: u128,
    /// True when the error fell inside the dead-band
    pub within_tolerance: bool,
    pub state: FeeState,
}
