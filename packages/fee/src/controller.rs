// Bounded fee controller

use belugahook_math::{apply_bounded_step, clamp_fee, ratio_error, wad_mul, Rounding, Side};
use soroban_sdk::Env;

use crate::constants::{MAX_ADJUSTMENT_RATE, MAX_LP_FEE};
use crate::error::FeeError;
use crate::smoothing::next_target;
use crate::types::{Adjustment, FeeState, PoolParams};

/// Fee bounds must be ordered and representable
pub fn validate_params(params: &PoolParams) -> Result<(), FeeError> {
    if params.min_fee > params.max_fee || params.max_fee > MAX_LP_FEE {
        return Err(FeeError::InvalidParameter);
    }
    Ok(())
}

/// `0 < rate <= MAX_ADJUSTMENT_RATE`
pub fn validate_global_rate(rate: u128) -> Result<(), FeeError> {
    if rate == 0 || rate > MAX_ADJUSTMENT_RATE {
        return Err(FeeError::InvalidParameter);
    }
    Ok(())
}

/// Initial controller state for a freshly initialized pool
pub fn configure(
    initial_fee: u32,
    initial_target_ratio: u128,
    params: &PoolParams,
    now: u64,
) -> Result<FeeState, FeeError> {
    validate_params(params)?;

    if initial_fee < params.min_fee || initial_fee > params.max_fee {
        return Err(FeeError::InvalidFee {
            fee: initial_fee,
            min_fee: params.min_fee,
            max_fee: params.max_fee,
        });
    }
    if initial_target_ratio == 0 {
        return Err(FeeError::InvalidRatio);
    }

    Ok(FeeState {
        current_fee: initial_fee,
        current_target_ratio: initial_target_ratio,
        last_adjustment_timestamp: now,
    })
}

/// Earliest timestamp at which the next adjustment is accepted
#[inline]
pub fn next_adjustment_time(state: &FeeState, params: &PoolParams) -> u64 {
    state.last_adjustment_timestamp.saturating_add(params.min_period)
}

/// One controller step for a freshly reported ratio.
///
/// The fee moves toward the side of the error by `linear_slope × error`,
/// scaled by the side factor and capped at
/// `min(base_max_fee_delta, current_fee × global_rate)`, then clamped into
/// the fee bounds. Inside the dead-band only the cooldown and the target
/// smoothing advance (plus the bound clamp for a stale out-of-band fee).
pub fn adjust(
    env: &Env,
    state: &FeeState,
    params: &PoolParams,
    current_ratio: u128,
    global_rate: u128,
    now: u64,
) -> Result<Adjustment, FeeError> {
    if current_ratio == 0 {
        return Err(FeeError::InvalidRatio);
    }

    let next_allowed = next_adjustment_time(state, params);
    if now < next_allowed {
        return Err(FeeError::CooldownNotElapsed {
            next_allowed,
            min_period: params.min_period,
        });
    }

    let observed = if params.max_current_ratio > 0 {
        current_ratio.min(params.max_current_ratio)
    } else {
        current_ratio
    };

    let (error, side) = ratio_error(observed, state.current_target_ratio);
    let within_tolerance = side == Side::AtTarget || error <= params.ratio_tolerance;

    let new_fee = if within_tolerance {
        clamp_fee(state.current_fee, params.min_fee, params.max_fee)
    } else {
        let side_factor = if side == Side::Above {
            params.upper_side_factor
        } else {
            params.lower_side_factor
        };
        let raw_step = wad_mul(env, error, params.linear_slope, Rounding::Down);
        let step = wad_mul(env, raw_step, side_factor, Rounding::Down);
        let rate_cap = wad_mul(env, state.current_fee as u128, global_rate, Rounding::Down);
        let cap = (params.base_max_fee_delta as u128).min(rate_cap);

        apply_bounded_step(
            state.current_fee,
            step,
            cap,
            side == Side::Above,
            params.min_fee,
            params.max_fee,
        )
    };

    let elapsed = now - state.last_adjustment_timestamp;
    let new_target = next_target(
        env,
        params.smoothing,
        state.current_target_ratio,
        observed,
        elapsed,
        params.lookback_period,
    );

    Ok(Adjustment {
        old_fee: state.current_fee,
        new_fee,
        old_target_ratio: state.current_target_ratio,
        new_target_ratio: new_target,
        within_tolerance,
        state: FeeState {
            current_fee: new_fee,
            current_target_ratio: new_target,
            last_adjustment_timestamp: now,
        },
    })
}
