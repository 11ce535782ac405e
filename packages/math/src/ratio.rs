// Ratio, bounded-step and share conversion helpers

use soroban_sdk::Env;

use crate::constants::{PIPS_DENOMINATOR, WAD};
use crate::q64::{i128_to_u128_safe, mul_div_rounding, u128_to_i128_saturating};

/// Rounding direction for divisions that do not come out even.
///
/// Deposits round `Up` and withdrawals round `Down` so dust stays with
/// the protocol.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rounding {
    Down,
    Up,
}

/// Where an observed ratio sits relative to its target
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Below,
    AtTarget,
    Above,
}

/// Absolute distance between `current` and `target` and the side
/// `current` lies on.
#[inline]
pub fn ratio_error(current: u128, target: u128) -> (u128, Side) {
    if current > target {
        (current - target, Side::Above)
    } else if current < target {
        (target - current, Side::Below)
    } else {
        (0, Side::AtTarget)
    }
}

/// a * b / WAD
#[inline]
pub fn wad_mul(env: &Env, a: u128, b: u128, rounding: Rounding) -> u128 {
    mul_div_rounding(env, a, b, WAD, rounding)
}

/// Clamp a fee into `[min_fee, max_fee]`.
///
/// `min_fee > max_fee` resolves to `max_fee`.
#[inline]
pub fn clamp_fee(fee: u32, min_fee: u32, max_fee: u32) -> u32 {
    fee.max(min_fee).min(max_fee)
}

/// Move `value` by at most `cap` in the requested direction, then clamp
/// the result into `[min, max]`.
pub fn apply_bounded_step(
    value: u32,
    step: u128,
    cap: u128,
    increase: bool,
    min: u32,
    max: u32,
) -> u32 {
    let bounded = step.min(cap);
    let moved = if increase {
        (value as u128).saturating_add(bounded).min(u32::MAX as u128)
    } else {
        (value as u128).saturating_sub(bounded)
    };
    clamp_fee(moved as u32, min, max)
}

/// `amount * pips / 1_000_000`, rounded down. Non-positive amounts give 0.
pub fn pips_of(env: &Env, amount: i128, pips: u32) -> i128 {
    if amount <= 0 || pips == 0 {
        return 0;
    }
    let raw = mul_div_rounding(
        env,
        i128_to_u128_safe(amount),
        pips as u128,
        PIPS_DENOMINATOR as u128,
        Rounding::Down,
    );
    u128_to_i128_saturating(raw)
}

/// Pro-rata conversion `shares * total_assets / total_supply`.
///
/// Returns 0 when there is no supply or nothing to claim; never panics on
/// magnitude.
pub fn convert_shares(
    env: &Env,
    shares: i128,
    total_assets: i128,
    total_supply: i128,
    rounding: Rounding,
) -> i128 {
    if shares <= 0 || total_assets <= 0 || total_supply <= 0 {
        return 0;
    }
    let raw = mul_div_rounding(
        env,
        shares as u128,
        total_assets as u128,
        total_supply as u128,
        rounding,
    );
    u128_to_i128_saturating(raw)
}

/// Half-open window check: `lower <= tick < upper`
#[inline]
pub fn in_tick_window(tick: i32, lower: i32, upper: i32) -> bool {
    tick >= lower && tick < upper
}

/// Whether `tick` is a multiple of a positive `spacing`
#[inline]
pub fn is_aligned(tick: i32, spacing: i32) -> bool {
    spacing > 0 && tick.rem_euclid(spacing) == 0
}
