// SPDX-License-Identifier: MIT
// Q64.64 and wide multiply-divide arithmetic

use soroban_sdk::{Env, U256};

use crate::constants::Q64;
use crate::ratio::Rounding;

pub const ONE_X64: u128 = Q64;

const LOW_64: u128 = 0xFFFF_FFFF_FFFF_FFFF;

#[inline]
pub fn i128_to_u128_safe(x: i128) -> u128 {
    if x <= 0 { 0 } else { x as u128 }
}

#[inline]
pub fn u128_to_i128_saturating(x: u128) -> i128 {
    if x > i128::MAX as u128 { i128::MAX } else { x as i128 }
}

/// Multiply two Q64.64 numbers.
///
/// Splits both operands into 64-bit halves; saturates instead of
/// wrapping when the true product does not fit.
#[inline]
pub fn mul_q64(a: u128, b: u128) -> u128 {
    let (a_hi, a_lo) = (a >> 64, a & LOW_64);
    let (b_hi, b_lo) = (b >> 64, b & LOW_64);

    let high = a_hi.saturating_mul(b_hi);
    if high > LOW_64 {
        return u128::MAX;
    }

    (high << 64)
        .saturating_add(a_hi.saturating_mul(b_lo))
        .saturating_add(a_lo.saturating_mul(b_hi))
        .saturating_add((a_lo * b_lo) >> 64)
}

/// Raw division producing a Q64.64 result: (a << 64) / b
#[inline]
pub fn div_q64(a: u128, b: u128) -> u128 {
    if b == 0 {
        return u128::MAX;
    }
    if a <= LOW_64 {
        return (a << 64) / b;
    }

    let whole = (a / b).saturating_mul(Q64);
    let rem = a % b;
    let frac = if rem <= LOW_64 {
        (rem << 64) / b
    } else {
        ((rem >> 32) << 32) / (b >> 32).max(1)
    };

    whole.saturating_add(frac)
}

/// (a * b) / denominator with a 256-bit intermediate, rounded down.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    mul_div_rounding(env, a, b, denominator, Rounding::Down)
}

/// (a * b) / denominator with a 256-bit intermediate and an explicit
/// rounding direction. Saturates at u128::MAX.
pub fn mul_div_rounding(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
    rounding: Rounding,
) -> u128 {
    if denominator == 0 {
        panic!("mul_div: divide by zero");
    }
    if a == 0 || b == 0 {
        return 0;
    }

    // Fast path when the product fits
    if let Some(product) = a.checked_mul(b) {
        return match rounding {
            Rounding::Down => product / denominator,
            Rounding::Up => div_round_up(product, denominator),
        };
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let den = U256::from_u128(env, denominator);
    let numerator = match rounding {
        Rounding::Down => product,
        Rounding::Up => product.add(&den.sub(&U256::from_u32(env, 1))),
    };

    numerator.div(&den).to_u128().unwrap_or(u128::MAX)
}

/// Divide, rounding any remainder up
#[inline]
pub fn div_round_up(numerator: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        return 0;
    }
    let quotient = numerator / denominator;
    if numerator % denominator != 0 {
        quotient.saturating_add(1)
    } else {
        quotient
    }
}
