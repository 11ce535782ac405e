// SPDX-License-Identifier: MIT
// Liquidity <-> token amount conversions over a sqrt-price range

use crate::q64::{div_q64, div_round_up, i128_to_u128_safe, mul_q64, u128_to_i128_saturating};
use crate::ratio::Rounding;

#[inline]
fn ordered(a: u128, b: u128) -> (u128, u128) {
    if a < b { (a, b) } else { (b, a) }
}

/// token0 owed for `liquidity` between two sqrt prices
pub fn get_amount_0_delta(
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    rounding: Rounding,
) -> u128 {
    let (lower, upper) = ordered(sqrt_price_a, sqrt_price_b);
    let product = mul_q64(upper, lower);
    if product == 0 {
        return 0;
    }

    let numerator = liquidity.saturating_mul(upper - lower);
    match rounding {
        Rounding::Up => div_round_up(numerator, product),
        Rounding::Down => numerator / product,
    }
}

/// token1 owed for `liquidity` between two sqrt prices
pub fn get_amount_1_delta(
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    rounding: Rounding,
) -> u128 {
    let (lower, upper) = ordered(sqrt_price_a, sqrt_price_b);
    let product = liquidity.saturating_mul(upper - lower);
    let whole = product >> 64;

    match rounding {
        Rounding::Up if product & 0xFFFF_FFFF_FFFF_FFFF != 0 => whole + 1,
        _ => whole,
    }
}

/// Liquidity supplied by `amount0` over `[sqrt_price_lower, sqrt_price_upper]`
pub fn get_liquidity_for_amount0(
    amount0: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
) -> i128 {
    if amount0 <= 0 || sqrt_price_lower >= sqrt_price_upper {
        return 0;
    }

    let product = mul_q64(sqrt_price_upper, sqrt_price_lower);
    let numerator = i128_to_u128_safe(amount0).saturating_mul(product);
    u128_to_i128_saturating(numerator / (sqrt_price_upper - sqrt_price_lower))
}

/// Liquidity supplied by `amount1` over `[sqrt_price_lower, sqrt_price_upper]`
pub fn get_liquidity_for_amount1(
    amount1: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
) -> i128 {
    if amount1 <= 0 || sqrt_price_lower >= sqrt_price_upper {
        return 0;
    }

    let liquidity = div_q64(
        i128_to_u128_safe(amount1),
        sqrt_price_upper - sqrt_price_lower,
    );
    u128_to_i128_saturating(liquidity)
}

/// Largest liquidity both amounts can back at `current_sqrt_price`
pub fn get_liquidity_for_amounts(
    amount0: i128,
    amount1: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
) -> i128 {
    if sqrt_price_lower >= sqrt_price_upper {
        return 0;
    }

    if current_sqrt_price <= sqrt_price_lower {
        get_liquidity_for_amount0(amount0, sqrt_price_lower, sqrt_price_upper)
    } else if current_sqrt_price >= sqrt_price_upper {
        get_liquidity_for_amount1(amount1, sqrt_price_lower, sqrt_price_upper)
    } else {
        let liq0 = get_liquidity_for_amount0(amount0, current_sqrt_price, sqrt_price_upper);
        let liq1 = get_liquidity_for_amount1(amount1, sqrt_price_lower, current_sqrt_price);
        liq0.min(liq1)
    }
}

/// Token amounts represented by `liquidity` at `current_sqrt_price`
pub fn get_amounts_for_liquidity(
    liquidity: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
    rounding: Rounding,
) -> (i128, i128) {
    if liquidity <= 0 || sqrt_price_lower >= sqrt_price_upper {
        return (0, 0);
    }

    let liq = i128_to_u128_safe(liquidity);
    let price = current_sqrt_price.clamp(sqrt_price_lower, sqrt_price_upper);

    let amount0 = if price < sqrt_price_upper {
        get_amount_0_delta(price, sqrt_price_upper, liq, rounding)
    } else {
        0
    };
    let amount1 = if price > sqrt_price_lower {
        get_amount_1_delta(sqrt_price_lower, price, liq, rounding)
    } else {
        0
    };

    (u128_to_i128_saturating(amount0), u128_to_i128_saturating(amount1))
}
