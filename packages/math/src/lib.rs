// BelugaHook Math Package
//
// Fixed-point helpers shared by the fee controller and the
// rehypothecation vault.

#![no_std]

pub mod constants;
pub mod liquidity;
pub mod q64;
pub mod ratio;
pub mod sqrt_price;

pub use constants::*;

pub use q64::{
    div_q64, div_round_up, i128_to_u128_safe, mul_div, mul_div_rounding, mul_q64,
    u128_to_i128_saturating, ONE_X64,
};

pub use ratio::{
    apply_bounded_step, clamp_fee, convert_shares, in_tick_window, is_aligned, pips_of,
    ratio_error, wad_mul, Rounding, Side,
};

pub use sqrt_price::get_sqrt_ratio_at_tick;

pub use liquidity::{
    get_amount_0_delta, get_amount_1_delta, get_amounts_for_liquidity,
    get_liquidity_for_amount0, get_liquidity_for_amount1, get_liquidity_for_amounts,
};
