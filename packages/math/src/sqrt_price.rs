// SPDX-License-Identifier: MIT
// Tick to sqrt price conversion

use crate::constants::{MAX_TICK, MIN_TICK};
use crate::q64::{mul_q64, ONE_X64};

/// sqrt(1.0001^(2^i)) * 2^64 for i in 0..17
const TICK_FACTORS: [u128; 17] = [
    18447666387855958016,
    18448588748116922368,
    18450433606991732736,
    18454123878217469952,
    18461506635090006016,
    18476281010653908992,
    18505849059060717568,
    18565033932859791360,
    18683636815981789184,
    18922376066158198784,
    19403906064415539200,
    20388321338895749120,
    22486086334269071360,
    27241267204663885824,
    40198444615281172480,
    87150709742682460160,
    409916713094318874624,
];

/// sqrt(1.0001^tick) as Q64.64
///
/// Panics when `tick` is outside `[MIN_TICK, MAX_TICK]`.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> u128 {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        panic!("tick out of range");
    }
    if tick == 0 {
        return ONE_X64;
    }

    let abs_tick = tick.unsigned_abs();
    let ratio = TICK_FACTORS
        .iter()
        .enumerate()
        .filter(|(bit, _)| abs_tick & (1u32 << bit) != 0)
        .fold(ONE_X64, |acc, (_, factor)| mul_q64(acc, *factor));

    if tick > 0 {
        ratio
    } else if ratio == 0 {
        u128::MAX
    } else {
        // 2^128 / ratio, approximated by u128::MAX / ratio
        u128::MAX / ratio
    }
}
