// Just-in-time liquidity sizing

use belugahook_math::{
    get_amounts_for_liquidity, get_liquidity_for_amounts, get_sqrt_ratio_at_tick, in_tick_window,
    Rounding,
};

use crate::types::{JitSizing, RehypothecationConfig};

/// Sqrt prices of the participation window plus the pool's current price
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceWindow {
    pub sqrt_price_lower: u128,
    pub sqrt_price_upper: u128,
    pub sqrt_price_current: u128,
}

impl PriceWindow {
    pub fn new(config: &RehypothecationConfig, sqrt_price_current: u128) -> Self {
        Self {
            sqrt_price_lower: get_sqrt_ratio_at_tick(config.tick_lower),
            sqrt_price_upper: get_sqrt_ratio_at_tick(config.tick_upper),
            sqrt_price_current,
        }
    }
}

/// Size the position the vault can back for a swap at `tick`.
///
/// Returns `None` when the tick is outside `[tick_lower, tick_upper)` or
/// the balances support no liquidity. Amounts round down so the lent
/// tokens never exceed what the vault holds.
pub fn size_jit(
    config: &RehypothecationConfig,
    tick: i32,
    sqrt_price_current: u128,
    net0: i128,
    net1: i128,
) -> Option<JitSizing> {
    if !in_tick_window(tick, config.tick_lower, config.tick_upper) {
        return None;
    }

    let window = PriceWindow::new(config, sqrt_price_current);
    let liquidity = get_liquidity_for_amounts(
        net0,
        net1,
        window.sqrt_price_lower,
        window.sqrt_price_upper,
        window.sqrt_price_current,
    );
    if liquidity <= 0 {
        return None;
    }

    let (amount0, amount1) = get_amounts_for_liquidity(
        liquidity,
        window.sqrt_price_lower,
        window.sqrt_price_upper,
        window.sqrt_price_current,
        Rounding::Down,
    );

    Some(JitSizing {
        liquidity,
        amount0: amount0.min(net0),
        amount1: amount1.min(net1),
    })
}
