use belugahook_math::*;

// ============================================================
// SQRT PRICE
// ============================================================

#[test]
fn test_sqrt_ratio_at_zero_is_one() {
    assert_eq!(get_sqrt_ratio_at_tick(0), ONE_X64);
}

#[test]
fn test_sqrt_ratio_is_monotonic() {
    let ticks = [-6000, -600, -60, -1, 0, 1, 60, 600, 6000];
    for pair in ticks.windows(2) {
        assert!(
            get_sqrt_ratio_at_tick(pair[0]) < get_sqrt_ratio_at_tick(pair[1]),
            "sqrt price must increase with tick"
        );
    }
}

#[test]
fn test_sqrt_ratio_symmetry() {
    // sqrt(p(t)) * sqrt(p(-t)) ~= 1
    let up = get_sqrt_ratio_at_tick(600);
    let down = get_sqrt_ratio_at_tick(-600);
    let product = mul_q64(up, down);
    assert!(product.abs_diff(ONE_X64) < ONE_X64 / 1_000_000);
}

#[test]
#[should_panic(expected = "tick out of range")]
fn test_sqrt_ratio_out_of_range() {
    get_sqrt_ratio_at_tick(MAX_TICK + 1);
}

// ============================================================
// AMOUNTS FOR LIQUIDITY
// ============================================================

#[test]
fn test_amounts_in_range_use_both_tokens() {
    let lower = get_sqrt_ratio_at_tick(-600);
    let upper = get_sqrt_ratio_at_tick(600);
    let (a0, a1) = get_amounts_for_liquidity(1_000_000_000, lower, upper, ONE_X64, Rounding::Down);
    assert!(a0 > 0);
    assert!(a1 > 0);
    // Symmetric range around price 1.0 needs roughly equal amounts
    assert!(a0.abs_diff(a1) <= a0 as u128 / 100);
}

#[test]
fn test_amounts_below_range_are_token0_only() {
    let lower = get_sqrt_ratio_at_tick(60);
    let upper = get_sqrt_ratio_at_tick(600);
    let (a0, a1) = get_amounts_for_liquidity(1_000_000, lower, upper, ONE_X64, Rounding::Down);
    assert!(a0 > 0);
    assert_eq!(a1, 0);
}

#[test]
fn test_amounts_above_range_are_token1_only() {
    let lower = get_sqrt_ratio_at_tick(-600);
    let upper = get_sqrt_ratio_at_tick(-60);
    let (a0, a1) = get_amounts_for_liquidity(1_000_000, lower, upper, ONE_X64, Rounding::Down);
    assert_eq!(a0, 0);
    assert!(a1 > 0);
}

#[test]
fn test_rounding_up_never_below_rounding_down() {
    let lower = get_sqrt_ratio_at_tick(-60);
    let upper = get_sqrt_ratio_at_tick(120);
    let down = get_amounts_for_liquidity(1_234_567, lower, upper, ONE_X64, Rounding::Down);
    let up = get_amounts_for_liquidity(1_234_567, lower, upper, ONE_X64, Rounding::Up);
    assert!(up.0 >= down.0 && up.0 - down.0 <= 1);
    assert!(up.1 >= down.1 && up.1 - down.1 <= 1);
}

#[test]
fn test_amounts_degenerate_inputs() {
    let lower = get_sqrt_ratio_at_tick(-60);
    let upper = get_sqrt_ratio_at_tick(60);
    assert_eq!(get_amounts_for_liquidity(0, lower, upper, ONE_X64, Rounding::Up), (0, 0));
    assert_eq!(get_amounts_for_liquidity(100, upper, lower, ONE_X64, Rounding::Up), (0, 0));
}

// ============================================================
// LIQUIDITY FOR AMOUNTS
// ============================================================

#[test]
fn test_liquidity_for_amounts_limited_by_scarcer_token() {
    let lower = get_sqrt_ratio_at_tick(-600);
    let upper = get_sqrt_ratio_at_tick(600);
    let balanced = get_liquidity_for_amounts(1_000_000, 1_000_000, lower, upper, ONE_X64);
    let short1 = get_liquidity_for_amounts(1_000_000, 10_000, lower, upper, ONE_X64);
    assert!(balanced > short1);
    assert!(short1 > 0);
}

#[test]
fn test_liquidity_for_amounts_never_exceeds_budget() {
    let lower = get_sqrt_ratio_at_tick(-1200);
    let upper = get_sqrt_ratio_at_tick(600);
    let (budget0, budget1) = (5_000_000i128, 3_000_000i128);
    let liquidity = get_liquidity_for_amounts(budget0, budget1, lower, upper, ONE_X64);
    let (a0, a1) = get_amounts_for_liquidity(liquidity, lower, upper, ONE_X64, Rounding::Down);
    assert!(a0 <= budget0);
    assert!(a1 <= budget1);
}

#[test]
fn test_liquidity_for_negative_amounts_is_zero() {
    let lower = get_sqrt_ratio_at_tick(-60);
    let upper = get_sqrt_ratio_at_tick(60);
    assert_eq!(get_liquidity_for_amount0(-1, lower, upper), 0);
    assert_eq!(get_liquidity_for_amount1(-1, lower, upper), 0);
}
