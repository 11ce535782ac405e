use belugahook_math::*;
use soroban_sdk::Env;

#[test]
fn test_ratio_error_sides() {
    assert_eq!(ratio_error(8 * WAD / 10, 5 * WAD / 10), (3 * WAD / 10, Side::Above));
    assert_eq!(ratio_error(2 * WAD / 10, 5 * WAD / 10), (3 * WAD / 10, Side::Below));
    assert_eq!(ratio_error(WAD, WAD), (0, Side::AtTarget));
}

#[test]
fn test_wad_mul() {
    let env = Env::default();
    assert_eq!(wad_mul(&env, 3 * WAD, WAD / 2, Rounding::Down), 3 * WAD / 2);
    // 1 * 0.5 = 0.5 -> 0 down, 1 up
    assert_eq!(wad_mul(&env, 1, WAD / 2, Rounding::Down), 0);
    assert_eq!(wad_mul(&env, 1, WAD / 2, Rounding::Up), 1);
}

// ============================================================
// BOUNDED STEPS
// ============================================================

#[test]
fn test_apply_bounded_step_respects_cap() {
    assert_eq!(apply_bounded_step(1000, 500, 100, true, 500, 10_000), 1100);
    assert_eq!(apply_bounded_step(1000, 500, 100, false, 500, 10_000), 900);
    assert_eq!(apply_bounded_step(1000, 50, 100, true, 500, 10_000), 1050);
}

#[test]
fn test_apply_bounded_step_clamps_to_bounds() {
    assert_eq!(apply_bounded_step(600, 500, 500, false, 500, 10_000), 500);
    assert_eq!(apply_bounded_step(9_900, 500, 500, true, 500, 10_000), 10_000);
    // Huge steps never wrap
    assert_eq!(apply_bounded_step(1, u128::MAX, u128::MAX, true, 0, u32::MAX), u32::MAX);
    assert_eq!(apply_bounded_step(1, u128::MAX, u128::MAX, false, 0, 10), 0);
}

#[test]
fn test_clamp_fee_out_of_band_value() {
    assert_eq!(clamp_fee(20_000, 500, 10_000), 10_000);
    assert_eq!(clamp_fee(100, 500, 10_000), 500);
    assert_eq!(clamp_fee(3_000, 500, 10_000), 3_000);
}

// ============================================================
// PIPS AND SHARES
// ============================================================

#[test]
fn test_pips_of() {
    let env = Env::default();
    assert_eq!(pips_of(&env, 1_000_000, 100_000), 100_000);
    assert_eq!(pips_of(&env, 999, 1), 0);
    assert_eq!(pips_of(&env, 1_000, PIPS_DENOMINATOR), 1_000);
    assert_eq!(pips_of(&env, -5, 100_000), 0);
}

#[test]
fn test_convert_shares_rounding() {
    let env = Env::default();
    assert_eq!(convert_shares(&env, 1, 10, 3, Rounding::Up), 4);
    assert_eq!(convert_shares(&env, 1, 10, 3, Rounding::Down), 3);
    assert_eq!(convert_shares(&env, 3, 10, 3, Rounding::Up), 10);
}

#[test]
fn test_convert_shares_degenerate_inputs() {
    let env = Env::default();
    assert_eq!(convert_shares(&env, 10, 0, 100, Rounding::Up), 0);
    assert_eq!(convert_shares(&env, 10, 100, 0, Rounding::Down), 0);
    assert_eq!(convert_shares(&env, 0, 100, 100, Rounding::Up), 0);
}

#[test]
fn test_convert_shares_extreme_magnitudes() {
    let env = Env::default();
    let big = i128::MAX / 2;
    assert_eq!(convert_shares(&env, big, big, big, Rounding::Down), big);
}

// ============================================================
// TICK WINDOW
// ============================================================

#[test]
fn test_tick_window_is_half_open() {
    assert!(in_tick_window(-60, -60, 60));
    assert!(in_tick_window(0, -60, 60));
    assert!(in_tick_window(59, -60, 60));
    assert!(!in_tick_window(60, -60, 60));
    assert!(!in_tick_window(-61, -60, 60));
    assert!(!in_tick_window(0, 0, 0));
}

#[test]
fn test_is_aligned() {
    assert!(is_aligned(-120, 60));
    assert!(is_aligned(0, 60));
    assert!(!is_aligned(-90, 60));
    assert!(!is_aligned(60, 0));
}
