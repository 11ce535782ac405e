// Shared numeric constants

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick value (price ≈ 2.94e-39)
pub const MIN_TICK: i32 = -887272;

/// Maximum valid tick value (price ≈ 3.40e+38)
pub const MAX_TICK: i32 = 887272;

// ============================================================
// FIXED POINT SCALES
// ============================================================

/// Q64 multiplier (2^64), the scale of sqrt prices
pub const Q64: u128 = 1u128 << 64;

/// Sqrt price for a 1:1 price ratio
pub const SQRT_PRICE_1_1: u128 = Q64;

/// WAD scale (1e18) used for ratios, rates and gain factors
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Parts-per-million denominator used by the yield tax
pub const PIPS_DENOMINATOR: u32 = 1_000_000;
