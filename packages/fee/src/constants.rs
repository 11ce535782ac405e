// Fee controller constants

use belugahook_math::WAD;

/// Fee denominator: fees are in hundredths of a bip, 1_000_000 = 100%
pub const MAX_LP_FEE: u32 = 1_000_000;

/// Hard ceiling for the global adjustment rate (100% of the current fee)
pub const MAX_ADJUSTMENT_RATE: u128 = WAD;

/// Global adjustment rate used until an owner sets one (50%)
pub const DEFAULT_GLOBAL_MAX_ADJ_RATE: u128 = WAD / 2;

/// Seconds per day, the default smoothing lookback
pub const ONE_DAY: u64 = 86_400;

/// Seconds per hour, the default cooldown between pokes
pub const ONE_HOUR: u64 = 3_600;
