// Config and migration checks

use belugahook_math::{is_aligned, pips_of, MAX_TICK, MIN_TICK, PIPS_DENOMINATOR};
use soroban_sdk::Env;

use crate::constants::MIGRATION_MIN_RECEIVED_PIPS;
use crate::error::VaultError;

/// `lower < upper`, both inside the tick domain and aligned to `spacing`
pub fn validate_tick_range(lower: i32, upper: i32, spacing: i32) -> Result<(), VaultError> {
    if lower >= upper || lower < MIN_TICK || upper > MAX_TICK {
        return Err(VaultError::InvalidTickRange);
    }
    if !is_aligned(lower, spacing) || !is_aligned(upper, spacing) {
        return Err(VaultError::InvalidTickSpacing);
    }
    Ok(())
}

pub fn validate_tax_pips(pips: u32) -> Result<(), VaultError> {
    if pips > PIPS_DENOMINATOR {
        return Err(VaultError::InvalidTaxRate);
    }
    Ok(())
}

/// The new source must report at least `MIGRATION_MIN_RECEIVED_PIPS` of
/// what left the old one.
pub fn check_migration(env: &Env, moved: i128, received: i128) -> Result<(), VaultError> {
    if moved <= 0 {
        return Ok(());
    }
    let floor = pips_of(env, moved, MIGRATION_MIN_RECEIVED_PIPS);
    if received < floor {
        return Err(VaultError::MigrationSlippage {
            expected: floor,
            received,
        });
    }
    Ok(())
}
