// Vault constants

/// Share of a migrated balance the new source must report (99%)
pub const MIGRATION_MIN_RECEIVED_PIPS: u32 = 990_000;
