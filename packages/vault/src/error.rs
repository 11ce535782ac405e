// Vault accounting errors

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VaultError {
    /// Share amount must be positive
    ZeroShares,
    /// Burn larger than the holder's balance
    InsufficientShares { requested: i128, available: i128 },
    /// Both deposit legs round to zero
    ZeroAmounts,
    /// Window is empty or leaves the tick domain
    InvalidTickRange,
    /// Window bound not on the pool's tick spacing
    InvalidTickSpacing,
    /// Yield tax above 100%
    InvalidTaxRate,
    /// New yield source reported less than the migration floor
    MigrationSlippage { expected: i128, received: i128 },
}
