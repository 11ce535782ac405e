// Fee controller errors

/// Failures of the pure controller. Carries the data a caller needs to
/// retry; the contract layer maps these onto its error codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeeError {
    /// Initial fee outside `[min_fee, max_fee]`
    InvalidFee { fee: u32, min_fee: u32, max_fee: u32 },
    /// Zero target or zero reported ratio
    InvalidRatio,
    /// Parameter set or global rate out of range
    InvalidParameter,
    /// `min_period` has not passed since the last adjustment
    CooldownNotElapsed { next_allowed: u64, min_period: u64 },
}
