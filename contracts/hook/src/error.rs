// Error handling module for the dynamic fee hook
//
// - Typed contract errors grouped by code range
// - Conversions from the pure fee and vault engines, whose errors carry
//   detail a contract error code cannot

use belugahook_fee::FeeError;
use belugahook_vault::VaultError;
use soroban_sdk::contracterror;

// ============================================================
// CONTRACT ERRORS
// ============================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum HookError {
    // Initialization errors (100-199)
    /// Hook wiring already set
    AlreadyInitialized = 100,
    /// Hook wiring missing
    NotInitialized = 101,
    /// No pool configuration registered before pool initialization
    LogicNotSet = 102,

    // Configuration errors (200-299)
    /// Fee outside the configured bounds
    InvalidFee = 200,
    /// Ratio must be non-zero
    InvalidRatio = 201,
    /// Parameter out of range
    InvalidParameter = 202,
    /// Tick range empty or outside the tick domain
    InvalidTickRange = 203,
    /// Tick not aligned to the pool's tick spacing
    InvalidTickSpacing = 204,
    InvalidAddress = 205,
    /// Pool key does not match the bound pool or this hook
    InvalidPoolKey = 206,
    /// Currency is not one of the pool's currencies
    InvalidCurrency = 207,
    /// Yield source missing, for another asset, or for the native asset
    InvalidYieldSource = 208,

    // Lifecycle errors (300-399)
    PoolNotConfigured = 300,
    PoolAlreadyConfigured = 301,
    /// Pool deactivated by its owner
    PoolPaused = 302,
    /// Hook-wide emergency pause
    ProtocolPaused = 303,
    /// Fee poke before `min_period` elapsed
    CooldownNotElapsed = 304,

    // Vault errors (400-499)
    ZeroShares = 400,
    InsufficientShares = 401,
    ZeroAmounts = 402,
    YieldSourceNotSet = 403,
    /// New yield source received less than the migration floor
    MigrationSlippage = 404,

    // Authorization errors (600-699)
    /// Callback not sent by the bound host
    InvalidCaller = 600,

    // Execution errors (700-799)
    /// Guarded operation entered while another is in flight
    Reentrancy = 700,
    Overflow = 701,
}

// ============================================================
// ENGINE ERROR CONVERSION
// ============================================================

impl From<FeeError> for HookError {
    fn from(err: FeeError) -> Self {
        match err {
            FeeError::InvalidFee { .. } => HookError::InvalidFee,
            FeeError::InvalidRatio => HookError::InvalidRatio,
            FeeError::InvalidParameter => HookError::InvalidParameter,
            FeeError::CooldownNotElapsed { .. } => HookError::CooldownNotElapsed,
        }
    }
}

impl From<VaultError> for HookError {
    fn from(err: VaultError) -> Self {
        match err {
            VaultError::ZeroShares => HookError::ZeroShares,
            VaultError::InsufficientShares { .. } => HookError::InsufficientShares,
            VaultError::ZeroAmounts => HookError::ZeroAmounts,
            VaultError::InvalidTickRange => HookError::InvalidTickRange,
            VaultError::InvalidTickSpacing => HookError::InvalidTickSpacing,
            VaultError::InvalidTaxRate => HookError::InvalidParameter,
            VaultError::MigrationSlippage { .. } => HookError::MigrationSlippage,
        }
    }
}
