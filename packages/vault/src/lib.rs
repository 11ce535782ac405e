// BelugaHook Vault Package
//
// Share and yield accounting for capital the hook parks in external
// yield sources between swaps. Everything here is pure: balances come
// in as arguments and the new state comes back out.

#![no_std]

pub mod accounting;
pub mod constants;
pub mod error;
pub mod jit;
pub mod shares;
pub mod types;
pub mod validation;

pub use accounting::{accrue_tax, checkpoint, collectible_tax, net_assets, TaxAccrual};
pub use constants::*;
pub use error::VaultError;
pub use jit::{size_jit, PriceWindow};
pub use shares::{plan_add, plan_remove, preview_add, preview_remove};
pub use types::{JitSizing, RehypothecationConfig, VaultState};
pub use validation::{check_migration, validate_tax_pips, validate_tick_range};
