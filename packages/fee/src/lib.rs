// BelugaHook Fee Package
//
// Bounded incremental controller that steers a pool's dynamic fee toward
// the level at which the reported activity ratio meets its target.

#![no_std]

pub mod constants;
pub mod controller;
pub mod error;
pub mod smoothing;
pub mod types;

pub use constants::*;
pub use controller::{
    adjust, configure, next_adjustment_time, validate_global_rate, validate_params,
};
pub use error::FeeError;
pub use smoothing::next_target;
pub use types::{Adjustment, FeeState, PoolConfig, PoolParams, PoolType, Smoothing};
