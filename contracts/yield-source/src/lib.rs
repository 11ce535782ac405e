#![no_std]

//! # BelugaHook Yield Source
//!
//! Single-asset share vault the hook parks idle liquidity in.
//!
//! ## Accounting:
//! - Shares are minted against the token balance the contract holds, so
//!   tokens sent in from outside raise every owner's claim (yield) and
//!   tokens leaving without a burn lower it (loss).
//! - Deposits round shares down, withdrawals round burned shares up.
//!
//! ## Functions:
//! - Write (4): initialize, deposit, withdraw, simulate_loss
//! - Read (5): asset, total_assets, total_managed, shares_of, total_shares

use belugahook_math::{convert_shares, Rounding};
use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

mod error;
mod events;
mod storage;
mod types;

pub use error::YieldSourceError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONSTANTS
// ============================================================

const BPS_DENOMINATOR: i128 = 10_000;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct YieldSourceVault;

#[contractimpl]
impl YieldSourceVault {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(env: Env, admin: Address, asset: Address) -> Result<(), YieldSourceError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(YieldSourceError::AlreadyInitialized);
        }

        write_config(&env, &YieldSourceConfig { admin: admin.clone(), asset: asset.clone() });
        write_total_shares(&env, 0);
        set_initialized(&env);

        emit_initialized(&env, &admin, &asset);
        Ok(())
    }

    // ========================================================
    // DEPOSIT / WITHDRAW (Write)
    // ========================================================

    /// Pull `amount` of the asset from `from` and mint shares to it.
    ///
    /// A deposit too small to mint a whole share is accepted and credited
    /// to existing owners.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, YieldSourceError> {
        from.require_auth();

        let config = Self::config(&env)?;
        if amount <= 0 {
            return Err(YieldSourceError::InvalidAmount);
        }

        let asset = token::Client::new(&env, &config.asset);
        let self_addr = env.current_contract_address();
        let managed = asset.balance(&self_addr);
        let total_shares = read_total_shares(&env);

        let shares = if total_shares == 0 {
            amount
        } else if managed <= 0 {
            return Err(YieldSourceError::Insolvent);
        } else {
            convert_shares(&env, amount, total_shares, managed, Rounding::Down)
        };

        asset.transfer(&from, &self_addr, &amount);

        write_shares(&env, &from, read_shares(&env, &from).saturating_add(shares));
        write_total_shares(&env, total_shares.saturating_add(shares));

        emit_deposit(&env, &from, amount, shares);
        Ok(shares)
    }

    /// Send `amount` of the asset to `to`, burning `owner`'s shares.
    /// Returns the shares burned.
    pub fn withdraw(
        env: Env,
        owner: Address,
        to: Address,
        amount: i128,
    ) -> Result<i128, YieldSourceError> {
        owner.require_auth();

        let config = Self::config(&env)?;
        if amount <= 0 {
            return Err(YieldSourceError::InvalidAmount);
        }

        let asset = token::Client::new(&env, &config.asset);
        let self_addr = env.current_contract_address();
        let managed = asset.balance(&self_addr);
        let total_shares = read_total_shares(&env);
        let owned = read_shares(&env, &owner);

        let claim = convert_shares(&env, owned, managed, total_shares, Rounding::Down);
        if amount > claim {
            log!(&env, "withdraw exceeds claim", owner, amount, claim);
            return Err(YieldSourceError::InsufficientShares);
        }

        let burned = convert_shares(&env, amount, total_shares, managed, Rounding::Up).min(owned);

        write_shares(&env, &owner, owned - burned);
        write_total_shares(&env, total_shares - burned);

        asset.transfer(&self_addr, &to, &amount);

        emit_withdraw(&env, &owner, &to, amount, burned);
        Ok(burned)
    }

    /// Admin hook for tests and drills: move `bps` of the managed balance
    /// out to the admin without burning shares.
    pub fn simulate_loss(env: Env, bps: u32) -> Result<i128, YieldSourceError> {
        let config = Self::config(&env)?;
        config.admin.require_auth();

        if bps as i128 > BPS_DENOMINATOR {
            return Err(YieldSourceError::InvalidAmount);
        }

        let asset = token::Client::new(&env, &config.asset);
        let self_addr = env.current_contract_address();
        let lost = asset.balance(&self_addr) * bps as i128 / BPS_DENOMINATOR;
        if lost > 0 {
            asset.transfer(&self_addr, &config.admin, &lost);
        }

        emit_loss(&env, bps, lost);
        Ok(lost)
    }

    // ========================================================
    // VIEW FUNCTIONS (Read)
    // ========================================================

    pub fn asset(env: Env) -> Result<Address, YieldSourceError> {
        Ok(Self::config(&env)?.asset)
    }

    /// Asset amount `owner`'s shares redeem for, rounded down
    pub fn total_assets(env: Env, owner: Address) -> Result<i128, YieldSourceError> {
        let config = Self::config(&env)?;
        let managed = token::Client::new(&env, &config.asset).balance(&env.current_contract_address());
        Ok(convert_shares(
            &env,
            read_shares(&env, &owner),
            managed,
            read_total_shares(&env),
            Rounding::Down,
        ))
    }

    pub fn total_managed(env: Env) -> Result<i128, YieldSourceError> {
        let config = Self::config(&env)?;
        Ok(token::Client::new(&env, &config.asset).balance(&env.current_contract_address()))
    }

    pub fn shares_of(env: Env, owner: Address) -> i128 {
        read_shares(&env, &owner)
    }

    pub fn total_shares(env: Env) -> i128 {
        read_total_shares(&env)
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn config(env: &Env) -> Result<YieldSourceConfig, YieldSourceError> {
        read_config(env).ok_or(YieldSourceError::NotInitialized)
    }
}
