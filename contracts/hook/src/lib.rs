#![no_std]

//! # BelugaHook Dynamic
//!
//! Logic unit bound to a single host pool. It steers the pool's dynamic
//! fee from an externally reported activity ratio and parks liquidity
//! deposited by its shareholders in yield sources, lending it to the pool
//! just in time for swaps that trade inside the configured tick window.
//!
//! ## Functions:
//! - Host callbacks (8): before/after initialize, add liquidity,
//!   remove liquidity and swap
//! - Fee (4): set_pool_config, set_params, set_global_max_adj_rate, poke
//! - Vault (9): add, remove, transfer_shares, collect_accumulated_tax,
//!   set_yield_source, set_tick_range, set_yield_tax_pips,
//!   set_yield_treasury, previews
//! - Lifecycle (5): initialize, activate, deactivate, pause, unpause

use belugahook_fee::{
    adjust, configure, next_adjustment_time, validate_global_rate, validate_params, FeeError,
};
use belugahook_math::in_tick_window;
use belugahook_vault::{self as engine, PriceWindow, VaultError};
use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, Symbol};

// Local modules
mod error;
mod events;
pub mod interfaces;
mod lifecycle;
mod storage;
pub mod types;
mod vault;

pub use error::HookError;
use events::*;
use lifecycle::*;
use storage::*;
use types::*;

#[contract]
pub struct DynamicFeeHook;

#[contractimpl]
impl DynamicFeeHook {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Wire the hook to its host and permission gate
    ///
    /// # Arguments
    /// * `deployer` - Account authorizing the setup
    /// * `host` - Pool-management runtime that will drive the callbacks
    /// * `gate` - Role gate consulted for privileged calls
    /// * `native_asset` - Native asset, never routed to a yield source
    /// * `global_max_adj_rate` - Cap on a single fee step as a fraction
    ///   of the current fee (WAD)
    pub fn initialize(
        env: Env,
        deployer: Address,
        host: Address,
        gate: Address,
        native_asset: Option<Address>,
        global_max_adj_rate: u128,
    ) -> Result<(), HookError> {
        deployer.require_auth();

        if is_initialized(&env) {
            return Err(HookError::AlreadyInitialized);
        }

        let self_addr = env.current_contract_address();
        if host == self_addr || gate == self_addr {
            return Err(HookError::InvalidAddress);
        }

        validate_global_rate(global_max_adj_rate)?;

        write_hook_config(
            &env,
            &HookConfig {
                deployer,
                host: host.clone(),
                gate: gate.clone(),
                native_asset,
            },
        );
        write_global_max_adj_rate(&env, global_max_adj_rate);

        emit_initialized(&env, &host, &gate, global_max_adj_rate);
        Ok(())
    }

    /// Register the configuration the pool will be initialized with.
    /// Replaceable until the host initializes the pool.
    pub fn set_pool_config(
        env: Env,
        caller: Address,
        config: PoolConfig,
        params: PoolParams,
    ) -> Result<(), HookError> {
        require_role(&env, &caller, Role::PoolOwner)?;

        if read_pool_key(&env).is_some() {
            return Err(HookError::PoolAlreadyConfigured);
        }

        configure(
            config.initial_fee,
            config.initial_target_ratio,
            &params,
            env.ledger().timestamp(),
        )?;

        write_pool_config(
            &env,
            &PoolConfig {
                is_configured: false,
                ..config
            },
        );
        write_pool_params(&env, &params);

        emit_params_updated(&env, &params);
        Ok(())
    }

    // ========================================================
    // HOST CALLBACKS: INITIALIZE
    // ========================================================

    pub fn before_initialize(
        env: Env,
        sender: Address,
        key: PoolKey,
        sqrt_price_x64: u128,
    ) -> Result<Symbol, HookError> {
        Self::check_initialize(&env, &sender, &key, sqrt_price_x64)?;
        Ok(Symbol::new(&env, "before_initialize"))
    }

    /// Bind the pool, start the fee controller and cache the opening price
    pub fn after_initialize(
        env: Env,
        sender: Address,
        key: PoolKey,
        sqrt_price_x64: u128,
        tick: i32,
    ) -> Result<Symbol, HookError> {
        let config = Self::check_initialize(&env, &sender, &key, sqrt_price_x64)?;
        let params = read_pool_params(&env).ok_or(HookError::LogicNotSet)?;

        let fee_state = configure(
            config.initial_fee,
            config.initial_target_ratio,
            &params,
            env.ledger().timestamp(),
        )?;

        let id = pool_id(&env, &key);
        write_fee_state(&env, &fee_state);
        write_pool_config(
            &env,
            &PoolConfig {
                is_configured: true,
                ..config.clone()
            },
        );
        write_pool_binding(&env, &key, &id);
        write_slot(&env, &Slot { sqrt_price_x64, tick });
        write_status(&env, PoolStatus::Active);

        emit_pool_configured(
            &env,
            &id,
            config.initial_fee,
            config.initial_target_ratio,
            config.pool_type,
        );
        Ok(Symbol::new(&env, "after_initialize"))
    }

    // ========================================================
    // HOST CALLBACKS: LIQUIDITY
    // ========================================================

    pub fn before_add_liquidity(
        env: Env,
        sender: Address,
        key: PoolKey,
        _params: ModifyLiquidityParams,
    ) -> Result<Symbol, HookError> {
        require_callable(&env, &sender, &key)?;
        Ok(Symbol::new(&env, "before_add_liquidity"))
    }

    pub fn after_add_liquidity(
        env: Env,
        sender: Address,
        key: PoolKey,
        _params: ModifyLiquidityParams,
    ) -> Result<Symbol, HookError> {
        require_callable(&env, &sender, &key)?;
        Ok(Symbol::new(&env, "after_add_liquidity"))
    }

    pub fn before_remove_liquidity(
        env: Env,
        sender: Address,
        key: PoolKey,
        _params: ModifyLiquidityParams,
    ) -> Result<Symbol, HookError> {
        require_callable(&env, &sender, &key)?;
        Ok(Symbol::new(&env, "before_remove_liquidity"))
    }

    pub fn after_remove_liquidity(
        env: Env,
        sender: Address,
        key: PoolKey,
        _params: ModifyLiquidityParams,
    ) -> Result<Symbol, HookError> {
        require_callable(&env, &sender, &key)?;
        Ok(Symbol::new(&env, "after_remove_liquidity"))
    }

    // ========================================================
    // HOST CALLBACKS: SWAP
    // ========================================================

    /// Price the swap with the dynamic fee and, when the pool trades
    /// inside the window, lend the vault's liquidity to it.
    ///
    /// Lent tokens are transferred to `sender` before this returns; the
    /// host hands them back through `after_swap` in the same transaction.
    /// Vault writes stay locked until then. A lock the host never released
    /// lapses with the ledger it was taken in.
    pub fn before_swap(
        env: Env,
        sender: Address,
        key: PoolKey,
        params: SwapParams,
    ) -> Result<BeforeSwapResult, HookError> {
        let key = require_callable(&env, &sender, &key)?;
        let fee = read_fee_state(&env)
            .ok_or(HookError::PoolNotConfigured)?
            .current_fee;

        let jit = Self::provide_jit(&env, &key, &sender, &params)?;

        Ok(BeforeSwapResult {
            ack: Symbol::new(&env, "before_swap"),
            fee_override: Some(fee),
            jit,
        })
    }

    /// Redeposit whatever the host returned from the JIT position and
    /// record the post-swap price.
    ///
    /// # Arguments
    /// * `slot_after` - Pool price once the swap settled
    /// * `jit_return0` / `jit_return1` - Tokens the host transferred back
    ///   to the hook for the JIT position
    pub fn after_swap(
        env: Env,
        sender: Address,
        key: PoolKey,
        _params: SwapParams,
        slot_after: Slot,
        jit_return0: i128,
        jit_return1: i128,
    ) -> Result<Symbol, HookError> {
        let key = require_callable(&env, &sender, &key)?;

        Self::settle_jit(&env, &key, jit_return0, jit_return1)?;
        write_slot(&env, &slot_after);

        Ok(Symbol::new(&env, "after_swap"))
    }

    // ========================================================
    // LIFECYCLE
    // ========================================================

    /// Reopen the pool. While paused, only the state resumed on unpause
    /// changes.
    pub fn activate(env: Env, caller: Address) -> Result<(), HookError> {
        require_role(&env, &caller, Role::PoolOwner)?;
        let id = bound_pool_id(&env)?;
        let status = match read_status(&env) {
            PoolStatus::Paused(_) => PoolStatus::Paused(true),
            _ => PoolStatus::Active,
        };
        write_status(&env, status);
        emit_pool_activated(&env, &id);
        Ok(())
    }

    pub fn deactivate(env: Env, caller: Address) -> Result<(), HookError> {
        require_role(&env, &caller, Role::PoolOwner)?;
        let id = bound_pool_id(&env)?;
        let status = match read_status(&env) {
            PoolStatus::Paused(_) => PoolStatus::Paused(false),
            _ => PoolStatus::Inactive,
        };
        write_status(&env, status);
        emit_pool_deactivated(&env, &id);
        Ok(())
    }

    /// Emergency stop for every callback and vault deposit
    pub fn pause(env: Env, caller: Address) -> Result<(), HookError> {
        require_role(&env, &caller, Role::PoolOwner)?;
        bound_pool_id(&env)?;

        let status = match read_status(&env) {
            PoolStatus::Active => PoolStatus::Paused(true),
            PoolStatus::Inactive => PoolStatus::Paused(false),
            PoolStatus::Unconfigured => return Err(HookError::PoolNotConfigured),
            paused => paused,
        };
        write_status(&env, status);
        emit_paused(&env, &caller);
        Ok(())
    }

    /// Lift the pause, restoring the active or inactive state it covered
    pub fn unpause(env: Env, caller: Address) -> Result<(), HookError> {
        require_role(&env, &caller, Role::PoolOwner)?;

        if let PoolStatus::Paused(resume_active) = read_status(&env) {
            let status = if resume_active {
                PoolStatus::Active
            } else {
                PoolStatus::Inactive
            };
            write_status(&env, status);
            emit_unpaused(&env, &caller);
        }
        Ok(())
    }

    // ========================================================
    // FEE CONTROLLER
    // ========================================================

    /// Run one controller step for a freshly measured activity ratio.
    /// Returns the fee now in force.
    pub fn poke(env: Env, caller: Address, current_ratio: u128) -> Result<u32, HookError> {
        require_role(&env, &caller, Role::FeePoker)?;

        if current_ratio == 0 {
            return Err(HookError::InvalidRatio);
        }

        let id = bound_pool_id(&env)?;
        let state = read_fee_state(&env).ok_or(HookError::PoolNotConfigured)?;
        let params = read_pool_params(&env).ok_or(HookError::PoolNotConfigured)?;

        enter(&env)?;

        let adjustment = adjust(
            &env,
            &state,
            &params,
            current_ratio,
            read_global_max_adj_rate(&env),
            env.ledger().timestamp(),
        )
        .map_err(|err| {
            if let FeeError::CooldownNotElapsed { next_allowed, min_period } = err {
                log!(&env, "cooldown not elapsed", id, next_allowed, min_period);
            }
            HookError::from(err)
        })?;

        write_fee_state(&env, &adjustment.state);
        exit(&env);

        emit_fee_updated(
            &env,
            &id,
            adjustment.old_fee,
            adjustment.new_fee,
            adjustment.old_target_ratio,
            adjustment.new_target_ratio,
        );
        Ok(adjustment.new_fee)
    }

    /// Replace the controller parameters. A stored fee left outside the
    /// new bounds is clamped by the next poke.
    pub fn set_params(env: Env, caller: Address, params: PoolParams) -> Result<(), HookError> {
        require_role(&env, &caller, Role::PoolOwner)?;

        if read_pool_config(&env).is_none() {
            return Err(HookError::PoolNotConfigured);
        }
        validate_params(&params)?;

        write_pool_params(&env, &params);
        emit_params_updated(&env, &params);
        Ok(())
    }

    pub fn set_global_max_adj_rate(env: Env, caller: Address, rate: u128) -> Result<(), HookError> {
        require_role(&env, &caller, Role::PoolOwner)?;
        validate_global_rate(rate)?;

        let old = read_global_max_adj_rate(&env);
        write_global_max_adj_rate(&env, rate);
        emit_max_adj_rate_updated(&env, old, rate);
        Ok(())
    }

    // ========================================================
    // VAULT (Write)
    // ========================================================

    /// Mint `shares` to `depositor` against the amounts `preview_add`
    /// quotes. Returns the amounts pulled.
    pub fn add(env: Env, depositor: Address, shares: i128) -> Result<(i128, i128), HookError> {
        depositor.require_auth();

        if shares <= 0 {
            return Err(HookError::ZeroShares);
        }
        let key = require_active(&env)?;
        if !vault::sources_set(&env, &key) {
            return Err(HookError::YieldSourceNotSet);
        }

        enter(&env)?;

        let (state, gross0, gross1) = vault::accrued_state(&env, &key);
        let (net0, net1) = engine::net_assets(&state, gross0, gross1);
        let window = Self::price_window(&env)?;
        let ((amount0, amount1), next) =
            engine::plan_add(&env, &state, net0, net1, shares, &window)?;

        let self_addr = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(&env, &key.currency0).transfer(&depositor, &self_addr, &amount0);
        }
        if amount1 > 0 {
            token::Client::new(&env, &key.currency1).transfer(&depositor, &self_addr, &amount1);
        }
        vault::deposit(&env, &key.currency0, amount0)?;
        vault::deposit(&env, &key.currency1, amount1)?;

        let balance = read_shares(&env, &depositor)
            .checked_add(shares)
            .ok_or(HookError::Overflow)?;
        write_shares(&env, &depositor, balance);
        vault::resync(&env, &key, &next);

        exit(&env);

        emit_liquidity_added(&env, &depositor, shares, amount0, amount1);
        Ok((amount0, amount1))
    }

    /// Burn `shares` and pay the pro-rata net balances straight to `owner`.
    /// Works while the pool is inactive.
    pub fn remove(env: Env, owner: Address, shares: i128) -> Result<(i128, i128), HookError> {
        owner.require_auth();

        if shares <= 0 {
            return Err(HookError::ZeroShares);
        }
        require_unpaused(&env)?;
        let key = bound_pool(&env)?;

        enter(&env)?;

        let (state, gross0, gross1) = vault::accrued_state(&env, &key);
        let (net0, net1) = engine::net_assets(&state, gross0, gross1);
        let balance = read_shares(&env, &owner);
        let ((amount0, amount1), next) =
            engine::plan_remove(&env, &state, net0, net1, shares, balance).map_err(|err| {
                if let VaultError::InsufficientShares { requested, available } = err {
                    log!(&env, "insufficient shares", owner, requested, available);
                }
                HookError::from(err)
            })?;

        write_shares(&env, &owner, balance - shares);
        vault::withdraw(&env, &key.currency0, &owner, amount0)?;
        vault::withdraw(&env, &key.currency1, &owner, amount1)?;
        vault::resync(&env, &key, &next);

        exit(&env);

        emit_liquidity_removed(&env, &owner, shares, amount0, amount1);
        Ok((amount0, amount1))
    }

    /// Move shares between holders; supply is unchanged
    pub fn transfer_shares(
        env: Env,
        from: Address,
        to: Address,
        shares: i128,
    ) -> Result<(), HookError> {
        from.require_auth();

        if shares <= 0 {
            return Err(HookError::ZeroShares);
        }
        let from_balance = read_shares(&env, &from);
        if shares > from_balance {
            log!(&env, "insufficient shares", from, shares, from_balance);
            return Err(HookError::InsufficientShares);
        }
        if from == to {
            return Ok(());
        }

        let to_balance = read_shares(&env, &to)
            .checked_add(shares)
            .ok_or(HookError::Overflow)?;
        write_shares(&env, &from, from_balance - shares);
        write_shares(&env, &to, to_balance);

        emit_shares_transferred(&env, &from, &to, shares);
        Ok(())
    }

    /// Pay accrued yield tax to the treasury. Anyone may call.
    /// Returns `(0, 0)` when there is no treasury or nothing to pay.
    pub fn collect_accumulated_tax(env: Env) -> Result<(i128, i128), HookError> {
        let key = match read_pool_key(&env) {
            Some(key) => key,
            None => return Ok((0, 0)),
        };

        enter(&env)?;

        let (mut state, gross0, gross1) = vault::accrued_state(&env, &key);
        let treasury = match read_rehypothecation_config(&env).yield_treasury {
            Some(treasury) => treasury,
            None => {
                write_vault_state(&env, &state);
                exit(&env);
                return Ok((0, 0));
            }
        };

        let (amount0, amount1) = engine::collectible_tax(&state, gross0, gross1);
        vault::withdraw(&env, &key.currency0, &treasury, amount0)?;
        vault::withdraw(&env, &key.currency1, &treasury, amount1)?;

        state.accumulated_tax0 = 0;
        state.accumulated_tax1 = 0;
        vault::resync(&env, &key, &state);

        exit(&env);

        if amount0 > 0 || amount1 > 0 {
            emit_tax_collected(&env, &treasury, amount0, amount1);
        }
        Ok((amount0, amount1))
    }

    // ========================================================
    // REHYPOTHECATION CONFIG
    // ========================================================

    /// Point `currency` at a new yield source, migrating the full balance
    /// out of the previous one.
    pub fn set_yield_source(
        env: Env,
        caller: Address,
        currency: Address,
        source: Option<Address>,
    ) -> Result<(), HookError> {
        let hook = require_role(&env, &caller, Role::YieldManager)?;

        let source = source.ok_or(HookError::InvalidYieldSource)?;
        let key = bound_pool(&env)?;
        if currency != key.currency0 && currency != key.currency1 {
            return Err(HookError::InvalidCurrency);
        }
        if hook.native_asset.as_ref() == Some(&currency)
            || source == env.current_contract_address()
        {
            return Err(HookError::InvalidYieldSource);
        }

        let asset = match interfaces::YieldSourceClient::new(&env, &source).try_asset() {
            Ok(Ok(asset)) => Some(asset),
            _ => None,
        };
        if asset.as_ref() != Some(&currency) {
            log!(&env, "yield source rejected", source, asset);
            return Err(HookError::InvalidYieldSource);
        }

        enter(&env)?;

        let (state, _, _) = vault::accrued_state(&env, &key);
        let old = read_yield_source(&env, &currency);

        let mut migrated = 0;
        if let Some(old_source) = old.as_ref().filter(|old| **old != source) {
            let moved = vault::source_assets(&env, old_source);
            let held_before = vault::source_assets(&env, &source);
            vault::withdraw_from(&env, old_source, &env.current_contract_address(), moved);
            vault::deposit_into(&env, &currency, &source, moved);

            let received = vault::source_assets(&env, &source) - held_before;
            engine::check_migration(&env, moved, received).map_err(|err| {
                log!(&env, "migration slippage", moved, received);
                HookError::from(err)
            })?;
            migrated = moved;
        }

        write_yield_source(&env, &currency, &source);
        vault::resync(&env, &key, &state);

        exit(&env);

        emit_yield_source_updated(&env, &currency, &old, &source, migrated);
        Ok(())
    }

    /// Set the participation window `[tick_lower, tick_upper)`
    pub fn set_tick_range(
        env: Env,
        caller: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<(), HookError> {
        require_role(&env, &caller, Role::YieldManager)?;

        let key = bound_pool(&env)?;
        engine::validate_tick_range(tick_lower, tick_upper, key.tick_spacing)?;

        let mut config = read_rehypothecation_config(&env);
        config.tick_lower = tick_lower;
        config.tick_upper = tick_upper;
        write_rehypothecation_config(&env, &config);

        emit_tick_range_updated(&env, tick_lower, tick_upper);
        Ok(())
    }

    /// Change the yield tax. Yield earned so far is taxed at the old rate.
    pub fn set_yield_tax_pips(env: Env, caller: Address, pips: u32) -> Result<(), HookError> {
        require_role(&env, &caller, Role::YieldManager)?;
        engine::validate_tax_pips(pips)?;

        if let Some(key) = read_pool_key(&env) {
            let (state, _, _) = vault::accrued_state(&env, &key);
            write_vault_state(&env, &state);
        }

        let mut config = read_rehypothecation_config(&env);
        let old = config.yield_tax_pips;
        config.yield_tax_pips = pips;
        write_rehypothecation_config(&env, &config);

        emit_yield_tax_updated(&env, old, pips);
        Ok(())
    }

    pub fn set_yield_treasury(
        env: Env,
        caller: Address,
        treasury: Option<Address>,
    ) -> Result<(), HookError> {
        require_role(&env, &caller, Role::YieldManager)?;

        let treasury = treasury.ok_or(HookError::InvalidAddress)?;
        if treasury == env.current_contract_address() {
            return Err(HookError::InvalidAddress);
        }

        let mut config = read_rehypothecation_config(&env);
        let old = config.yield_treasury.clone();
        config.yield_treasury = Some(treasury.clone());
        write_rehypothecation_config(&env, &config);

        emit_yield_treasury_updated(&env, &old, &treasury);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn get_hook_config(env: Env) -> Result<HookConfig, HookError> {
        hook_config(&env)
    }

    pub fn get_pool_key(env: Env) -> Result<PoolKey, HookError> {
        bound_pool(&env)
    }

    pub fn get_pool_id(env: Env) -> Result<BytesN<32>, HookError> {
        bound_pool_id(&env)
    }

    pub fn get_status(env: Env) -> PoolStatus {
        read_status(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        is_paused(&env)
    }

    /// Last price observed through the swap callbacks
    pub fn get_slot(env: Env) -> Result<Slot, HookError> {
        read_slot(&env).ok_or(HookError::PoolNotConfigured)
    }

    pub fn get_pool_config(env: Env) -> Result<PoolConfig, HookError> {
        read_pool_config(&env).ok_or(HookError::PoolNotConfigured)
    }

    pub fn get_params(env: Env) -> Result<PoolParams, HookError> {
        read_pool_params(&env).ok_or(HookError::PoolNotConfigured)
    }

    pub fn get_fee_state(env: Env) -> Result<FeeState, HookError> {
        read_fee_state(&env).ok_or(HookError::PoolNotConfigured)
    }

    /// Fee the host prices swaps with
    pub fn get_current_fee(env: Env) -> Result<u32, HookError> {
        Ok(Self::get_fee_state(env)?.current_fee)
    }

    pub fn get_global_max_adj_rate(env: Env) -> u128 {
        read_global_max_adj_rate(&env)
    }

    /// Earliest timestamp at which `poke` is accepted again
    pub fn next_adjustment_time(env: Env) -> Result<u64, HookError> {
        let state = read_fee_state(&env).ok_or(HookError::PoolNotConfigured)?;
        let params = read_pool_params(&env).ok_or(HookError::PoolNotConfigured)?;
        Ok(next_adjustment_time(&state, &params))
    }

    /// Amounts `add` would pull for `shares`, rounded up
    pub fn preview_add(env: Env, shares: i128) -> Result<(i128, i128), HookError> {
        let key = bound_pool(&env)?;
        let (state, gross0, gross1) = vault::accrued_state(&env, &key);
        let (net0, net1) = engine::net_assets(&state, gross0, gross1);
        let window = Self::price_window(&env)?;
        Ok(engine::preview_add(&env, state.total_supply, net0, net1, shares, &window))
    }

    /// Amounts `remove` would pay for `shares`, rounded down
    pub fn preview_remove(env: Env, shares: i128) -> Result<(i128, i128), HookError> {
        let key = bound_pool(&env)?;
        let (state, gross0, gross1) = vault::accrued_state(&env, &key);
        let (net0, net1) = engine::net_assets(&state, gross0, gross1);
        Ok(engine::preview_remove(&env, state.total_supply, net0, net1, shares))
    }

    pub fn balance_of(env: Env, holder: Address) -> i128 {
        read_shares(&env, &holder)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_vault_state(&env).total_supply
    }

    /// Net balances backing the shares, tax accrued up to now
    pub fn total_assets(env: Env) -> Result<(i128, i128), HookError> {
        let key = bound_pool(&env)?;
        let (state, gross0, gross1) = vault::accrued_state(&env, &key);
        Ok(engine::net_assets(&state, gross0, gross1))
    }

    /// Tax owed to the treasury, accrued up to now
    pub fn get_accumulated_tax(env: Env) -> Result<(i128, i128), HookError> {
        let key = bound_pool(&env)?;
        let (state, _, _) = vault::accrued_state(&env, &key);
        Ok((state.accumulated_tax0, state.accumulated_tax1))
    }

    pub fn get_vault_state(env: Env) -> VaultState {
        read_vault_state(&env)
    }

    pub fn get_rehypothecation_config(env: Env) -> RehypothecationConfig {
        read_rehypothecation_config(&env)
    }

    pub fn get_yield_source(env: Env, currency: Address) -> Option<Address> {
        read_yield_source(&env, &currency)
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn check_initialize(
        env: &Env,
        sender: &Address,
        key: &PoolKey,
        sqrt_price_x64: u128,
    ) -> Result<PoolConfig, HookError> {
        require_host(env, sender)?;

        let config = read_pool_config(env).ok_or(HookError::LogicNotSet)?;
        if key.hooks != env.current_contract_address() || key.currency0 >= key.currency1 {
            return Err(HookError::InvalidPoolKey);
        }
        if config.is_configured || read_pool_key(env).is_some() {
            return Err(HookError::PoolAlreadyConfigured);
        }
        if sqrt_price_x64 == 0 {
            return Err(HookError::InvalidParameter);
        }
        Ok(config)
    }

    fn price_window(env: &Env) -> Result<PriceWindow, HookError> {
        let slot = read_slot(env).ok_or(HookError::PoolNotConfigured)?;
        Ok(PriceWindow::new(
            &read_rehypothecation_config(env),
            slot.sqrt_price_x64,
        ))
    }

    /// Withdraw the JIT-sized amounts to the host. Holds the lock until
    /// `after_swap` settles.
    fn provide_jit(
        env: &Env,
        key: &PoolKey,
        host: &Address,
        params: &SwapParams,
    ) -> Result<Option<JitLiquidity>, HookError> {
        if read_vault_state(env).total_supply <= 0 || !vault::sources_set(env, key) {
            return Ok(None);
        }

        let slot = read_slot(env).ok_or(HookError::PoolNotConfigured)?;
        let config = read_rehypothecation_config(env);
        if !in_tick_window(slot.tick, config.tick_lower, config.tick_upper) {
            return Ok(None);
        }

        enter(env)?;

        let (state, gross0, gross1) = vault::accrued_state(env, key);
        let (net0, net1) = engine::net_assets(&state, gross0, gross1);
        write_vault_state(env, &state);

        let sizing = match engine::size_jit(&config, slot.tick, slot.sqrt_price_x64, net0, net1) {
            Some(sizing) => sizing,
            None => {
                exit(env);
                return Ok(None);
            }
        };

        vault::withdraw(env, &key.currency0, host, sizing.amount0)?;
        vault::withdraw(env, &key.currency1, host, sizing.amount1)?;
        write_jit_position(env, &sizing);

        log!(env, "jit provided", params.zero_for_one, params.amount_specified);
        emit_jit_provided(
            env,
            &bound_pool_id(env)?,
            slot.tick,
            sizing.liquidity,
            sizing.amount0,
            sizing.amount1,
        );

        Ok(Some(JitLiquidity {
            tick_lower: config.tick_lower,
            tick_upper: config.tick_upper,
            liquidity: sizing.liquidity,
            amount0: sizing.amount0,
            amount1: sizing.amount1,
        }))
    }

    /// Put returned JIT tokens back to work. Returns are capped at what
    /// the hook actually holds.
    fn settle_jit(
        env: &Env,
        key: &PoolKey,
        jit_return0: i128,
        jit_return1: i128,
    ) -> Result<(), HookError> {
        let position = match take_jit_position(env) {
            Some(position) => position,
            None => return Ok(()),
        };

        let self_addr = env.current_contract_address();
        let held0 = token::Client::new(env, &key.currency0).balance(&self_addr);
        let held1 = token::Client::new(env, &key.currency1).balance(&self_addr);
        let returned0 = jit_return0.min(held0).max(0);
        let returned1 = jit_return1.min(held1).max(0);

        vault::deposit(env, &key.currency0, returned0)?;
        vault::deposit(env, &key.currency1, returned1)?;
        vault::resync(env, key, &read_vault_state(env));

        exit(env);

        emit_jit_settled(
            env,
            &bound_pool_id(env)?,
            position.liquidity,
            returned0,
            returned1,
        );
        Ok(())
    }
}
