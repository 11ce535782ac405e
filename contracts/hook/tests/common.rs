#![allow(dead_code)]

use belugahook_dynamic::types::*;
use belugahook_dynamic::{DynamicFeeHook, DynamicFeeHookClient};
use belugahook_math::{get_sqrt_ratio_at_tick, WAD};
use belugahook_yield_source::{YieldSourceVault, YieldSourceVaultClient};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error,
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

// Test constants
pub const T0: u64 = 1_700_000_000;
pub const INITIAL_FEE: u32 = 1_000;
pub const INITIAL_TARGET: u128 = WAD / 2;
pub const TICK_SPACING: i32 = 60;
pub const WINDOW_LOWER: i32 = -600;
pub const WINDOW_UPPER: i32 = 600;
pub const DEFAULT_SQRT_PRICE_X64: u128 = 1u128 << 64; // Price = 1.0
pub const DEFAULT_TICK: i32 = 0;
pub const FUNDING: i128 = 1_000_000_000_000;

// ============================================================
// MOCK ACCESS GATE
// ============================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum GateError {
    MissingRole = 1,
}

#[contracttype]
#[derive(Clone)]
enum GateKey {
    Grant(Address, Role),
}

/// Role table standing in for the permission system
#[contract]
pub struct MockGate;

#[contractimpl]
impl MockGate {
    pub fn grant(env: Env, account: Address, role: Role) {
        env.storage()
            .persistent()
            .set(&GateKey::Grant(account, role), &true);
    }

    pub fn revoke(env: Env, account: Address, role: Role) {
        env.storage()
            .persistent()
            .remove(&GateKey::Grant(account, role));
    }

    pub fn require_role(env: Env, account: Address, role: Role) {
        if !env.storage().persistent().has(&GateKey::Grant(account, role)) {
            panic_with_error!(&env, GateError::MissingRole);
        }
    }
}

// ============================================================
// MOCK HOST
// ============================================================

/// Pool runtime stand-in: drives the callbacks and settles JIT tokens.
/// The swap itself is simulated; `pnl0`/`pnl1` shift what comes back to
/// the hook and `slot_after` is where the price lands.
#[contract]
pub struct MockHost;

#[contractimpl]
impl MockHost {
    pub fn init_pool(env: Env, key: PoolKey, sqrt_price_x64: u128, tick: i32) {
        let hook = DynamicFeeHookClient::new(&env, &key.hooks);
        let me = env.current_contract_address();
        hook.before_initialize(&me, &key, &sqrt_price_x64);
        hook.after_initialize(&me, &key, &sqrt_price_x64, &tick);
    }

    pub fn modify_liquidity(env: Env, key: PoolKey, params: ModifyLiquidityParams) {
        let hook = DynamicFeeHookClient::new(&env, &key.hooks);
        let me = env.current_contract_address();
        if params.liquidity_delta >= 0 {
            hook.before_add_liquidity(&me, &key, &params);
            hook.after_add_liquidity(&me, &key, &params);
        } else {
            hook.before_remove_liquidity(&me, &key, &params);
            hook.after_remove_liquidity(&me, &key, &params);
        }
    }

    pub fn swap(
        env: Env,
        key: PoolKey,
        params: SwapParams,
        slot_after: Slot,
        pnl0: i128,
        pnl1: i128,
    ) -> BeforeSwapResult {
        let hook = DynamicFeeHookClient::new(&env, &key.hooks);
        let me = env.current_contract_address();

        let result = hook.before_swap(&me, &key, &params);
        let (back0, back1) = match &result.jit {
            Some(jit) => (jit.amount0 + pnl0, jit.amount1 + pnl1),
            None => (0, 0),
        };
        if back0 > 0 {
            TokenClient::new(&env, &key.currency0).transfer(&me, &key.hooks, &back0);
        }
        if back1 > 0 {
            TokenClient::new(&env, &key.currency1).transfer(&me, &key.hooks, &back1);
        }

        hook.after_swap(&me, &key, &params, &slot_after, &back0, &back1);
        result
    }
}

// ============================================================
// SETUP
// ============================================================

pub struct TestPool<'a> {
    pub hook: DynamicFeeHookClient<'a>,
    pub host: MockHostClient<'a>,
    pub gate: MockGateClient<'a>,
    pub owner: Address,
    pub manager: Address,
    pub poker: Address,
    pub token0: Address,
    pub token1: Address,
    pub key: PoolKey,
}

pub struct TestVault<'a> {
    pub pool: TestPool<'a>,
    pub source0: YieldSourceVaultClient<'a>,
    pub source1: YieldSourceVaultClient<'a>,
    pub treasury: Address,
}

pub fn default_params() -> PoolParams {
    PoolParams {
        min_fee: 500,
        max_fee: 10_000,
        ..PoolParams::preset(PoolType::Standard)
    }
}

pub fn default_config() -> PoolConfig {
    PoolConfig {
        initial_fee: INITIAL_FEE,
        initial_target_ratio: INITIAL_TARGET,
        pool_type: PoolType::Standard,
        is_configured: false,
    }
}

/// Two tokens, sorted
pub fn create_token_pair(env: &Env, admin: &Address) -> (Address, Address) {
    let a = create_token(env, admin);
    let b = create_token(env, admin);
    if a < b { (a, b) } else { (b, a) }
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, of: &Address) -> i128 {
    TokenClient::new(env, token).balance(of)
}

pub fn advance_time(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

/// Hook wired to a host and gate with roles granted; no pool yet
pub fn setup_hook(env: &Env) -> TestPool<'_> {
    setup_hook_with_native(env, false)
}

pub fn setup_hook_with_native(env: &Env, token0_is_native: bool) -> TestPool<'_> {
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = T0);

    let admin = Address::generate(env);
    let owner = Address::generate(env);
    let manager = Address::generate(env);
    let poker = Address::generate(env);
    let (token0, token1) = create_token_pair(env, &admin);

    let gate = MockGateClient::new(env, &env.register(MockGate, ()));
    let host = MockHostClient::new(env, &env.register(MockHost, ()));
    let hook = DynamicFeeHookClient::new(env, &env.register(DynamicFeeHook, ()));

    gate.grant(&owner, &Role::PoolOwner);
    gate.grant(&manager, &Role::YieldManager);
    gate.grant(&poker, &Role::FeePoker);

    let native = if token0_is_native { Some(token0.clone()) } else { None };
    hook.initialize(&admin, &host.address, &gate.address, &native, &(WAD / 2));

    let key = PoolKey {
        currency0: token0.clone(),
        currency1: token1.clone(),
        fee: 3_000,
        tick_spacing: TICK_SPACING,
        hooks: hook.address.clone(),
    };

    TestPool { hook, host, gate, owner, manager, poker, token0, token1, key }
}

/// Hook bound to an initialized pool at price 1.0
pub fn setup_pool(env: &Env) -> TestPool<'_> {
    let t = setup_hook(env);
    t.hook.set_pool_config(&t.owner, &default_config(), &default_params());
    t.host.init_pool(&t.key, &DEFAULT_SQRT_PRICE_X64, &DEFAULT_TICK);
    t
}

pub fn create_source<'a>(env: &'a Env, asset: &Address) -> YieldSourceVaultClient<'a> {
    let source = YieldSourceVaultClient::new(env, &env.register(YieldSourceVault, ()));
    source.initialize(&Address::generate(env), asset);
    source
}

/// Pool plus yield sources, a `[-600, 600)` window, 10% tax and a treasury
pub fn setup_vault(env: &Env) -> TestVault<'_> {
    let pool = setup_pool(env);
    let source0 = create_source(env, &pool.token0);
    let source1 = create_source(env, &pool.token1);
    let treasury = Address::generate(env);

    pool.hook.set_yield_source(&pool.manager, &pool.token0, &Some(source0.address.clone()));
    pool.hook.set_yield_source(&pool.manager, &pool.token1, &Some(source1.address.clone()));
    pool.hook.set_tick_range(&pool.manager, &WINDOW_LOWER, &WINDOW_UPPER);
    pool.hook.set_yield_tax_pips(&pool.manager, &100_000);
    pool.hook.set_yield_treasury(&pool.manager, &Some(treasury.clone()));

    TestVault { pool, source0, source1, treasury }
}

/// A funded depositor
pub fn funded_user(env: &Env, pool: &TestPool) -> Address {
    let user = Address::generate(env);
    mint_tokens(env, &pool.token0, &user, FUNDING);
    mint_tokens(env, &pool.token1, &user, FUNDING);
    user
}

pub fn swap_params() -> SwapParams {
    SwapParams {
        zero_for_one: true,
        amount_specified: 1_000_000,
        sqrt_price_limit_x64: 0,
    }
}

pub fn slot_at(tick: i32) -> Slot {
    Slot {
        sqrt_price_x64: get_sqrt_ratio_at_tick(tick),
        tick,
    }
}

pub fn liquidity_params(delta: i128) -> ModifyLiquidityParams {
    ModifyLiquidityParams {
        tick_lower: -TICK_SPACING,
        tick_upper: TICK_SPACING,
        liquidity_delta: delta,
    }
}
