mod common;

use belugahook_dynamic::HookError;
use soroban_sdk::{testutils::Address as _, Address, Env};

const SHARES: i128 = 1_000_000_000;

#[test]
fn test_first_add_pays_preview() {
    let env = Env::default();
    let v = common::setup_vault(&env);
    let t = &v.pool;
    let user = common::funded_user(&env, t);

    let quoted = t.hook.preview_add(&SHARES);
    assert!(quoted.0 > 0 && quoted.1 > 0);

    let paid = t.hook.add(&user, &SHARES);
    assert_eq!(paid, quoted);
    assert_eq!(t.hook.balance_of(&user), SHARES);
    assert_eq!(t.hook.total_supply(), SHARES);

    assert_eq!(common::balance(&env, &t.token0, &user), common::FUNDING - paid.0);
    assert_eq!(common::balance(&env, &t.token1, &user), common::FUNDING - paid.1);
    // Everything sits in the sources, nothing idles on the hook
    assert_eq!(v.source0.total_assets(&t.hook.address), paid.0);
    assert_eq!(v.source1.total_assets(&t.hook.address), paid.1);
    assert_eq!(common::balance(&env, &t.token0, &t.hook.address), 0);
    assert_eq!(t.hook.total_assets(), paid);
}

#[test]
fn test_add_then_remove_returns_deposit() {
    let env = Env::default();
    let v = common::setup_vault(&env);
    let t = &v.pool;
    let user = common::funded_user(&env, t);

    let paid = t.hook.add(&user, &SHARES);
    assert_eq!(t.hook.preview_remove(&SHARES), paid);

    let received = t.hook.remove(&user, &SHARES);
    assert_eq!(received, paid);
    assert_eq!(t.hook.balance_of(&user), 0);
    assert_eq!(t.hook.total_supply(), 0);
    assert_eq!(common::balance(&env, &t.token0, &user), common::FUNDING);
    assert_eq!(common::balance(&env, &t.token1, &user), common::FUNDING);
}

#[test]
fn test_later_add_is_pro_rata() {
    let env = Env::default();
    let v = common::setup_vault(&env);
    let t = &v.pool;
    let alice = common::funded_user(&env, t);
    let bob = common::funded_user(&env, t);

    let first = t.hook.add(&alice, &SHARES);
    let second = t.hook.add(&bob, &(SHARES / 2));

    // Rounded up in the vault's favor
    assert!(second.0 * 2 >= first.0 && second.0 * 2 <= first.0 + 2);
    assert!(second.1 * 2 >= first.1 && second.1 * 2 <= first.1 + 2);
    assert_eq!(t.hook.total_supply(), SHARES + SHARES / 2);

    // Bob never gets out more than he put in
    let out = t.hook.remove(&bob, &(SHARES / 2));
    assert!(out.0 <= second.0 && out.1 <= second.1);
}

#[test]
fn test_add_and_remove_reject_bad_share_counts() {
    let env = Env::default();
    let v = common::setup_vault(&env);
    let t = &v.pool;
    let user = common::funded_user(&env, t);

    assert_eq!(t.hook.try_add(&user, &0), Err(Ok(HookError::ZeroShares)));
    assert_eq!(t.hook.try_remove(&user, &-1), Err(Ok(HookError::ZeroShares)));

    t.hook.add(&user, &SHARES);
    assert_eq!(
        t.hook.try_remove(&user, &(SHARES + 1)),
        Err(Ok(HookError::InsufficientShares))
    );
    let stranger = Address::generate(&env);
    assert_eq!(
        t.hook.try_remove(&stranger, &1),
        Err(Ok(HookError::InsufficientShares))
    );
}

#[test]
fn test_add_without_sources() {
    let env = Env::default();
    let t = common::setup_pool(&env);
    let user = common::funded_user(&env, &t);

    assert_eq!(
        t.hook.try_add(&user, &SHARES),
        Err(Ok(HookError::YieldSourceNotSet))
    );
}

#[test]
fn test_add_with_empty_window() {
    let env = Env::default();
    let t = common::setup_pool(&env);
    let source0 = common::create_source(&env, &t.token0);
    let source1 = common::create_source(&env, &t.token1);
    t.hook.set_yield_source(&t.manager, &t.token0, &Some(source0.address.clone()));
    t.hook.set_yield_source(&t.manager, &t.token1, &Some(source1.address.clone()));
    let user = common::funded_user(&env, &t);

    // Default window is [0, 0): no liquidity can back a share
    assert_eq!(t.hook.preview_add(&SHARES), (0, 0));
    assert_eq!(t.hook.try_add(&user, &SHARES), Err(Ok(HookError::ZeroAmounts)));
}

#[test]
fn test_single_sided_first_add_above_window() {
    let env = Env::default();
    let v = common::setup_vault(&env);
    let t = &v.pool;
    // Price sits above the window, only token1 backs the position
    t.hook
        .set_tick_range(&t.manager, &(-2 * common::WINDOW_UPPER), &(-common::WINDOW_UPPER));
    let user = common::funded_user(&env, t);

    let paid = t.hook.add(&user, &SHARES);
    assert_eq!(paid.0, 0);
    assert!(paid.1 > 0);
}

// ============================================================
// STATUS GATES
// ============================================================

#[test]
fn test_inactive_pool_blocks_add_but_not_remove() {
    let env = Env::default();
    let v = common::setup_vault(&env);
    let t = &v.pool;
    let user = common::funded_user(&env, t);
    let paid = t.hook.add(&user, &SHARES);

    t.hook.deactivate(&t.owner);
    assert_eq!(t.hook.try_add(&user, &SHARES), Err(Ok(HookError::PoolPaused)));
    assert_eq!(t.hook.remove(&user, &SHARES), paid);
}

#[test]
fn test_pause_blocks_add_and_remove() {
    let env = Env::default();
    let v = common::setup_vault(&env);
    let t = &v.pool;
    let user = common::funded_user(&env, t);
    t.hook.add(&user, &SHARES);

    t.hook.pause(&t.owner);
    assert_eq!(t.hook.try_add(&user, &SHARES), Err(Ok(HookError::ProtocolPaused)));
    assert_eq!(t.hook.try_remove(&user, &SHARES), Err(Ok(HookError::ProtocolPaused)));

    t.hook.unpause(&t.owner);
    t.hook.remove(&user, &SHARES);
}

// ============================================================
// LOSSES
// ============================================================

#[test]
fn test_source_loss_is_shared_by_holders() {
    let env = Env::default();
    let v = common::setup_vault(&env);
    let t = &v.pool;
    let user = common::funded_user(&env, t);
    let paid = t.hook.add(&user, &SHARES);

    // Half of token0 is gone
    v.source0.simulate_loss(&5_000);
    let lost = paid.0 / 2;

    let (out0, out1) = t.hook.preview_remove(&SHARES);
    assert_eq!(out0, paid.0 - lost);
    assert_eq!(out1, paid.1);
    // Losses are never taxed
    assert_eq!(t.hook.get_accumulated_tax(), (0, 0));

    assert_eq!(t.hook.remove(&user, &SHARES), (out0, out1));
}

// ============================================================
// SHARE TRANSFERS
// ============================================================

#[test]
fn test_transfer_shares() {
    let env = Env::default();
    let v = common::setup_vault(&env);
    let t = &v.pool;
    let alice = common::funded_user(&env, t);
    let bob = Address::generate(&env);
    t.hook.add(&alice, &SHARES);

    t.hook.transfer_shares(&alice, &bob, &(SHARES / 4));
    assert_eq!(t.hook.balance_of(&alice), SHARES - SHARES / 4);
    assert_eq!(t.hook.balance_of(&bob), SHARES / 4);
    assert_eq!(t.hook.total_supply(), SHARES);

    assert_eq!(
        t.hook.try_transfer_shares(&bob, &alice, &SHARES),
        Err(Ok(HookError::InsufficientShares))
    );
    assert_eq!(
        t.hook.try_transfer_shares(&bob, &alice, &0),
        Err(Ok(HookError::ZeroShares))
    );

    // Bob redeems what he was given
    let out = t.hook.remove(&bob, &(SHARES / 4));
    assert!(out.0 > 0 && out.1 > 0);
}

#[test]
fn test_equal_shares_quote_equal_amounts() {
    let env = Env::default();
    let v = common::setup_vault(&env);
    let t = &v.pool;
    let alice = common::funded_user(&env, t);
    let bob = common::funded_user(&env, t);
    t.hook.add(&alice, &SHARES);

    let quote = t.hook.preview_add(&SHARES);
    assert_eq!(t.hook.preview_add(&SHARES), quote);
    t.hook.add(&bob, &SHARES);

    assert_eq!(
        t.hook.preview_remove(&t.hook.balance_of(&alice)),
        t.hook.preview_remove(&t.hook.balance_of(&bob))
    );
}
