// Share mint and burn math

use belugahook_math::{convert_shares, get_amounts_for_liquidity, Rounding};
use soroban_sdk::Env;

use crate::error::VaultError;
use crate::jit::PriceWindow;
use crate::types::VaultState;

/// Amounts a depositor pays for `shares`, rounded up.
///
/// The first deposit prices shares as units of liquidity over the window
/// at the current price; later deposits pay a pro-rata slice of the net
/// balances.
pub fn preview_add(
    env: &Env,
    total_supply: i128,
    net0: i128,
    net1: i128,
    shares: i128,
    window: &PriceWindow,
) -> (i128, i128) {
    if shares <= 0 {
        return (0, 0);
    }

    if total_supply <= 0 {
        return get_amounts_for_liquidity(
            shares,
            window.sqrt_price_lower,
            window.sqrt_price_upper,
            window.sqrt_price_current,
            Rounding::Up,
        );
    }

    (
        convert_shares(env, shares, net0, total_supply, Rounding::Up),
        convert_shares(env, shares, net1, total_supply, Rounding::Up),
    )
}

/// Amounts paid out for burning `shares`, rounded down
pub fn preview_remove(
    env: &Env,
    total_supply: i128,
    net0: i128,
    net1: i128,
    shares: i128,
) -> (i128, i128) {
    (
        convert_shares(env, shares, net0, total_supply, Rounding::Down),
        convert_shares(env, shares, net1, total_supply, Rounding::Down),
    )
}

/// Validated deposit: amounts to pull and the state after minting
pub fn plan_add(
    env: &Env,
    state: &VaultState,
    net0: i128,
    net1: i128,
    shares: i128,
    window: &PriceWindow,
) -> Result<((i128, i128), VaultState), VaultError> {
    if shares <= 0 {
        return Err(VaultError::ZeroShares);
    }

    let (amount0, amount1) = preview_add(env, state.total_supply, net0, net1, shares, window);
    if amount0 == 0 && amount1 == 0 {
        return Err(VaultError::ZeroAmounts);
    }

    let next = VaultState {
        total_supply: state.total_supply.saturating_add(shares),
        ..state.clone()
    };
    Ok(((amount0, amount1), next))
}

/// Validated withdrawal: amounts to pay and the state after burning
pub fn plan_remove(
    env: &Env,
    state: &VaultState,
    net0: i128,
    net1: i128,
    shares: i128,
    balance: i128,
) -> Result<((i128, i128), VaultState), VaultError> {
    if shares <= 0 {
        return Err(VaultError::ZeroShares);
    }
    if shares > balance {
        return Err(VaultError::InsufficientShares {
            requested: shares,
            available: balance,
        });
    }

    let amounts = preview_remove(env, state.total_supply, net0, net1, shares);
    let next = VaultState {
        total_supply: state.total_supply - shares,
        ..state.clone()
    };
    Ok((amounts, next))
}
