// Yield source plumbing for the rehypothecation vault

use belugahook_vault::{accrue_tax, checkpoint, VaultState};
use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    vec, Address, Env, IntoVal, Symbol,
};

use crate::error::HookError;
use crate::interfaces::YieldSourceClient;
use crate::storage::*;
use crate::types::PoolKey;

// ============================================================
// BALANCES
// ============================================================

/// What the hook's position in `source` redeems for
pub fn source_assets(env: &Env, source: &Address) -> i128 {
    YieldSourceClient::new(env, source).total_assets(&env.current_contract_address())
}

fn currency_assets(env: &Env, currency: &Address) -> i128 {
    read_yield_source(env, currency)
        .map(|source| source_assets(env, &source))
        .unwrap_or(0)
}

/// Gross balances held in the yield sources, tax included
pub fn gross_assets(env: &Env, key: &PoolKey) -> (i128, i128) {
    (
        currency_assets(env, &key.currency0),
        currency_assets(env, &key.currency1),
    )
}

pub fn sources_set(env: &Env, key: &PoolKey) -> bool {
    read_yield_source(env, &key.currency0).is_some()
        && read_yield_source(env, &key.currency1).is_some()
}

// ============================================================
// TAX CHECKPOINTS
// ============================================================

/// Vault state with tax accrued up to now, plus the gross balances it
/// was computed from. Nothing is written.
pub fn accrued_state(env: &Env, key: &PoolKey) -> (VaultState, i128, i128) {
    let state = read_vault_state(env);
    let (gross0, gross1) = gross_assets(env, key);
    let pips = read_rehypothecation_config(env).yield_tax_pips;
    let accrual = accrue_tax(env, &state, gross0, gross1, pips);
    (accrual.state, gross0, gross1)
}

/// Re-read the balances after a principal flow and move the checkpoint
/// onto them.
pub fn resync(env: &Env, key: &PoolKey, state: &VaultState) -> VaultState {
    let (gross0, gross1) = gross_assets(env, key);
    let next = checkpoint(state, gross0, gross1);
    write_vault_state(env, &next);
    next
}

// ============================================================
// TRANSFERS
// ============================================================

/// Deposit the hook's own `amount` of `currency` into `source`.
///
/// The source pulls the tokens with a nested `transfer`, which the hook
/// pre-authorizes here.
pub fn deposit_into(env: &Env, currency: &Address, source: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }

    let self_addr = env.current_contract_address();
    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: currency.clone(),
                fn_name: Symbol::new(env, "transfer"),
                args: vec![
                    env,
                    self_addr.clone().into_val(env),
                    source.clone().into_val(env),
                    amount.into_val(env),
                ],
            },
            sub_invocations: vec![env],
        }),
    ]);

    YieldSourceClient::new(env, source).deposit(&self_addr, &amount);
}

pub fn withdraw_from(env: &Env, source: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    YieldSourceClient::new(env, source).withdraw(&env.current_contract_address(), to, &amount);
}

pub fn deposit(env: &Env, currency: &Address, amount: i128) -> Result<(), HookError> {
    if amount <= 0 {
        return Ok(());
    }
    let source = read_yield_source(env, currency).ok_or(HookError::YieldSourceNotSet)?;
    deposit_into(env, currency, &source, amount);
    Ok(())
}

pub fn withdraw(env: &Env, currency: &Address, to: &Address, amount: i128) -> Result<(), HookError> {
    if amount <= 0 {
        return Ok(());
    }
    let source = read_yield_source(env, currency).ok_or(HookError::YieldSourceNotSet)?;
    withdraw_from(env, &source, to, amount);
    Ok(())
}
