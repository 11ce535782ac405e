//! Yield source events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the source is initialized
pub fn emit_initialized(env: &Env, admin: &Address, asset: &Address) {
    env.events().publish(
        (Symbol::new(env, "YieldSourceInit"),),
        (admin.clone(), asset.clone()),
    );
}

/// Emitted on deposit
/// Data: (owner, assets, shares)
pub fn emit_deposit(env: &Env, owner: &Address, assets: i128, shares: i128) {
    env.events().publish(
        (Symbol::new(env, "Deposit"), owner.clone()),
        (assets, shares),
    );
}

/// Emitted on withdraw
/// Data: (owner, receiver, assets, shares)
pub fn emit_withdraw(env: &Env, owner: &Address, to: &Address, assets: i128, shares: i128) {
    env.events().publish(
        (Symbol::new(env, "Withdraw"), owner.clone()),
        (to.clone(), assets, shares),
    );
}

/// Emitted when the admin writes down managed assets
pub fn emit_loss(env: &Env, bps: u32, amount: i128) {
    env.events().publish((Symbol::new(env, "LossRealized"),), (bps, amount));
}
