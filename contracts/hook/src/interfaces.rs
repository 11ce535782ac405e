// External collaborators, seen only through the calls the hook makes

use soroban_sdk::{contractclient, Address, Env};

use crate::types::Role;

/// Role-based permission gate. Fails the invocation when `account` does
/// not hold `role`.
#[contractclient(name = "AccessGateClient")]
pub trait AccessGate {
    fn require_role(env: Env, account: Address, role: Role);
}

/// Single-asset yield vault the hook parks idle liquidity in
#[contractclient(name = "YieldSourceClient")]
pub trait YieldSource {
    fn asset(env: Env) -> Address;

    /// Pull `amount` from `from`; returns shares minted
    fn deposit(env: Env, from: Address, amount: i128) -> i128;

    /// Send `amount` of `owner`'s claim to `to`; returns shares burned
    fn withdraw(env: Env, owner: Address, to: Address, amount: i128) -> i128;

    /// Asset amount `owner`'s position redeems for
    fn total_assets(env: Env, owner: Address) -> i128;
}
