// Yield tax accounting

use belugahook_math::pips_of;
use soroban_sdk::Env;

use crate::types::VaultState;

/// Result of one accrual pass
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaxAccrual {
    pub tax0: i128,
    pub tax1: i128,
    pub state: VaultState,
}

#[inline]
fn net_of(gross: i128, accumulated: i128) -> i128 {
    gross.saturating_sub(accumulated).max(0)
}

/// Balances that belong to shareholders: gross minus tax owed
pub fn net_assets(state: &VaultState, gross0: i128, gross1: i128) -> (i128, i128) {
    (
        net_of(gross0, state.accumulated_tax0),
        net_of(gross1, state.accumulated_tax1),
    )
}

fn accrue_leg(env: &Env, gross: i128, accumulated: i128, last: i128, pips: u32) -> (i128, i128) {
    let net = net_of(gross, accumulated);
    let gain = if net > last { net - last } else { 0 };
    let tax = pips_of(env, gain, pips);
    (tax, net - tax)
}

/// Charge `pips` on growth of each leg since the last checkpoint.
///
/// A leg that shrank contributes no tax and moves its checkpoint down to
/// the new balance.
pub fn accrue_tax(
    env: &Env,
    state: &VaultState,
    gross0: i128,
    gross1: i128,
    pips: u32,
) -> TaxAccrual {
    let (tax0, last0) = accrue_leg(env, gross0, state.accumulated_tax0, state.last_accounted0, pips);
    let (tax1, last1) = accrue_leg(env, gross1, state.accumulated_tax1, state.last_accounted1, pips);

    TaxAccrual {
        tax0,
        tax1,
        state: VaultState {
            total_supply: state.total_supply,
            last_accounted0: last0,
            last_accounted1: last1,
            accumulated_tax0: state.accumulated_tax0.saturating_add(tax0),
            accumulated_tax1: state.accumulated_tax1.saturating_add(tax1),
        },
    }
}

/// Move both checkpoints to the current net balances so principal flows
/// are never read as yield.
pub fn checkpoint(state: &VaultState, gross0: i128, gross1: i128) -> VaultState {
    let (net0, net1) = net_assets(state, gross0, gross1);
    VaultState {
        last_accounted0: net0,
        last_accounted1: net1,
        ..state.clone()
    }
}

/// Tax that can actually be paid out now: `min(accumulated, gross)`
pub fn collectible_tax(state: &VaultState, gross0: i128, gross1: i128) -> (i128, i128) {
    (
        state.accumulated_tax0.min(gross0.max(0)),
        state.accumulated_tax1.min(gross1.max(0)),
    )
}
