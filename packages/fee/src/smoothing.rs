// Target ratio smoothing

use belugahook_math::mul_div;
use soroban_sdk::Env;

use crate::types::Smoothing;

/// Move `target` toward `observed` according to `smoothing`.
///
/// `TimeWeightedEma` blends with weight `min(elapsed, lookback) / lookback`,
/// so a longer lookback tracks more slowly and a zero lookback snaps to
/// the observation.
pub fn next_target(
    env: &Env,
    smoothing: Smoothing,
    target: u128,
    observed: u128,
    elapsed: u64,
    lookback: u64,
) -> u128 {
    match smoothing {
        Smoothing::Frozen => target,
        Smoothing::TimeWeightedEma => {
            if lookback == 0 || elapsed >= lookback {
                return observed;
            }
            if observed >= target {
                let delta = mul_div(env, observed - target, elapsed as u128, lookback as u128);
                target + delta
            } else {
                let delta = mul_div(env, target - observed, elapsed as u128, lookback as u128);
                target - delta
            }
        }
    }
}
