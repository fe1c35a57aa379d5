//! Tick-crossing swap engine (section 4.7).

use clmm_math::{sqrt_price_to_tick, tick_to_sqrt_price};
use clmm_tick::{cross, Direction, TickIndex};

use crate::types::SwapDirection;
use crate::SwapError;

/// Defensive bound on the number of tick crossings a single swap may
/// perform. Exhausting it means the tick map or liquidity bookkeeping is
/// already inconsistent, which is an internal bug rather than a recoverable
/// condition, so it panics instead of returning `SwapError`.
const MAX_SWAP_ITERATIONS: u32 = 1_000_000;

/// Splits `amount` into `(net, fee)` at the pool's fee tier: `fee` is
/// deducted from the amount actually swapped.
fn deduct_fees(amount: f64, fee_tier: f64) -> (f64, f64) {
    let fee = (amount * fee_tier).floor();
    (amount - fee, fee)
}

/// Inverse of [`deduct_fees`]: given the amount that must land net of fees,
/// returns `(amount_charged, fee)` such that `amount_charged * (1 -
/// fee_tier) == amount_net_needed`.
fn add_fees(amount_net_needed: f64, fee_tier: f64) -> (f64, f64) {
    let charged = amount_net_needed / (1.0 - fee_tier);
    let fee = charged - amount_net_needed;
    (charged, fee)
}

/// Mutable view over the pool fields the swap engine reads and updates.
/// Grouped into one struct so `run_swap`'s signature stays readable; owned
/// by the pool façade, which is the only caller.
pub struct SwapState<'a> {
    pub ticks: &'a mut TickIndex,
    pub curr_sqrt_price: &'a mut f64,
    pub curr_tick_idx: &'a mut i64,
    pub liquidity: &'a mut u128,
    pub fee_growth_global_x: &'a mut f64,
    pub fee_growth_global_y: &'a mut f64,
}

/// Runs a swap to completion against `state`, consuming (at most)
/// `amount_in` of the input token implied by `direction`, and returns the
/// output amount produced.
///
/// On `Err`, `state` may have been partially mutated; callers that need
/// atomicity (the pool façade) must snapshot before calling and restore on
/// error.
pub fn run_swap(
    state: &mut SwapState,
    direction: SwapDirection,
    amount_in: u128,
    sqrt_price_limit: f64,
    fee_tier: f64,
) -> Result<u128, SwapError> {
    match direction {
        SwapDirection::XForY => run_x_for_y(state, amount_in, sqrt_price_limit, fee_tier),
        SwapDirection::YForX => run_y_for_x(state, amount_in, sqrt_price_limit, fee_tier),
    }
}

fn run_x_for_y(state: &mut SwapState, amount_in: u128, sqrt_price_limit: f64, fee_tier: f64) -> Result<u128, SwapError> {
    let mut amount_remaining = amount_in as f64;
    let mut amount_out: u128 = 0;
    let mut iterations = 0u32;

    while amount_remaining > 0.0 {
        iterations += 1;
        if iterations > MAX_SWAP_ITERATIONS {
            panic!("swap exceeded MAX_SWAP_ITERATIONS; tick map or liquidity bookkeeping is inconsistent");
        }

        let next_tick_idx = state
            .ticks
            .find_next(*state.curr_tick_idx, Direction::Down)
            .ok_or(SwapError::InsufficientLiquidity)?
            .idx;
        let (sqrt_target, _) = tick_to_sqrt_price(next_tick_idx).expect("active tick is always in range");

        let (net_in, fee_in) = deduct_fees(amount_remaining, fee_tier);
        let l = *state.liquidity as f64;
        let sqrt_p_prime = 1.0 / (1.0 / *state.curr_sqrt_price + net_in / l);

        if sqrt_p_prime >= sqrt_target {
            let out = ((*state.curr_sqrt_price - sqrt_p_prime) * l).floor().max(0.0);
            amount_out += out as u128;
            *state.fee_growth_global_x += fee_in / l;
            *state.curr_sqrt_price = sqrt_p_prime;
            *state.curr_tick_idx = sqrt_price_to_tick(sqrt_p_prime);
            amount_remaining = 0.0;
        } else {
            let amount_used_for_swap = (1.0 / sqrt_target - 1.0 / *state.curr_sqrt_price) * l;
            let (amount_used, fee_in) = add_fees(amount_used_for_swap, fee_tier);
            let out = ((*state.curr_sqrt_price - sqrt_target) * l).floor().max(0.0);
            amount_out += out as u128;
            *state.fee_growth_global_x += fee_in / l;
            amount_remaining -= amount_used;

            let fgx = *state.fee_growth_global_x;
            let fgy = *state.fee_growth_global_y;
            state.ticks.update(next_tick_idx, |t| cross(t, fgx, fgy));
            let net = state.ticks.get_any(next_tick_idx).expect("just crossed").liquidity_net;
            *state.curr_tick_idx = next_tick_idx;

            let new_liquidity = *state.liquidity as i128 - net;
            if new_liquidity <= 0 {
                return Err(SwapError::InsufficientLiquidity);
            }
            *state.liquidity = new_liquidity as u128;
            *state.curr_sqrt_price = sqrt_target;
        }

        if sqrt_price_limit > 0.0 && *state.curr_sqrt_price <= sqrt_price_limit {
            return Err(SwapError::SlippageTooHigh);
        }
    }

    Ok(amount_out)
}

fn run_y_for_x(state: &mut SwapState, amount_in: u128, sqrt_price_limit: f64, fee_tier: f64) -> Result<u128, SwapError> {
    let mut amount_remaining = amount_in as f64;
    let mut amount_out: u128 = 0;
    let mut iterations = 0u32;

    while amount_remaining > 0.0 {
        iterations += 1;
        if iterations > MAX_SWAP_ITERATIONS {
            panic!("swap exceeded MAX_SWAP_ITERATIONS; tick map or liquidity bookkeeping is inconsistent");
        }

        let next_tick_idx = state
            .ticks
            .find_next(*state.curr_tick_idx, Direction::Up)
            .ok_or(SwapError::InsufficientLiquidity)?
            .idx;
        let (_, sqrt_target) = tick_to_sqrt_price(next_tick_idx).expect("active tick is always in range");

        let (net_in, fee_in) = deduct_fees(amount_remaining, fee_tier);
        let l = *state.liquidity as f64;
        let sqrt_p_prime = *state.curr_sqrt_price + net_in / l;

        if sqrt_p_prime <= sqrt_target {
            let out = (1.0 / *state.curr_sqrt_price - 1.0 / sqrt_p_prime) * l;
            amount_out += out.floor().max(0.0) as u128;
            *state.fee_growth_global_y += fee_in / l;
            *state.curr_sqrt_price = sqrt_p_prime;
            *state.curr_tick_idx = sqrt_price_to_tick(sqrt_p_prime);
            amount_remaining = 0.0;
        } else {
            let amount_used_for_swap = (sqrt_target - *state.curr_sqrt_price) * l;
            let (amount_used, fee_in) = add_fees(amount_used_for_swap, fee_tier);
            let out = (1.0 / *state.curr_sqrt_price - 1.0 / sqrt_target) * l;
            amount_out += out.floor().max(0.0) as u128;
            *state.fee_growth_global_y += fee_in / l;
            amount_remaining -= amount_used;

            let fgx = *state.fee_growth_global_x;
            let fgy = *state.fee_growth_global_y;
            state.ticks.update(next_tick_idx, |t| cross(t, fgx, fgy));
            let net = state.ticks.get_any(next_tick_idx).expect("just crossed").liquidity_net;
            *state.curr_tick_idx = next_tick_idx;

            let new_liquidity = *state.liquidity as i128 + net;
            if new_liquidity <= 0 {
                return Err(SwapError::InsufficientLiquidity);
            }
            *state.liquidity = new_liquidity as u128;
            *state.curr_sqrt_price = sqrt_target;
        }

        if sqrt_price_limit > 0.0 && *state.curr_sqrt_price >= sqrt_price_limit {
            return Err(SwapError::SlippageTooHigh);
        }
    }

    Ok(amount_out)
}
