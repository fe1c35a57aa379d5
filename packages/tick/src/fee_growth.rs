//! Fee-growth-outside/inside derivation (section 4.5).

use crate::types::Tick;

/// The `fee_growth_outside` baseline a newly-initialized tick should start
/// with, given the current tick and the running global counter.
pub fn init_fee_growth_outside(curr_tick_idx: i64, tick_idx: i64, fee_growth_global: f64) -> f64 {
    if curr_tick_idx >= tick_idx {
        fee_growth_global
    } else {
        0.0
    }
}

/// Fee growth accrued below `tick.idx`, for one token's `outside`/`global`
/// pair.
pub fn fee_below(tick: &Tick, curr_tick_idx: i64, fee_growth_global: f64, outside: f64) -> f64 {
    if curr_tick_idx >= tick.idx {
        outside
    } else {
        fee_growth_global - outside
    }
}

/// Fee growth accrued above `tick.idx`.
pub fn fee_above(tick: &Tick, curr_tick_idx: i64, fee_growth_global: f64, outside: f64) -> f64 {
    if curr_tick_idx >= tick.idx {
        fee_growth_global - outside
    } else {
        outside
    }
}

/// Fee growth accrued strictly inside the half-open range `[lower, upper)`
/// for one token, given both boundary ticks and the global/outside values
/// for that token.
pub fn fee_inside(
    curr_tick_idx: i64,
    fee_growth_global: f64,
    lower: &Tick,
    lower_outside: f64,
    upper: &Tick,
    upper_outside: f64,
) -> f64 {
    let below = fee_below(lower, curr_tick_idx, fee_growth_global, lower_outside);
    let above = fee_above(upper, curr_tick_idx, fee_growth_global, upper_outside);
    fee_growth_global - below - above
}

/// Fee growth inside `[lower, upper)` for both tokens at once, reading each
/// tick's stored `fee_growth_outside_{x,y}` directly.
pub fn fee_inside_xy(
    curr_tick_idx: i64,
    fee_growth_global_x: f64,
    fee_growth_global_y: f64,
    lower: &Tick,
    upper: &Tick,
) -> (f64, f64) {
    let inside_x = fee_inside(
        curr_tick_idx,
        fee_growth_global_x,
        lower,
        lower.fee_growth_outside_x,
        upper,
        upper.fee_growth_outside_x,
    );
    let inside_y = fee_inside(
        curr_tick_idx,
        fee_growth_global_y,
        lower,
        lower.fee_growth_outside_y,
        upper,
        upper.fee_growth_outside_y,
    );
    (inside_x, inside_y)
}

/// Flips a tick's `fee_growth_outside` for both tokens when the price
/// crosses it during a swap: `outside <- global - outside`.
pub fn cross(tick: &mut Tick, fee_growth_global_x: f64, fee_growth_global_y: f64) {
    tick.fee_growth_outside_x = fee_growth_global_x - tick.fee_growth_outside_x;
    tick.fee_growth_outside_y = fee_growth_global_y - tick.fee_growth_outside_y;
}
