//! Fee settlement: materializing a position's share of fee growth that
//! accrued inside its range since it was last touched.

use clmm_tick::{fee_inside_xy, Tick};

use crate::types::Position;

/// Brings `position.fees_{x,y}` up to date with the current inside-range
/// fee growth, then rebases `position.fee_growth_inside_{x,y}` to that
/// value. Must be called before any mutation that changes
/// `position.liquidity`.
///
/// `lower`/`upper` are looked up through the tick index's retained history,
/// so this is correct even if a boundary tick's active entry has since been
/// removed.
pub fn collect_fees(position: &mut Position, curr_tick_idx: i64, fee_growth_global_x: f64, fee_growth_global_y: f64, lower: &Tick, upper: &Tick) {
    let (inside_x, inside_y) = fee_inside_xy(curr_tick_idx, fee_growth_global_x, fee_growth_global_y, lower, upper);

    let delta_x = (inside_x - position.fee_growth_inside_x).max(0.0);
    let delta_y = (inside_y - position.fee_growth_inside_y).max(0.0);

    position.fees_x += (delta_x * position.liquidity as f64) as u128;
    position.fees_y += (delta_y * position.liquidity as f64) as u128;

    position.fee_growth_inside_x = inside_x;
    position.fee_growth_inside_y = inside_y;
}

/// Zeroes a position's materialized fees and returns the withdrawn amounts.
pub fn withdraw_fees(position: &mut Position) -> (u128, u128) {
    let owed = (position.fees_x, position.fees_y);
    position.fees_x = 0;
    position.fees_y = 0;
    owed
}
