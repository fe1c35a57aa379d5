//! Liquidity manager: add/remove liquidity and fee withdrawal (section 4.6).

use clmm_math::liquidity_to_tokens;
use clmm_position::{collect_fees, withdraw_fees as withdraw_position_fees, Position, PositionKey};
use clmm_tick::{init_fee_growth_outside, Tick};

use crate::error::PoolError;
use crate::pool::Pool;

impl Pool {
    /// Adds `liquidity` to the position keyed by `(owner, lower_tick_idx,
    /// upper_tick_idx)`, creating it if it does not yet exist.
    pub fn add_liquidity(&mut self, owner: impl Into<String>, liquidity: u128, lower_tick_idx: i64, upper_tick_idx: i64) -> Result<Position, PoolError> {
        if liquidity == 0 {
            return Err(PoolError::InvalidArgument("liquidity must be positive".into()));
        }
        if lower_tick_idx >= upper_tick_idx {
            return Err(PoolError::InvalidArgument("lower_tick_idx must be < upper_tick_idx".into()));
        }
        if !self.is_aligned(lower_tick_idx) || !self.is_aligned(upper_tick_idx) {
            return Err(PoolError::InvalidArgument("tick bounds must be multiples of tick_spacing and in range".into()));
        }

        let key = PositionKey::new(owner, lower_tick_idx, upper_tick_idx);
        let in_range = lower_tick_idx <= self.curr_tick_idx && self.curr_tick_idx < upper_tick_idx;

        if in_range {
            self.liquidity += liquidity;
        }

        self.touch_boundary_tick(lower_tick_idx, liquidity as i128);
        self.touch_boundary_tick(upper_tick_idx, -(liquidity as i128));

        let (lower, upper) = self.boundary_ticks(lower_tick_idx, upper_tick_idx);

        if let Some(position) = self.positions.get_mut(&key) {
            collect_fees(position, self.curr_tick_idx, self.fee_growth_global_x, self.fee_growth_global_y, &lower, &upper);
            position.liquidity += liquidity;
        } else {
            let (inside_x, inside_y) = clmm_tick::fee_inside_xy(self.curr_tick_idx, self.fee_growth_global_x, self.fee_growth_global_y, &lower, &upper);
            let mut position = Position::new(key.clone(), inside_x, inside_y);
            position.liquidity = liquidity;
            self.positions.insert(key.clone(), position);
        }

        let (sqrt_lower, _) = clmm_math::tick_to_sqrt_price(lower_tick_idx).expect("validated in range");
        let (sqrt_upper, _) = clmm_math::tick_to_sqrt_price(upper_tick_idx).expect("validated in range");
        let (dx, dy) = liquidity_to_tokens(liquidity, sqrt_lower, sqrt_upper, self.curr_sqrt_price);
        self.token_x_balance += dx;
        self.token_y_balance += dy;

        Ok(self.positions.get(&key).cloned().expect("just inserted"))
    }

    /// Removes `liquidity` from an existing position.
    pub fn remove_liquidity(&mut self, key: &PositionKey, liquidity: u128) -> Result<(), PoolError> {
        let position = self.positions.get(key).ok_or(PoolError::UnknownPosition)?;
        if liquidity == 0 || liquidity > position.liquidity {
            return Err(PoolError::InvalidArgument("cannot remove more liquidity than the position holds".into()));
        }

        let lower_idx = key.lower_tick_idx;
        let upper_idx = key.upper_tick_idx;
        let in_range = lower_idx <= self.curr_tick_idx && self.curr_tick_idx < upper_idx;

        let (lower, upper) = self.boundary_ticks(lower_idx, upper_idx);
        let position = self.positions.get_mut(key).expect("checked above");
        collect_fees(position, self.curr_tick_idx, self.fee_growth_global_x, self.fee_growth_global_y, &lower, &upper);
        position.liquidity -= liquidity;

        if in_range {
            self.liquidity -= liquidity;
        }

        self.touch_boundary_tick(lower_idx, -(liquidity as i128));
        self.touch_boundary_tick(upper_idx, liquidity as i128);
        self.ticks.remove_if_empty(lower_idx);
        self.ticks.remove_if_empty(upper_idx);

        let (sqrt_lower, _) = clmm_math::tick_to_sqrt_price(lower_idx).expect("tick was validated on creation");
        let (sqrt_upper, _) = clmm_math::tick_to_sqrt_price(upper_idx).expect("tick was validated on creation");
        let (dx, dy) = liquidity_to_tokens(liquidity, sqrt_lower, sqrt_upper, self.curr_sqrt_price);
        self.token_x_balance = self.token_x_balance.saturating_sub(dx);
        self.token_y_balance = self.token_y_balance.saturating_sub(dy);

        if self.positions.get(key).map(Position::is_empty).unwrap_or(false) {
            self.positions.remove(key);
        }

        Ok(())
    }

    /// Returns and zeroes a position's materialized (uncollected) fees.
    pub fn withdraw_fees(&mut self, key: &PositionKey) -> Result<(u128, u128), PoolError> {
        let (lower, upper) = self.boundary_ticks(key.lower_tick_idx, key.upper_tick_idx);
        let position = self.positions.get_mut(key).ok_or(PoolError::UnknownPosition)?;
        collect_fees(position, self.curr_tick_idx, self.fee_growth_global_x, self.fee_growth_global_y, &lower, &upper);
        let owed = withdraw_position_fees(position);

        self.token_x_balance = self.token_x_balance.saturating_sub(owed.0);
        self.token_y_balance = self.token_y_balance.saturating_sub(owed.1);

        if position.is_empty() {
            self.positions.remove(key);
        }

        Ok(owed)
    }

    /// Creates `tick_idx` if absent (with the fee-growth-outside baseline
    /// from section 4.5) and applies `net_delta`/`gross_delta` to it.
    fn touch_boundary_tick(&mut self, tick_idx: i64, net_delta: i128) {
        let curr_tick_idx = self.curr_tick_idx;
        let fee_growth_global_x = self.fee_growth_global_x;
        let fee_growth_global_y = self.fee_growth_global_y;
        self.ticks.ensure_active(tick_idx, || {
            let outside_x = init_fee_growth_outside(curr_tick_idx, tick_idx, fee_growth_global_x);
            let outside_y = init_fee_growth_outside(curr_tick_idx, tick_idx, fee_growth_global_y);
            Tick::new(tick_idx, outside_x, outside_y)
        });
        let gross_delta = net_delta.unsigned_abs();
        self.ticks.update(tick_idx, |t| {
            t.liquidity_net += net_delta;
            t.liquidity_gross += gross_delta;
        });
    }

    /// Looks up both boundary ticks of a range through the retained tick
    /// history (never fails for a tick this pool has ever initialized).
    fn boundary_ticks(&self, lower_idx: i64, upper_idx: i64) -> (Tick, Tick) {
        let lower = self.ticks.get_any(lower_idx).cloned().unwrap_or_else(|| Tick::new(lower_idx, 0.0, 0.0));
        let upper = self.ticks.get_any(upper_idx).cloned().unwrap_or_else(|| Tick::new(upper_idx, 0.0, 0.0));
        (lower, upper)
    }
}
