//! Pool façade: configuration, composed state, and the snapshot/restore
//! mechanism backing simulated and failed swaps.

use std::collections::BTreeMap;

use clmm_math::{is_aligned_tick, sqrt_price_to_tick};
use clmm_position::{Position, PositionKey};
use clmm_swap::{run_swap, SwapDirection, SwapState};
use clmm_tick::TickIndex;

use crate::error::PoolError;

/// A single concentrated-liquidity pool between two tokens.
///
/// All mutating operations either fully apply or leave the pool
/// byte-identical to its pre-call state: `swap` snapshots and restores on
/// any failure or when run with `simulate = true`; `add_liquidity` /
/// `remove_liquidity` / `withdraw_fees` validate eagerly before touching
/// any state.
#[derive(Clone, Debug)]
pub struct Pool {
    pub(crate) token_x: String,
    pub(crate) token_y: String,
    pub(crate) fee_tier: f64,
    pub(crate) tick_spacing: i64,

    pub(crate) curr_sqrt_price: f64,
    pub(crate) curr_tick_idx: i64,
    pub(crate) liquidity: u128,

    pub(crate) fee_growth_global_x: f64,
    pub(crate) fee_growth_global_y: f64,

    pub(crate) token_x_balance: u128,
    pub(crate) token_y_balance: u128,

    pub(crate) ticks: TickIndex,
    pub(crate) positions: BTreeMap<PositionKey, Position>,
}

impl Pool {
    /// Creates a new pool at the given starting price.
    ///
    /// `fee_tier` must be in `[0, 1)` and `tick_spacing` must be positive.
    pub fn new(
        token_x: impl Into<String>,
        token_y: impl Into<String>,
        init_sqrt_price: f64,
        fee_tier: f64,
        tick_spacing: i64,
    ) -> Result<Self, PoolError> {
        if !(0.0..1.0).contains(&fee_tier) {
            return Err(PoolError::InvalidArgument("fee_tier must be in [0, 1)".into()));
        }
        if tick_spacing <= 0 {
            return Err(PoolError::InvalidArgument("tick_spacing must be positive".into()));
        }
        if !(init_sqrt_price.is_finite() && init_sqrt_price > 0.0) {
            return Err(PoolError::InvalidArgument("init_sqrt_price must be a positive finite number".into()));
        }

        let curr_tick_idx = sqrt_price_to_tick(init_sqrt_price);

        Ok(Self {
            token_x: token_x.into(),
            token_y: token_y.into(),
            fee_tier,
            tick_spacing,
            curr_sqrt_price: init_sqrt_price,
            curr_tick_idx,
            liquidity: 0,
            fee_growth_global_x: 0.0,
            fee_growth_global_y: 0.0,
            token_x_balance: 0,
            token_y_balance: 0,
            ticks: TickIndex::new(),
            positions: BTreeMap::new(),
        })
    }

    // -- accessors ----------------------------------------------------

    pub fn token_x(&self) -> &str {
        &self.token_x
    }

    pub fn token_y(&self) -> &str {
        &self.token_y
    }

    pub fn fee_tier(&self) -> f64 {
        self.fee_tier
    }

    pub fn tick_spacing(&self) -> i64 {
        self.tick_spacing
    }

    pub fn curr_sqrt_price(&self) -> f64 {
        self.curr_sqrt_price
    }

    pub fn curr_tick_idx(&self) -> i64 {
        self.curr_tick_idx
    }

    pub fn liquidity(&self) -> u128 {
        self.liquidity
    }

    pub fn fee_growth_global_x(&self) -> f64 {
        self.fee_growth_global_x
    }

    pub fn fee_growth_global_y(&self) -> f64 {
        self.fee_growth_global_y
    }

    pub fn token_x_balance(&self) -> u128 {
        self.token_x_balance
    }

    pub fn token_y_balance(&self) -> u128 {
        self.token_y_balance
    }

    pub fn get_position(&self, key: &PositionKey) -> Option<&Position> {
        self.positions.get(key)
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.values()
    }

    pub fn active_ticks(&self) -> impl Iterator<Item = &clmm_tick::Tick> {
        self.ticks.iter_active()
    }

    pub(crate) fn is_aligned(&self, tick_idx: i64) -> bool {
        is_aligned_tick(tick_idx, self.tick_spacing)
    }

    // -- swap -----------------------------------------------------------

    /// Swaps `amount_in` of `token_in` for the other token.
    ///
    /// `sqrt_price_limit` is a slippage guard; pass `0.0` for no limit. If
    /// `simulate` is `true`, or the swap fails for any reason, the pool is
    /// restored to exactly its pre-call state before returning.
    pub fn swap(&mut self, token_in: &str, amount_in: u128, sqrt_price_limit: f64, simulate: bool) -> Result<u128, PoolError> {
        let direction = if token_in == self.token_x {
            SwapDirection::XForY
        } else if token_in == self.token_y {
            SwapDirection::YForX
        } else {
            return Err(PoolError::InvalidArgument(format!("unknown token '{token_in}'")));
        };

        let snapshot = self.clone();

        let mut state = SwapState {
            ticks: &mut self.ticks,
            curr_sqrt_price: &mut self.curr_sqrt_price,
            curr_tick_idx: &mut self.curr_tick_idx,
            liquidity: &mut self.liquidity,
            fee_growth_global_x: &mut self.fee_growth_global_x,
            fee_growth_global_y: &mut self.fee_growth_global_y,
        };

        let result = run_swap(&mut state, direction, amount_in, sqrt_price_limit, self.fee_tier);

        match result {
            Ok(amount_out) => {
                match direction {
                    SwapDirection::XForY => {
                        self.token_x_balance += amount_in;
                        self.token_y_balance = self.token_y_balance.saturating_sub(amount_out);
                    }
                    SwapDirection::YForX => {
                        self.token_y_balance += amount_in;
                        self.token_x_balance = self.token_x_balance.saturating_sub(amount_out);
                    }
                }
                if simulate {
                    *self = snapshot;
                }
                Ok(amount_out)
            }
            Err(err) => {
                *self = snapshot;
                Err(PoolError::from(err))
            }
        }
    }
}
