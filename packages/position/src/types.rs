//! Position entity.

/// Identity of a position: the owner and the tick range they provided
/// liquidity over.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionKey {
    pub owner: String,
    pub lower_tick_idx: i64,
    pub upper_tick_idx: i64,
}

impl PositionKey {
    pub fn new(owner: impl Into<String>, lower_tick_idx: i64, upper_tick_idx: i64) -> Self {
        Self {
            owner: owner.into(),
            lower_tick_idx,
            upper_tick_idx,
        }
    }
}

/// A liquidity provider's stake in a pool over a fixed tick range.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    pub key: PositionKey,
    /// Liquidity currently provided over `[lower_tick_idx, upper_tick_idx)`.
    pub liquidity: u128,
    /// Fee growth inside the range as of the last settlement, used to
    /// compute the next accrual delta.
    pub fee_growth_inside_x: f64,
    pub fee_growth_inside_y: f64,
    /// Fees already materialized but not yet withdrawn.
    pub fees_x: u128,
    pub fees_y: u128,
}

impl Position {
    /// A brand-new position with zero liquidity and the given fee-growth
    /// baseline, taken from the inside-range value at creation time.
    pub fn new(key: PositionKey, fee_growth_inside_x: f64, fee_growth_inside_y: f64) -> Self {
        Self {
            key,
            liquidity: 0,
            fee_growth_inside_x,
            fee_growth_inside_y,
            fees_x: 0,
            fees_y: 0,
        }
    }

    /// Whether this position holds any liquidity.
    pub fn has_liquidity(&self) -> bool {
        self.liquidity > 0
    }

    /// Whether this position has fees owed that have not yet been
    /// withdrawn.
    pub fn has_uncollected_fees(&self) -> bool {
        self.fees_x > 0 || self.fees_y > 0
    }

    /// Whether this position is fully wound down and can be deleted.
    pub fn is_empty(&self) -> bool {
        !self.has_liquidity() && !self.has_uncollected_fees()
    }
}
