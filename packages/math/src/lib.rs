//! Pure price/tick codec and liquidity-to-token math for the
//! concentrated-liquidity pool engine.
//!
//! This crate has no notion of a pool, a tick index, or a position; it only
//! converts between tick indices, square-root prices, and token amounts.

mod constants;
mod liquidity;
mod price;

pub use constants::*;
pub use liquidity::liquidity_to_tokens;
pub use price::{
    is_aligned_tick, price_at_tick, sqrt_price_to_tick, tick_by_tick_spacing, tick_to_sqrt_price,
    TickOutOfRange,
};
