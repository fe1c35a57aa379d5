//! Tick entity and ordered tick index for the concentrated-liquidity pool
//! engine.

mod fee_growth;
mod index;
mod types;

pub use fee_growth::{cross, fee_above, fee_below, fee_inside, fee_inside_xy, init_fee_growth_outside};
pub use index::{Direction, TickIndex};
pub use types::Tick;
