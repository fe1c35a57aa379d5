//! Position entity and fee settlement for the concentrated-liquidity pool
//! engine.

mod settlement;
mod types;

pub use settlement::{collect_fees, withdraw_fees};
pub use types::{Position, PositionKey};
