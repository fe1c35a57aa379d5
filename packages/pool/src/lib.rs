//! Public façade for the concentrated-liquidity pool engine.
//!
//! Composes the tick index, position ledger, fee accounting, and swap
//! engine behind a single [`Pool`] type and the operations in section 4.4.

mod error;
mod liquidity_manager;
mod pool;

pub use clmm_position::{Position, PositionKey};
pub use clmm_tick::Tick;
pub use error::PoolError;
pub use pool::Pool;
