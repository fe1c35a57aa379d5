//! Pool-level error taxonomy (section 7).

use clmm_swap::SwapError;

/// Failures a caller of the pool façade can observe.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// A swap could not proceed; see [`SwapError`] for the specific reason.
    #[error(transparent)]
    Swap(#[from] SwapError),

    /// An argument violated a precondition of the operation (non-positive
    /// liquidity, misaligned or out-of-order ticks, unknown token, removing
    /// more liquidity than a position holds, non-positive tick spacing, or
    /// a fee tier outside `[0, 1)`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation referenced a position that does not exist.
    #[error("no position found for the given owner and tick range")]
    UnknownPosition,
}
