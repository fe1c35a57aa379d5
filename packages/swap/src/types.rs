//! Swap engine types.

/// Which token is being sold into the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    /// Input is token X; price (and active tick) moves down.
    XForY,
    /// Input is token Y; price (and active tick) moves up.
    YForX,
}

/// Failure modes the swap engine can raise. Every variant causes the caller
/// (the pool façade) to roll back to the pre-swap snapshot.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapError {
    /// There is no next active tick in the swap direction, or active
    /// liquidity reaches zero mid-swap, so the swap cannot make further
    /// progress.
    #[error("insufficient liquidity to complete the swap")]
    InsufficientLiquidity,
    /// The swap would move the price past the caller's `sqrt_price_limit`.
    #[error("swap would exceed the given slippage limit")]
    SlippageTooHigh,
}
