//! Constants for the Osmosis-style geometric-additive tick/price codec.

// ---------------------------------------------------------------------------
// TICK CONSTANTS
// ---------------------------------------------------------------------------

/// Lowest tick index the codec will encode/decode.
///
/// Wide enough to reach a price of roughly `1e-12`.
pub const MIN_TICK: i64 = -108_000_000;

/// Highest tick index the codec will encode/decode.
///
/// Wide enough to reach a price of roughly `1e24`.
pub const MAX_TICK: i64 = 342_000_000;

// ---------------------------------------------------------------------------
// GEOMETRIC-ADDITIVE CODEC CONSTANTS
// ---------------------------------------------------------------------------

/// Number of additive ticks spanned by each geometric increment level.
pub const STD_INCREMENT_DISTANCE: i64 = 9_000_000;

/// Exponent of the additive step size at the increment level containing
/// price `1.0`.
pub const EXP_AT_PRICE_ONE: i32 = -6;
