//! Osmosis-style geometric-additive tick <-> price codec.
//!
//! A tick index does not encode price through Uniswap's `1.0001^tick` binary
//! decomposition. Instead each decade of price (`[10^k, 10^{k+1})`) is
//! subdivided into `STD_INCREMENT_DISTANCE` equal additive steps, with the
//! step size shrinking by a factor of ten at each decade. See
//! `SPEC_FULL.md` section 4.1 for the full derivation.

use crate::constants::{EXP_AT_PRICE_ONE, MAX_TICK, MIN_TICK, STD_INCREMENT_DISTANCE};

/// Error returned when a tick index or tick-spacing argument is out of the
/// codec's supported domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutOfRange;

/// The additive step size `10^e` in effect at increment level `k`, for the
/// non-negative tick branch.
fn step_size(level: i64) -> f64 {
    10f64.powi(EXP_AT_PRICE_ONE + level as i32)
}

/// The additive step size in effect at increment level `k` for the negative
/// tick branch (`e = E - (k+1)`).
fn step_size_neg(level: i64) -> f64 {
    10f64.powi(EXP_AT_PRICE_ONE - (level as i32 + 1))
}

/// Real price `P(t)` for tick index `t`, per the piecewise geometric-additive
/// formula.
pub fn price_at_tick(tick: i64) -> Result<f64, TickOutOfRange> {
    if tick < MIN_TICK || tick > MAX_TICK {
        return Err(TickOutOfRange);
    }
    if tick >= 0 {
        let level = tick / STD_INCREMENT_DISTANCE;
        let residual = tick - level * STD_INCREMENT_DISTANCE;
        let s = step_size(level);
        Ok(10f64.powi(level as i32) + residual as f64 * s)
    } else {
        let level = (-tick) / STD_INCREMENT_DISTANCE;
        let residual = -tick - level * STD_INCREMENT_DISTANCE;
        let s = step_size_neg(level);
        Ok(10f64.powi(-(level as i32)) - residual as f64 * s)
    }
}

/// The step size `s` in effect at tick `t` (the width, in price units, of the
/// cell whose lower edge is `t`).
fn step_size_at_tick(tick: i64) -> f64 {
    if tick >= 0 {
        step_size(tick / STD_INCREMENT_DISTANCE)
    } else {
        step_size_neg((-tick) / STD_INCREMENT_DISTANCE)
    }
}

/// Lower and upper square-root price edges of the cell whose lower bound is
/// tick `t`: `(sqrt(P(t)), sqrt(P(t) + s))`.
pub fn tick_to_sqrt_price(tick: i64) -> Result<(f64, f64), TickOutOfRange> {
    let p = price_at_tick(tick)?;
    let s = step_size_at_tick(tick);
    Ok((p.sqrt(), (p + s).sqrt()))
}

/// Inverse of [`tick_to_sqrt_price`]: the tick index whose cell contains the
/// given square-root price.
///
/// The bracketing decade `10^k < P <= 10^{k+1}` (or its reciprocal for
/// `P < 1`) is found in closed form via `log10`, rather than scanning a
/// precomputed table of powers of ten.
pub fn sqrt_price_to_tick(sqrt_price: f64) -> i64 {
    let p = sqrt_price * sqrt_price;
    if p == 1.0 {
        return 0;
    }
    if p > 1.0 {
        let level = (p.log10().ceil() as i64 - 1).max(0);
        let s = step_size(level);
        let base = 10f64.powi(level as i32);
        let additive = ((p - base) / s).round() as i64;
        level * STD_INCREMENT_DISTANCE + additive
    } else {
        let level = (-p.log10()).floor() as i64;
        let s = step_size_neg(level);
        let base = 10f64.powi(-(level as i32));
        let additive = ((base - p) / s).round() as i64;
        -(level * STD_INCREMENT_DISTANCE + additive)
    }
}

/// Rounds a real tick value toward negative infinity to the nearest multiple
/// of `tick_spacing`.
pub fn tick_by_tick_spacing(precise_tick: f64, tick_spacing: i64) -> i64 {
    (precise_tick / tick_spacing as f64).floor() as i64 * tick_spacing
}

/// Whether `tick` is a valid multiple of `tick_spacing` within the codec's
/// supported domain.
pub fn is_aligned_tick(tick: i64, tick_spacing: i64) -> bool {
    tick >= MIN_TICK && tick <= MAX_TICK && tick % tick_spacing == 0
}
