use clmm_pool::Pool;

/// A pool at price 1.0 (tick 0) with the given fee tier and tick spacing.
pub fn setup_pool(fee_tier: f64, tick_spacing: i64) -> Pool {
    Pool::new("X", "Y", 1.0, fee_tier, tick_spacing).expect("valid pool construction")
}
