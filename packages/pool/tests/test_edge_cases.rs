mod common;

use clmm_pool::PositionKey;

#[test]
fn zero_amount_swap_is_a_no_op() {
    let mut pool = common::setup_pool(0.003, 100);
    pool.add_liquidity("alice", 1_000_000, -1000, 1000).unwrap();

    let sqrt_price_before = pool.curr_sqrt_price();
    let amount_out = pool.swap("X", 0, 0.0, false).expect("zero-amount swap should succeed trivially");

    assert_eq!(amount_out, 0);
    assert_eq!(pool.curr_sqrt_price(), sqrt_price_before);
}

#[test]
fn removing_all_liquidity_in_range_then_swapping_fails_with_insufficient_liquidity() {
    let mut pool = common::setup_pool(0.0, 100);
    pool.add_liquidity("alice", 1_000_000, -1000, 1000).unwrap();

    let key = PositionKey::new("alice", -1000, 1000);
    pool.remove_liquidity(&key, 1_000_000).unwrap();
    assert_eq!(pool.liquidity(), 0);

    let result = pool.swap("X", 100, 0.0, false);
    assert!(result.is_err(), "swapping against a pool with zero active liquidity should fail");
}

#[test]
fn adding_another_position_after_full_withdrawal_restores_swappability() {
    let mut pool = common::setup_pool(0.0, 100);
    pool.add_liquidity("alice", 1_000_000, -1000, 1000).unwrap();
    let key = PositionKey::new("alice", -1000, 1000);
    pool.remove_liquidity(&key, 1_000_000).unwrap();

    pool.add_liquidity("bob", 2_000_000, -500_000, 500_000).unwrap();
    let result = pool.swap("X", 100, 0.0, false);
    assert!(result.is_ok());
}

#[test]
fn add_liquidity_exactly_at_the_current_tick_boundary_is_in_range() {
    let mut pool = common::setup_pool(0.0, 100);
    // curr_tick_idx is 0; a range whose lower bound equals it is in range
    // under the half-open [lower, upper) convention.
    pool.add_liquidity("alice", 1_000_000, 0, 1000).unwrap();
    assert_eq!(pool.liquidity(), 1_000_000);
}

#[test]
fn add_liquidity_ending_exactly_at_the_current_tick_is_out_of_range() {
    let mut pool = common::setup_pool(0.0, 100);
    // upper bound is exclusive, so a range ending at the current tick does
    // not contain it.
    pool.add_liquidity("alice", 1_000_000, -1000, 0).unwrap();
    assert_eq!(pool.liquidity(), 0);
}
