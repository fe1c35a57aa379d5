mod common;

use clmm_pool::PositionKey;

#[test]
fn add_liquidity_in_range_raises_active_liquidity() {
    let mut pool = common::setup_pool(0.0, 100);
    let position = pool.add_liquidity("alice", 1_000_000, -1000, 1000).expect("add_liquidity should succeed");

    assert_eq!(pool.liquidity(), 1_000_000);
    assert_eq!(position.liquidity, 1_000_000);
    assert!(pool.token_x_balance() > 0);
    assert!(pool.token_y_balance() > 0);
    assert_eq!(pool.active_ticks().count(), 2);
}

#[test]
fn add_liquidity_outside_current_price_does_not_raise_active_liquidity() {
    let mut pool = common::setup_pool(0.0, 100);
    pool.add_liquidity("alice", 1_000_000, 2000, 3000).expect("add_liquidity should succeed");
    assert_eq!(pool.liquidity(), 0, "range does not contain the current tick");
}

#[test]
fn second_add_liquidity_to_the_same_range_accumulates() {
    let mut pool = common::setup_pool(0.0, 100);
    pool.add_liquidity("alice", 1_000_000, -1000, 1000).unwrap();
    let position = pool.add_liquidity("alice", 500_000, -1000, 1000).unwrap();

    assert_eq!(position.liquidity, 1_500_000);
    assert_eq!(pool.liquidity(), 1_500_000);
}

#[test]
fn add_then_remove_all_liquidity_returns_pool_to_zero_active_liquidity() {
    let mut pool = common::setup_pool(0.0, 100);
    pool.add_liquidity("alice", 1_000_000, -1000, 1000).unwrap();
    let key = PositionKey::new("alice", -1000, 1000);
    pool.remove_liquidity(&key, 1_000_000).expect("remove_liquidity should succeed");

    assert_eq!(pool.liquidity(), 0);
    assert!(pool.get_position(&key).is_none(), "fully withdrawn position should be deleted");
    assert_eq!(pool.active_ticks().count(), 0, "boundary ticks should be removed once empty");
}

#[test]
fn removing_more_than_a_position_holds_is_rejected() {
    let mut pool = common::setup_pool(0.0, 100);
    pool.add_liquidity("alice", 1_000_000, -1000, 1000).unwrap();
    let key = PositionKey::new("alice", -1000, 1000);
    assert!(pool.remove_liquidity(&key, 2_000_000).is_err());
}

#[test]
fn unaligned_tick_bounds_are_rejected() {
    let mut pool = common::setup_pool(0.0, 100);
    assert!(pool.add_liquidity("alice", 1_000_000, -1050, 1000).is_err());
}

#[test]
fn lower_must_be_strictly_less_than_upper() {
    let mut pool = common::setup_pool(0.0, 100);
    assert!(pool.add_liquidity("alice", 1_000_000, 1000, 1000).is_err());
    assert!(pool.add_liquidity("alice", 1_000_000, 1000, -1000).is_err());
}

#[test]
fn zero_liquidity_add_is_rejected() {
    let mut pool = common::setup_pool(0.0, 100);
    assert!(pool.add_liquidity("alice", 0, -1000, 1000).is_err());
}

#[test]
fn two_overlapping_positions_both_contribute_to_active_liquidity() {
    let mut pool = common::setup_pool(0.0, 100);
    pool.add_liquidity("alice", 1_000_000, -1000, 1000).unwrap();
    pool.add_liquidity("bob", 500_000, -500, 500).unwrap();

    assert_eq!(pool.liquidity(), 1_500_000);
    assert_eq!(pool.active_ticks().count(), 4);
}
