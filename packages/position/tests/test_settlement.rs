use clmm_position::{collect_fees, withdraw_fees, Position, PositionKey};
use clmm_tick::Tick;

fn make_position(liquidity: u128) -> Position {
    let key = PositionKey::new("alice", -100, 100);
    let mut p = Position::new(key, 0.0, 0.0);
    p.liquidity = liquidity;
    p
}

#[test]
fn collect_fees_accrues_proportional_to_liquidity() {
    let mut p = make_position(1_000);
    let lower = Tick::new(-100, 0.0, 0.0);
    let upper = Tick::new(100, 0.0, 0.0);

    collect_fees(&mut p, 0, 0.01, 0.0, &lower, &upper);

    assert_eq!(p.fees_x, 10); // 0.01 * 1000
    assert_eq!(p.fees_y, 0);
    assert_eq!(p.fee_growth_inside_x, 0.01);
}

#[test]
fn repeated_collect_with_no_new_growth_accrues_nothing() {
    let mut p = make_position(1_000);
    let lower = Tick::new(-100, 0.0, 0.0);
    let upper = Tick::new(100, 0.0, 0.0);

    collect_fees(&mut p, 0, 0.01, 0.0, &lower, &upper);
    let fees_after_first = p.fees_x;
    collect_fees(&mut p, 0, 0.01, 0.0, &lower, &upper);

    assert_eq!(p.fees_x, fees_after_first, "no new global growth should accrue no new fees");
}

#[test]
fn withdraw_fees_zeroes_materialized_balances() {
    let mut p = make_position(1_000);
    let lower = Tick::new(-100, 0.0, 0.0);
    let upper = Tick::new(100, 0.0, 0.0);
    collect_fees(&mut p, 0, 0.02, 0.05, &lower, &upper);

    let (fx, fy) = withdraw_fees(&mut p);
    assert_eq!(fx, 20);
    assert_eq!(fy, 50);
    assert_eq!(p.fees_x, 0);
    assert_eq!(p.fees_y, 0);
}

#[test]
fn zero_liquidity_position_never_accrues_fees() {
    let mut p = make_position(0);
    let lower = Tick::new(-100, 0.0, 0.0);
    let upper = Tick::new(100, 0.0, 0.0);
    collect_fees(&mut p, 0, 10.0, 10.0, &lower, &upper);
    assert_eq!(p.fees_x, 0);
    assert_eq!(p.fees_y, 0);
}
