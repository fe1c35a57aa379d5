use clmm_tick::{cross, fee_inside_xy, Tick};

#[test]
fn fee_inside_is_full_global_when_both_boundaries_untouched() {
    let lower = Tick::new(-100, 0.0, 0.0);
    let upper = Tick::new(100, 0.0, 0.0);
    let (inside_x, inside_y) = fee_inside_xy(0, 5.0, 3.0, &lower, &upper);
    assert_eq!(inside_x, 5.0);
    assert_eq!(inside_y, 3.0);
}

#[test]
fn fee_inside_excludes_growth_that_accrued_outside_the_range() {
    // curr_tick is below the range: all of fee_growth_global accrued "above"
    // lower and outside upper entirely, so growth inside the range is zero
    // once both outsides are at their just-initialized values.
    let lower = Tick::new(100, 2.0, 0.0);
    let upper = Tick::new(200, 2.0, 0.0);
    let (inside_x, _) = fee_inside_xy(0, 2.0, 0.0, &lower, &upper);
    assert_eq!(inside_x, 0.0);
}

#[test]
fn cross_flips_outside_relative_to_global() {
    let mut t = Tick::new(0, 1.0, 0.5);
    cross(&mut t, 4.0, 2.0);
    assert_eq!(t.fee_growth_outside_x, 3.0);
    assert_eq!(t.fee_growth_outside_y, 1.5);
    // Crossing back should restore the original value.
    cross(&mut t, 4.0, 2.0);
    assert_eq!(t.fee_growth_outside_x, 1.0);
    assert_eq!(t.fee_growth_outside_y, 0.5);
}
