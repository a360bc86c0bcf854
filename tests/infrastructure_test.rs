//! Test to verify test infrastructure works correctly

mod common;

use common::builders::CurveBuilder;
use motor_curve_studio::{Point, FIRMWARE_POINT_LIMIT};

#[test]
fn test_infrastructure_setup() {
    // Test that builders work
    let store = CurveBuilder::new()
        .point(0.75, 10.0)
        .point(0.25, 90.0)
        .build();

    assert_eq!(
        store.points(),
        vec![Point::new(0.25, 90.0), Point::new(0.75, 10.0)]
    );
}

#[test]
fn test_zigzag_fills_budget_exactly() {
    let store = CurveBuilder::new().zigzag(FIRMWARE_POINT_LIMIT).build();
    assert_eq!(store.len(), FIRMWARE_POINT_LIMIT);
    assert_eq!(store.simplified_len(), FIRMWARE_POINT_LIMIT);
}

#[test]
fn test_float_comparison() {
    common::assert_float_eq(1.0, 1.00001, 0.001);
}

#[test]
#[should_panic]
fn test_float_comparison_fails() {
    common::assert_float_eq(1.0, 2.0, 0.001);
}
