//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;
pub mod mock_helpers;

use egui::{Pos2, Rect, Vec2};
use motor_curve_studio::ViewState;

/// 1000x500 plot at the origin spanning one second
pub fn test_view() -> ViewState {
    ViewState::new(Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 500.0)), 1.0)
}

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}
