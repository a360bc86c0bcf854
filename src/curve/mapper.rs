//! Coordinate mapping between data space and the plot rectangle
//!
//! Data space is `(seconds, percent)`; display space is the screen-pixel
//! rectangle the plot is drawn into. The y axis is inverted: a value of 0%
//! sits on the bottom edge of the rectangle.
//!
//! No clamping happens here. Callers clamp data-space results with
//! [`Point::clamped`] before they reach the curve. A zero-sized rectangle
//! yields non-finite coordinates, so [`ViewState::is_degenerate`] must be
//! checked before mapping pointer input.

use egui::{Pos2, Rect, Vec2};

use crate::types::{Point, VALUE_MAX};

/// Default seconds spanned by the full plot width
pub const DEFAULT_TIME_SCALE: f32 = 1.0;

/// Allowed range for the time scale
pub const TIME_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.1..=10.0;

/// Spacing of vertical grid lines in seconds
pub const GRID_TIME_STEP: f32 = 0.1;

/// Spacing of horizontal grid lines in percent
pub const GRID_VALUE_STEP: f32 = 10.0;

/// The active plot rectangle and the time span it covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Top-left corner of the plot area in screen pixels
    pub origin: Pos2,
    /// Width and height of the plot area in screen pixels
    pub size: Vec2,
    /// Seconds spanned by the full width
    pub time_scale: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            origin: Pos2::ZERO,
            size: Vec2::ZERO,
            time_scale: DEFAULT_TIME_SCALE,
        }
    }
}

impl ViewState {
    /// Create a view over `rect` spanning `time_scale` seconds
    pub fn new(rect: Rect, time_scale: f32) -> Self {
        Self {
            origin: rect.min,
            size: rect.size(),
            time_scale,
        }
    }

    /// The plot rectangle in screen space
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size)
    }

    /// Whether the rectangle has no area (mapping would produce Inf/NaN)
    pub fn is_degenerate(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0 && self.time_scale > 0.0)
    }

    /// Map a data-space point into the plot rectangle
    pub fn to_screen(&self, point: Point) -> Pos2 {
        Pos2::new(
            self.origin.x + (point.x / self.time_scale) * self.size.x,
            self.origin.y + self.size.y - (point.y / VALUE_MAX) * self.size.y,
        )
    }

    /// Map a screen position back into data space (unclamped)
    pub fn to_data(&self, screen: Pos2) -> Point {
        Point::new(
            ((screen.x - self.origin.x) / self.size.x) * self.time_scale,
            ((self.origin.y + self.size.y - screen.y) / self.size.y) * VALUE_MAX,
        )
    }

    /// Map a screen position into data space and clamp it onto the plot domain
    pub fn to_data_clamped(&self, screen: Pos2) -> Point {
        self.to_data(screen).clamped(self.time_scale)
    }

    /// Times at which vertical grid lines are drawn
    pub fn grid_times(&self) -> Vec<f32> {
        steps(0.0, self.time_scale, GRID_TIME_STEP)
    }

    /// Times at which the time axis is labelled
    pub fn label_times(&self) -> Vec<f32> {
        steps(0.0, self.time_scale, time_label_step(self.time_scale))
    }

    /// Values at which horizontal grid lines are drawn
    pub fn grid_values(&self) -> Vec<f32> {
        steps(0.0, VALUE_MAX, GRID_VALUE_STEP)
    }
}

/// Spacing of time-axis labels for a given time scale
pub fn time_label_step(time_scale: f32) -> f32 {
    if time_scale <= 1.0 {
        0.1
    } else if time_scale <= 2.0 {
        0.2
    } else if time_scale <= 4.0 {
        0.5
    } else if time_scale <= 6.0 {
        1.0
    } else {
        (time_scale / 6.0).ceil()
    }
}

/// `start, start + step, ...` up to and including `end` (within rounding)
fn steps(start: f32, end: f32, step: f32) -> Vec<f32> {
    if step <= 0.0 || end < start {
        return Vec::new();
    }
    let count = ((end - start) / step + 1e-3).floor() as usize;
    (0..=count).map(|i| start + i as f32 * step).collect()
}
