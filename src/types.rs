//! Core data types for Motor Curve Studio
//!
//! This module defines the fundamental value types shared by the curve
//! engine, the exporter and the frontend.
//!
//! # Main Types
//!
//! - [`Point`] - A single curve sample: time in seconds, value in percent
//! - [`PointId`] - Stable identity of a point inside a curve store
//!
//! # Coordinate Domain
//!
//! Points live in data space: `x` is seconds in `[0, time_scale]` and `y`
//! is a duty-cycle percentage in `[0, 100]`. Both are `f32`, the same width
//! the exported firmware tables use, so what is edited is exactly what is
//! written.

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

/// Lowest allowed curve value in percent
pub const VALUE_MIN: f32 = 0.0;

/// Highest allowed curve value in percent
pub const VALUE_MAX: f32 = 100.0;

/// A single point of the curve in data space
///
/// Equality is exact on both coordinates. Curves are ordered by `x` only,
/// see [`Point::cmp_x`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Time in seconds
    pub x: f32,
    /// Value in percent
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp the point into `[0, time_scale] x [0, 100]`
    pub fn clamped(self, time_scale: f32) -> Self {
        Self {
            x: self.x.clamp(0.0, time_scale),
            y: self.y.clamp(VALUE_MIN, VALUE_MAX),
        }
    }

    /// Ordering by time only
    pub fn cmp_x(&self, other: &Point) -> Ordering {
        self.x.total_cmp(&other.x)
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3} s, {:.1}%)", self.x, self.y)
    }
}

/// Stable identifier of a point within a [`crate::curve::CurveStore`]
///
/// Ids survive re-sorting, so drag gestures and selections keep tracking
/// the same logical point when its index changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub(crate) u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Clamp an editable parameter into `range`, replacing NaN with `fallback`
pub fn clamp_param(value: f32, range: RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(*range.start(), *range.end())
    }
}
