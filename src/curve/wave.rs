//! Sine-wave segment generator
//!
//! Samples `y = 50 + amplitude * sin(2π * frequency * t)` at a fixed step
//! and splices the samples into the curve, replacing everything from the
//! start of the generated span onwards. The splice goes through the same
//! budget check as a manual insert.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::store::CurveStore;
use crate::error::Result;
use crate::types::{clamp_param, Point, VALUE_MAX, VALUE_MIN};

/// Centre line of the generated wave in percent
pub const WAVE_CENTER: f32 = 50.0;

/// Allowed amplitude range in percent
pub const AMPLITUDE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=50.0;

/// Allowed frequency range in Hz
pub const FREQUENCY_RANGE: std::ops::RangeInclusive<f32> = 0.1..=10.0;

/// Allowed sample step range in seconds
pub const DENSITY_RANGE: std::ops::RangeInclusive<f32> = 0.005..=0.1;

/// Parameters of the sine-wave generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Peak deviation from the centre line in percent
    pub amplitude: f32,
    /// Frequency in Hz
    pub frequency: f32,
    /// Sample step in seconds
    pub density: f32,
    /// Start at the current last point instead of at zero
    pub append: bool,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: 50.0,
            frequency: 1.0,
            density: 0.02,
            append: false,
        }
    }
}

/// Outcome of a committed wave splice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSplice {
    pub span_start: f32,
    pub samples: usize,
}

impl WaveParams {
    /// Parameters clamped into the ranges the editor offers
    pub fn sanitized(self) -> Self {
        Self {
            amplitude: clamp_param(self.amplitude, AMPLITUDE_RANGE, 50.0),
            frequency: clamp_param(self.frequency, FREQUENCY_RANGE, 1.0),
            density: clamp_param(self.density, DENSITY_RANGE, 0.02),
            append: self.append,
        }
    }

    /// Wave value `t` seconds into the span, clamped to `[0, 100]`
    pub fn value_at(&self, t: f32) -> f32 {
        (WAVE_CENTER + self.amplitude * (2.0 * PI * self.frequency * t).sin())
            .clamp(VALUE_MIN, VALUE_MAX)
    }

    /// Where a generated span starts on the given curve
    pub fn span_start(&self, store: &CurveStore) -> f32 {
        match store.last() {
            Some(last) if self.append => last.x,
            _ => 0.0,
        }
    }

    /// Samples at `t = 0, density, 2*density, ...` up to and including
    /// `t = duration`, shifted to start at `span_start`
    ///
    /// A trailing partial step still produces a final sample at exactly
    /// `duration`, and a last full step within rounding of `duration` is
    /// snapped onto it. A negative duration yields no samples.
    pub fn samples(&self, span_start: f32, duration: f32) -> Vec<Point> {
        if duration.is_nan() || duration < 0.0 {
            return Vec::new();
        }
        let step = if self.density.is_finite() && self.density > 0.0 {
            self.density
        } else {
            *DENSITY_RANGE.start()
        };

        let full_steps = (duration / step + 1e-4).floor() as usize;
        let mut out = Vec::with_capacity(full_steps + 2);
        let snap = step * 1e-3;
        for k in 0..=full_steps {
            let mut t = (k as f32 * step).min(duration);
            if duration - t <= snap {
                t = duration;
            }
            out.push(Point::new(span_start + t, self.value_at(t)));
        }

        let last_t = full_steps as f32 * step;
        if duration - last_t > snap {
            out.push(Point::new(span_start + duration, self.value_at(duration)));
        }
        out
    }
}

/// Generate a wave lasting `duration` seconds and splice it into `store`
///
/// Existing points at or after the span start are replaced. On a budget
/// rejection the store is unchanged.
pub fn generate(store: &mut CurveStore, params: &WaveParams, duration: f32) -> Result<WaveSplice> {
    let span_start = params.span_start(store);
    let samples = params.samples(span_start, duration);
    store.splice_from(span_start, &samples)?;
    tracing::debug!(
        "Spliced {} wave samples from {:.3}s ({:.1}% @ {:.2} Hz)",
        samples.len(),
        span_start,
        params.amplitude,
        params.frequency
    );
    Ok(WaveSplice {
        span_start,
        samples: samples.len(),
    })
}

/// Generate a wave from the span start to the right edge of the plot
pub fn generate_to_end(
    store: &mut CurveStore,
    params: &WaveParams,
    time_scale: f32,
) -> Result<WaveSplice> {
    let duration = time_scale - params.span_start(store);
    generate(store, params, duration)
}
