//! Arduino sketch generation
//!
//! Renders a simplified curve into a self-contained sketch: a point count,
//! a `PROGMEM` time table, a `PROGMEM` 8-bit PWM value table and a fixed
//! playback loop that interpolates linearly between table entries and
//! writes the result to pin 10 every 10 ms.
//!
//! The text is the contract. Table literals follow C++ stream formatting
//! (see [`super::format`]) so output is byte-for-byte reproducible.
//! [`FirmwareTable::sample`] mirrors the playback loop so the exported
//! behaviour can be checked without a board.

use super::format::format_stream_float;
use crate::error::{CurveError, Result};
use crate::types::Point;

/// Include lines at the top of every sketch
pub const SKETCH_HEADER: &str = "#include <avr/pgmspace.h>\n#include <math.h>\n\n";

/// PWM output pin used by the playback loop
pub const PWM_PIN: u8 = 10;

/// Poll interval of the playback loop in milliseconds
pub const POLL_INTERVAL_MS: u32 = 10;

/// Setup and playback loop appended after the tables
pub const PLAYBACK_ROUTINE: &str = r#"
void setup() {
  pinMode(10, OUTPUT);
  TCCR1A = _BV(COM1A1) | _BV(WGM10);
  TCCR1B = _BV(CS10);
}

float getPointTime(int index) {
  return pgm_read_float(&timePoints[index]);
}

uint8_t getPointValue(int index) {
  return pgm_read_byte(&values[index]);
}

void loop() {
  float totalDuration = getPointTime(NUM_POINTS - 1);
  float currentTime = fmod(millis() / 1000.0, totalDuration);
  float outputValue = 0.0;

  for(int i = 0; i < NUM_POINTS - 1; i++) {
    float t1 = getPointTime(i);
    float t2 = getPointTime(i+1);
    if(currentTime >= t1 && currentTime <= t2) {
      float lerpT = (currentTime - t1) / (t2 - t1);
      outputValue = getPointValue(i) + lerpT * (getPointValue(i+1) - getPointValue(i));
      break;
    }
  }

  analogWrite(10, (int)outputValue);
  delay(10);
}
"#;

/// Scale factor from percent to 8-bit PWM duty
const PWM_PER_PERCENT: f32 = 2.55;

/// Quantize a percentage to an 8-bit PWM duty value
///
/// Truncates toward zero after scaling, so 50% becomes 127 and 100%
/// becomes 255.
pub fn pwm_value(percent: f32) -> u8 {
    // `as` truncates toward zero and maps NaN to 0
    ((percent * PWM_PER_PERCENT) as i32).clamp(0, 255) as u8
}

/// The lookup tables embedded in a sketch
#[derive(Debug, Clone, PartialEq)]
pub struct FirmwareTable {
    pub times: Vec<f32>,
    pub values: Vec<u8>,
}

impl FirmwareTable {
    /// Build the tables from an already simplified curve
    pub fn from_points(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        Ok(Self {
            times: points.iter().map(|p| p.x).collect(),
            values: points.iter().map(|p| pwm_value(p.y)).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the last table entry; playback loops over this period
    pub fn total_duration(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// The PWM value the playback loop writes `elapsed` seconds after boot
    ///
    /// Follows the sketch exactly: time wraps at the last entry, the first
    /// bracketing interval wins, and with no bracket the output is 0.
    pub fn sample(&self, elapsed: f32) -> f32 {
        let current = elapsed % self.total_duration();
        for i in 0..self.times.len().saturating_sub(1) {
            let (t1, t2) = (self.times[i], self.times[i + 1]);
            if current >= t1 && current <= t2 {
                let lerp = (current - t1) / (t2 - t1);
                let (v1, v2) = (f32::from(self.values[i]), f32::from(self.values[i + 1]));
                return v1 + lerp * (v2 - v1);
            }
        }
        0.0
    }

    /// Render the complete sketch
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(PLAYBACK_ROUTINE.len() + self.len() * 16 + 256);
        out.push_str(SKETCH_HEADER);
        out.push_str(&format!("const int NUM_POINTS = {};\n\n", self.len()));

        out.push_str("const float timePoints[] PROGMEM = {");
        out.push_str(&join(self.times.iter().map(|&t| format_stream_float(t))));
        out.push_str("};\n\n");

        out.push_str("const uint8_t values[] PROGMEM = {");
        out.push_str(&join(self.values.iter().map(|v| v.to_string())));
        out.push_str("};\n\n");

        out.push_str(PLAYBACK_ROUTINE);
        out
    }
}

/// Render a sketch for an already simplified, non-empty curve
pub fn render(points: &[Point]) -> Result<String> {
    Ok(FirmwareTable::from_points(points)?.render())
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
