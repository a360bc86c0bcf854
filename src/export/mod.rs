//! Firmware export
//!
//! - [`firmware`] - Sketch rendering and the playback model ([`FirmwareTable`])
//! - [`format`] - C++ stream compatible float formatting
//! - [`sink`] - Where rendered sketches are written ([`ExportSink`])

pub mod firmware;
pub mod format;
pub mod sink;

pub use firmware::{pwm_value, render, FirmwareTable};
pub use sink::{display_file_name, ExportSink, FileSink};
