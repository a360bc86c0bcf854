//! # Motor Curve Studio: PWM Motor Curve Editor
//!
//! An interactive editor for time-varying duty-cycle curves (0-100 % over a
//! bounded time window) that exports a compressed lookup table plus a
//! playback sketch for AVR-class microcontrollers.
//!
//! ## Architecture
//!
//! - **Curve engine** ([`curve`]): point storage with a firmware memory
//!   budget, Ramer-Douglas-Peucker simplification, the data/screen coordinate
//!   mapping and the sine-wave generator
//! - **Export** ([`export`]): renders the simplified curve into a
//!   byte-exact Arduino sketch and writes it through an [`export::ExportSink`]
//! - **Editor** ([`editor`]): the editing session owning the curve, the view
//!   and the transient banners; consumes normalized input events
//! - **Frontend** ([`frontend`]): eframe/egui presentation layer
//!
//! ## Configuration
//!
//! Preferences (language, time scale, tolerance, wave settings) are stored in
//! the platform-appropriate data directory under
//! `dev.hxyulin.motor-curve-studio`. The curve itself is not persisted.
//!
//! ## Example
//!
//! ```
//! use motor_curve_studio::{EditingSession, EditorEvent};
//! use egui::{Pos2, Rect, Vec2};
//!
//! let mut session = EditingSession::new(1.0, 0.5);
//! session.set_plot_rect(Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 500.0)));
//! session.handle(EditorEvent::PointerPressed(Pos2::new(500.0, 250.0)));
//!
//! let sketch = session.export_text().unwrap();
//! assert!(sketch.contains("const int NUM_POINTS = 1;"));
//! ```

rust_i18n::i18n!("locales", fallback = "en");

pub mod config;
pub mod curve;
pub mod editor;
pub mod error;
pub mod export;
pub mod frontend;
pub mod i18n;
pub mod types;

// Re-export commonly used types
pub use config::Preferences;
pub use curve::{CurveStore, ViewState, WaveParams, FIRMWARE_POINT_LIMIT};
pub use editor::{Budget, EditingSession, EditorEvent, EditorStatus, ExportNotice};
pub use error::{CurveError, Result};
pub use export::{ExportSink, FileSink, FirmwareTable};
pub use frontend::CurveEditorApp;
pub use types::{Point, PointId};
