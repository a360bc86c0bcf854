//! Curve engine
//!
//! Everything that owns, transforms or reduces the editable curve:
//!
//! - [`mapper`] - Data space <-> plot rectangle transform ([`ViewState`])
//! - [`simplify`] - Ramer–Douglas–Peucker simplification
//! - [`store`] - The canonical sorted point set with the budget gate ([`CurveStore`])
//! - [`wave`] - Sine-wave segment generation ([`WaveParams`])
//!
//! The engine is synchronous and free of UI state; the frontend feeds it
//! screen positions through [`crate::editor::EditingSession`].

pub mod mapper;
pub mod simplify;
pub mod store;
pub mod wave;

pub use mapper::ViewState;
pub use simplify::{simplified_len, simplify};
pub use store::{CurveStore, Inserted};
pub use wave::{WaveParams, WaveSplice};

/// Maximum number of points the simplified curve may contain.
///
/// Matches the lookup-table size the generated firmware reserves in flash.
pub const FIRMWARE_POINT_LIMIT: usize = 128;

/// Radius of a drawn curve point in screen pixels
pub const POINT_RADIUS: f32 = 5.0;
