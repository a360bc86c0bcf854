//! Error handling for the Motor Curve Studio application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application. Every engine operation reports through
//! [`CurveError`]; nothing in the curve engine panics on user input.

use thiserror::Error;

/// Main error type for curve editing and export operations
#[derive(Error, Debug)]
pub enum CurveError {
    /// A mutation would grow the simplified curve past the firmware table size
    #[error("Simplified curve would need {simplified} points (limit {limit})")]
    CapacityExceeded { simplified: usize, limit: usize },

    /// A point with NaN or infinite coordinates reached the curve
    #[error("Point coordinates must be finite")]
    NonFinitePoint,

    /// Export was requested with no points on the curve
    #[error("Curve has no points to export")]
    EmptyCurve,

    /// The user dismissed the export destination picker
    #[error("Export cancelled")]
    ExportCancelled,

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CurveError>,
    },
}

impl CurveError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CurveError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error (or the error it wraps) is a capacity rejection
    pub fn is_capacity_exceeded(&self) -> bool {
        match self {
            CurveError::CapacityExceeded { .. } => true,
            CurveError::WithContext { source, .. } => source.is_capacity_exceeded(),
            _ => false,
        }
    }

    /// Errors the user should not be notified about
    pub fn is_silent(&self) -> bool {
        match self {
            CurveError::EmptyCurve | CurveError::ExportCancelled => true,
            CurveError::WithContext { source, .. } => source.is_silent(),
            _ => false,
        }
    }
}

/// Result type alias for Motor Curve Studio operations
pub type Result<T> = std::result::Result<T, CurveError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CurveError::Io(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CurveError::Io(e).with_context(f()))
    }
}
