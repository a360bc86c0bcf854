//! Export destinations
//!
//! The session hands rendered sketches to an [`ExportSink`]. The desktop
//! app writes to disk through [`FileSink`]; tests substitute their own.

use std::path::Path;

use crate::error::{Result, ResultExt};

/// File extension of generated sketches
pub const SKETCH_EXTENSION: &str = "ino";

/// File name suggested in the save dialog
pub const DEFAULT_SKETCH_NAME: &str = "motor_curve.ino";

/// Somewhere a rendered sketch can be written
#[cfg_attr(test, mockall::automock)]
pub trait ExportSink {
    /// Write `contents` to `path`, replacing anything already there
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Writes sketches to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl ExportSink for FileSink {
    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write sketch to {:?}", path))
    }
}

/// The name shown to the user for an exported file (no directories)
pub fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_sink_writes_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.ino");
        FileSink.write(&path, "void loop() {}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "void loop() {}\n");
    }

    #[test]
    fn test_file_sink_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("curve.ino");
        let err = FileSink.write(&path, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write sketch"));
    }

    #[test]
    fn test_display_file_name_strips_directories() {
        let path = PathBuf::from("some").join("dir").join("motor.ino");
        assert_eq!(display_file_name(&path), "motor.ino");
        assert_eq!(display_file_name(Path::new("plain.ino")), "plain.ino");
    }
}
