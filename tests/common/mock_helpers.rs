//! Export sink test doubles

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use motor_curve_studio::{CurveError, ExportSink, Result};

mockall::mock! {
    pub Sink {}

    impl ExportSink for Sink {
        fn write(&self, path: &Path, contents: &str) -> Result<()>;
    }
}

/// Sink that keeps every write in memory
#[derive(Default)]
pub struct RecordingSink {
    pub writes: RefCell<Vec<(PathBuf, String)>>,
}

impl ExportSink for RecordingSink {
    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.writes
            .borrow_mut()
            .push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}

/// A mock sink whose every write fails with `PermissionDenied`
pub fn failing_sink() -> MockSink {
    let mut sink = MockSink::new();
    sink.expect_write().returning(|_, _| {
        Err(CurveError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "destination is read-only",
        )))
    });
    sink
}
