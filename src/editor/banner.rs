//! Transient notifications
//!
//! Short-lived signals raised by the session (budget exceeded, export
//! finished) that the frontend shows for a fixed time. Each one is a
//! countdown decremented by the frame delta.

/// How long the budget warning stays visible
pub const CAPACITY_WARNING_SECS: f32 = 2.0;

/// How long export results stay visible
pub const EXPORT_NOTICE_SECS: f32 = 3.0;

/// A value that is visible until its countdown runs out
#[derive(Debug, Clone, PartialEq)]
pub struct Transient<T> {
    value: Option<T>,
    remaining: f32,
}

impl<T> Default for Transient<T> {
    fn default() -> Self {
        Self {
            value: None,
            remaining: 0.0,
        }
    }
}

impl<T> Transient<T> {
    /// Show `value` for `seconds`, replacing whatever was showing
    pub fn raise(&mut self, value: T, seconds: f32) {
        self.value = Some(value);
        self.remaining = seconds;
    }

    /// Advance the countdown by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if self.value.is_none() {
            return;
        }
        self.remaining -= dt.max(0.0);
        if self.remaining <= 0.0 {
            self.value = None;
            self.remaining = 0.0;
        }
    }

    /// The value, while it is still visible
    pub fn current(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.value.is_some()
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// Outcome of the last export, for the notification banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportNotice {
    /// Sketch written; carries the file name without directories
    Succeeded { file_name: String },
    /// Sketch could not be written
    Failed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_expires() {
        let mut t = Transient::default();
        t.raise((), CAPACITY_WARNING_SECS);
        t.tick(1.5);
        assert!(t.is_active());
        assert!((t.remaining() - 0.5).abs() < 1e-6);
        t.tick(0.5);
        assert!(!t.is_active());
        assert_eq!(t.remaining(), 0.0);
    }

    #[test]
    fn test_raise_restarts_countdown() {
        let mut t = Transient::default();
        t.raise(
            ExportNotice::Succeeded {
                file_name: "a.ino".into(),
            },
            EXPORT_NOTICE_SECS,
        );
        t.tick(2.9);
        t.raise(
            ExportNotice::Failed {
                reason: "denied".into(),
            },
            EXPORT_NOTICE_SECS,
        );
        t.tick(2.9);
        assert_eq!(
            t.current(),
            Some(&ExportNotice::Failed {
                reason: "denied".into()
            })
        );
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut t = Transient::default();
        t.raise(1u8, 1.0);
        t.tick(-5.0);
        assert_eq!(t.remaining(), 1.0);
    }
}
