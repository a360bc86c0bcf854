//! Action types for the frontend
//!
//! Panels never mutate the editing session directly. They return
//! `AppAction`s which the app applies in one place after rendering.

use crate::editor::EditorEvent;
use crate::i18n::Language;

/// Actions that any panel can emit
///
/// Panels return `Vec<AppAction>` instead of mutating state directly.
/// This enables:
/// - Testable input translation
/// - Clear separation between UI and editing logic
/// - Centralized action handling
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Forward an input event to the editing session
    Edit(EditorEvent),
    /// Ask for a destination and write the firmware sketch
    ExportSketch,
    /// Switch the interface language
    SetLanguage(Language),
}

impl From<EditorEvent> for AppAction {
    fn from(event: EditorEvent) -> Self {
        AppAction::Edit(event)
    }
}
