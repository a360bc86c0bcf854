//! Frontend module for egui UI
//!
//! This module provides the desktop UI using eframe/egui. It owns the
//! [`EditingSession`] for the lifetime of the window, translates pointer and
//! keyboard input into editor events and renders the curve, the controls
//! and the status bar.
//!
//! # Main Types
//!
//! - [`CurveEditorApp`] - Main application state implementing [`eframe::App`]
//! - [`AppAction`] - What panels ask the app to do
//!
//! # Submodules
//!
//! - `plot` - Curve plot painting and pointer translation
//! - `panels` - Control panel (parameters, wave generator, actions)
//! - `status_bar` - Memory budget readout and transient banners

mod panels;
pub mod plot;
pub mod state;
mod status_bar;

pub use state::AppAction;

use std::path::PathBuf;

use crate::config::Preferences;
use crate::editor::{EditingSession, EditorEvent};
use crate::error::{CurveError, Result};
use crate::export::sink::{DEFAULT_SKETCH_NAME, SKETCH_EXTENSION};
use crate::export::FileSink;
use crate::i18n::{self, translate};
use panels::ControlsContext;

/// Main application state for the curve editor
pub struct CurveEditorApp {
    session: EditingSession,
    preferences: Preferences,
}

impl CurveEditorApp {
    /// Create the app from loaded preferences
    pub fn new(_cc: &eframe::CreationContext<'_>, preferences: Preferences) -> Self {
        let preferences = preferences.sanitized();
        i18n::set_language(preferences.language);
        let session = EditingSession::new(preferences.time_scale, preferences.epsilon);

        Self {
            session,
            preferences,
        }
    }

    fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Edit(event) => {
                self.session.handle(event);
            }
            AppAction::ExportSketch => self.export_sketch(),
            AppAction::SetLanguage(lang) => {
                i18n::set_language(lang);
                self.preferences.language = lang;
            }
        }
    }

    fn export_sketch(&mut self) {
        if self.session.is_empty() {
            return;
        }

        let lang = self.preferences.language;
        let mut dialog = rfd::FileDialog::new()
            .set_title(translate(lang, "save_dialog_title"))
            .add_filter(translate(lang, "arduino_sketch"), &[SKETCH_EXTENSION])
            .set_file_name(DEFAULT_SKETCH_NAME);
        if let Some(dir) = self.preferences.last_export_dir.as_ref() {
            dialog = dialog.set_directory(dir);
        }

        let result = export_destination(dialog.save_file()).and_then(|path| {
            self.session.export_to(&FileSink, &path)?;
            Ok(path)
        });
        match result {
            Ok(path) => self.preferences.remember_export(&path),
            Err(e) if e.is_silent() => tracing::debug!("Export skipped: {}", e),
            // The session already raised the failure banner
            Err(_) => {}
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::Key;

        if ctx.wants_keyboard_input() {
            return;
        }

        let delete = ctx.input(|i| i.key_pressed(Key::Delete) || i.key_pressed(Key::Backspace));
        if delete {
            self.handle_action(EditorEvent::DeleteSelected.into());
        }
    }

    fn sync_preferences(&mut self) {
        self.preferences.time_scale = self.session.time_scale();
        self.preferences.epsilon = self.session.epsilon();
    }
}

/// Turn the save dialog's answer into the sketch path to write
fn export_destination(choice: Option<PathBuf>) -> Result<PathBuf> {
    choice
        .map(with_sketch_extension)
        .ok_or(CurveError::ExportCancelled)
}

/// Append `.ino` when the chosen file name has no extension
fn with_sketch_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(SKETCH_EXTENSION)
    }
}

impl eframe::App for CurveEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        self.session.tick(dt);
        self.handle_keyboard_shortcuts(ctx);

        if self.session.capacity_warning() || self.session.export_notice().is_some() {
            ctx.request_repaint();
        }

        let mut actions = Vec::new();

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::render_status_bar(ui, &self.session);
        });

        // Controls
        egui::SidePanel::right("controls")
            .resizable(false)
            .min_width(280.0)
            .show(ctx, |ui| {
                let controls = ControlsContext {
                    time_scale: self.session.time_scale(),
                    epsilon: self.session.epsilon(),
                    has_points: !self.session.is_empty(),
                    has_selection: self.session.store().has_selection(),
                };
                actions.extend(panels::render_controls(
                    ui,
                    &controls,
                    &mut self.preferences.wave,
                ));
            });

        // Plot
        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(plot::render_plot(ui, &mut self.session));
        });

        for action in actions {
            self.handle_action(action);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.sync_preferences();

        if let Err(e) = self.preferences.save() {
            tracing::warn!("Failed to save preferences: {}", e);
        }
    }
}
