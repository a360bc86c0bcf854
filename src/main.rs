//! Motor Curve Studio - Main Entry Point
//!
//! Interactive editor for PWM motor curves with Arduino sketch export.

use anyhow::Context as _;
use motor_curve_studio::{config::Preferences, frontend::CurveEditorApp, i18n};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,motor_curve_studio=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Motor Curve Studio");

    // Load preferences (language, plot and wave settings)
    let preferences = Preferences::load_or_default();
    let title = i18n::translate(preferences.language, "app_title");

    // Configure eframe options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([900.0, 560.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    // Run the eframe application
    let result = eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| {
            if preferences.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            Ok(Box::new(CurveEditorApp::new(cc, preferences)))
        }),
    );

    tracing::info!("Shutting down...");

    result.map_err(|e| anyhow::anyhow!("{e}")).context("Failed to run the editor window")
}
