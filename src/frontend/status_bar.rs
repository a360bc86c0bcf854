//! Status bar panel: bottom bar showing the memory budget and banners.

use egui::{Color32, RichText, Ui};
use rust_i18n::t;

use crate::editor::{Budget, EditingSession, ExportNotice};

/// Share of the table above which the readout turns amber
const BUDGET_WARN_RATIO: f32 = 0.9;

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, session: &EditingSession) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // === Budget readout ===
        let budget = session.budget();
        ui.colored_label(
            budget_color(&budget),
            RichText::new(t!(
                "points_readout",
                points = budget.points,
                simplified = budget.simplified,
                limit = budget.limit
            ))
            .small(),
        );

        if session.capacity_warning() {
            ui.separator();
            ui.colored_label(Color32::from_rgb(255, 51, 51), t!("memory_warning").to_string());
        }

        // === Export result (right-aligned) ===
        if let Some(notice) = session.export_notice() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match notice {
                    ExportNotice::Succeeded { file_name } => {
                        ui.colored_label(
                            Color32::from_rgb(100, 255, 100),
                            t!("file_generated", name = file_name).to_string(),
                        );
                    }
                    ExportNotice::Failed { reason } => {
                        ui.colored_label(Color32::RED, t!("export_failed", reason = reason).to_string());
                    }
                }
            });
        }
    });
}

fn budget_color(budget: &Budget) -> Color32 {
    if budget.simplified > budget.limit {
        Color32::RED
    } else if budget.usage() >= BUDGET_WARN_RATIO {
        Color32::YELLOW
    } else {
        Color32::GRAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_color() {
        let budget = |simplified| Budget {
            points: 200,
            simplified,
            limit: 128,
        };
        assert_eq!(budget_color(&budget(10)), Color32::GRAY);
        assert_eq!(budget_color(&budget(120)), Color32::YELLOW);
        assert_eq!(budget_color(&budget(128)), Color32::YELLOW);
        assert_eq!(budget_color(&budget(129)), Color32::RED);
    }
}
