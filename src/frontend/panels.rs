//! Control panel: language, plot parameters, wave generator and actions.

use egui::{RichText, Slider, Ui};
use rust_i18n::t;

use crate::curve::mapper::TIME_SCALE_RANGE;
use crate::curve::simplify::EPSILON_RANGE;
use crate::curve::wave::{AMPLITUDE_RANGE, DENSITY_RANGE, FREQUENCY_RANGE};
use crate::curve::WaveParams;
use crate::editor::EditorEvent;
use crate::frontend::state::AppAction;
use crate::i18n::{current_language, Language};

/// Context needed to render the control panel
pub struct ControlsContext {
    pub time_scale: f32,
    pub epsilon: f32,
    pub has_points: bool,
    pub has_selection: bool,
}

/// Render the control panel.
///
/// Wave parameters are edited in place; everything that touches the curve
/// is returned as an action.
pub fn render_controls(ui: &mut Ui, ctx: &ControlsContext, wave: &mut WaveParams) -> Vec<AppAction> {
    let mut actions = Vec::new();

    render_language_group(ui, &mut actions);
    ui.separator();
    render_plot_group(ui, ctx, &mut actions);
    ui.separator();
    render_wave_group(ui, wave, &mut actions);
    ui.separator();
    render_action_group(ui, ctx, &mut actions);

    actions
}

fn render_language_group(ui: &mut Ui, actions: &mut Vec<AppAction>) {
    let current = current_language();
    egui::ComboBox::from_label(t!("language").to_string())
        .selected_text(current.display_name())
        .show_ui(ui, |ui| {
            for lang in Language::all() {
                if ui
                    .selectable_label(*lang == current, lang.display_name())
                    .clicked()
                    && *lang != current
                {
                    actions.push(AppAction::SetLanguage(*lang));
                }
            }
        });
}

fn render_plot_group(ui: &mut Ui, ctx: &ControlsContext, actions: &mut Vec<AppAction>) {
    let mut time_scale = ctx.time_scale;
    if ui
        .add(
            Slider::new(&mut time_scale, TIME_SCALE_RANGE)
                .text(t!("time_scale").to_string())
                .suffix(" s")
                .fixed_decimals(1),
        )
        .changed()
    {
        actions.push(EditorEvent::SetTimeScale(time_scale).into());
    }

    let mut epsilon = ctx.epsilon;
    if ui
        .add(
            Slider::new(&mut epsilon, EPSILON_RANGE)
                .text(t!("optimization").to_string())
                .fixed_decimals(2),
        )
        .changed()
    {
        actions.push(EditorEvent::SetEpsilon(epsilon).into());
    }
}

fn render_wave_group(ui: &mut Ui, wave: &mut WaveParams, actions: &mut Vec<AppAction>) {
    ui.label(RichText::new(t!("sine_wave").to_string()).strong());

    ui.add(
        Slider::new(&mut wave.amplitude, AMPLITUDE_RANGE)
            .text(t!("amplitude").to_string())
            .fixed_decimals(1),
    );
    ui.add(
        Slider::new(&mut wave.frequency, FREQUENCY_RANGE)
            .text(t!("frequency").to_string())
            .suffix(" Hz")
            .fixed_decimals(1),
    );
    ui.add(
        Slider::new(&mut wave.density, DENSITY_RANGE)
            .text(t!("density").to_string())
            .logarithmic(true)
            .fixed_decimals(3),
    );
    ui.checkbox(&mut wave.append, t!("append_wave").to_string());

    if ui.button(t!("generate_wave").to_string()).clicked() {
        actions.push(EditorEvent::GenerateWave(*wave).into());
    }
}

fn render_action_group(ui: &mut Ui, ctx: &ControlsContext, actions: &mut Vec<AppAction>) {
    ui.horizontal(|ui| {
        if ui.button(t!("reset_chart").to_string()).clicked() {
            actions.push(EditorEvent::Reset.into());
        }
        if ui
            .add_enabled(ctx.has_selection, egui::Button::new(t!("delete_selected").to_string()))
            .clicked()
        {
            actions.push(EditorEvent::DeleteSelected.into());
        }
    });

    if ui
        .add_enabled(ctx.has_points, egui::Button::new(t!("generate_code").to_string()))
        .clicked()
    {
        actions.push(AppAction::ExportSketch);
    }
}
