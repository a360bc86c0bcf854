//! Curve plot rendering and pointer translation
//!
//! The plot is painted directly with the egui painter: grid, axis labels,
//! the curve polyline, its points and the selection rectangle. Raw pointer
//! state is reduced to a [`PointerInput`] snapshot and translated into
//! [`EditorEvent`]s by [`pointer_events`].

use egui::{Align2, Color32, FontId, PointerButton, Pos2, Rect, Sense, Shape, Stroke, Ui};

use crate::curve::POINT_RADIUS;
use crate::editor::{EditingSession, EditorEvent};
use crate::frontend::state::AppAction;
use crate::types::{Point, VALUE_MAX};

/// Height of the plot area in points
pub const PLOT_HEIGHT: f32 = 400.0;

/// Space reserved left of the plot for value labels
const VALUE_LABEL_MARGIN: f32 = 36.0;

/// Space reserved below the plot for time labels
const TIME_LABEL_MARGIN: f32 = 20.0;

const GRID_COLOR: Color32 = Color32::from_rgb(60, 60, 60);
const LINE_COLOR: Color32 = Color32::from_rgb(68, 170, 255);
const POINT_COLOR: Color32 = Color32::from_rgb(255, 68, 68);
const SELECTED_COLOR: Color32 = Color32::from_rgb(255, 255, 0);
const LABEL_COLOR: Color32 = Color32::WHITE;

/// Pointer state for one frame, as seen by the plot
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    /// Pointer position, if the pointer is over the window
    pub pos: Option<Pos2>,
    /// Whether the pointer is over the plot area
    pub hovered: bool,
    pub primary_pressed: bool,
    pub primary_down: bool,
    pub primary_released: bool,
    pub primary_double_clicked: bool,
    pub secondary_pressed: bool,
    pub secondary_down: bool,
    pub secondary_released: bool,
}

impl PointerInput {
    /// Snapshot the pointer state from egui
    pub fn capture(ui: &Ui, hovered: bool) -> Self {
        ui.input(|i| Self {
            pos: i.pointer.interact_pos(),
            hovered,
            primary_pressed: i.pointer.button_pressed(PointerButton::Primary),
            primary_down: i.pointer.button_down(PointerButton::Primary),
            primary_released: i.pointer.button_released(PointerButton::Primary),
            primary_double_clicked: i.pointer.button_double_clicked(PointerButton::Primary),
            secondary_pressed: i.pointer.button_pressed(PointerButton::Secondary),
            secondary_down: i.pointer.button_down(PointerButton::Secondary),
            secondary_released: i.pointer.button_released(PointerButton::Secondary),
        })
    }
}

/// Translate one frame of pointer state into editor events
///
/// Presses only count over the plot; drags and releases are delivered
/// wherever the pointer is so a gesture leaving the plot still ends.
pub fn pointer_events(input: &PointerInput) -> Vec<EditorEvent> {
    let mut events = Vec::new();

    if let Some(pos) = input.pos {
        if input.hovered && input.primary_pressed {
            events.push(EditorEvent::PointerPressed(pos));
        } else if input.primary_down {
            events.push(EditorEvent::PointerDragged(pos));
        }

        if input.hovered && input.primary_double_clicked {
            events.push(EditorEvent::DeleteNearest(pos));
        }

        if input.hovered && input.secondary_pressed {
            events.push(EditorEvent::RegionSelectStart(pos));
        } else if input.secondary_down {
            events.push(EditorEvent::RegionSelectDrag(pos));
        }
    }

    if input.primary_released {
        events.push(EditorEvent::PointerReleased);
    }
    if input.secondary_released {
        events.push(EditorEvent::RegionSelectEnd);
    }

    events
}

/// Format a time axis label
pub fn time_label(t: f32) -> String {
    if t.fract().abs() < 1e-4 {
        format!("{:.0}", t)
    } else {
        format!("{:.1}", t)
    }
}

/// Render the plot and return the actions its input produced
///
/// The session adopts the plot rectangle laid out this frame before any
/// input is translated, so pointer positions map against what is drawn.
pub fn render_plot(ui: &mut Ui, session: &mut EditingSession) -> Vec<AppAction> {
    let width = ui.available_width();
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, PLOT_HEIGHT), Sense::click_and_drag());

    let outer = response.rect;
    let plot_rect = Rect::from_min_max(
        Pos2::new(outer.min.x + VALUE_LABEL_MARGIN, outer.min.y),
        Pos2::new(outer.max.x, outer.max.y - TIME_LABEL_MARGIN),
    );
    session.set_plot_rect(plot_rect);

    let hovered = response.hovered() && ui.rect_contains_pointer(plot_rect);
    let input = PointerInput::capture(ui, hovered);
    let actions: Vec<AppAction> = pointer_events(&input)
        .into_iter()
        .map(AppAction::from)
        .collect();

    paint_grid(&painter, session);
    paint_curve(&painter, session);

    if let Some(rect) = session.selection_rect() {
        painter.rect_filled(rect, 0.0, Color32::from_white_alpha(30));
        painter.rect_stroke(
            rect,
            0.0,
            Stroke::new(0.5, Color32::from_white_alpha(150)),
            egui::StrokeKind::Inside,
        );
    }

    actions
}

fn paint_grid(painter: &egui::Painter, session: &EditingSession) {
    let view = session.view();
    let rect = view.rect();
    let stroke = Stroke::new(1.0, GRID_COLOR);
    let font = FontId::proportional(11.0);

    for t in view.grid_times() {
        let x = view.to_screen(Point::new(t, 0.0)).x;
        painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
    }
    for t in view.label_times() {
        if t <= 0.0 || t >= view.time_scale {
            continue;
        }
        let x = view.to_screen(Point::new(t, 0.0)).x;
        painter.text(
            Pos2::new(x, rect.max.y + 4.0),
            Align2::CENTER_TOP,
            time_label(t),
            font.clone(),
            LABEL_COLOR,
        );
    }

    for v in view.grid_values() {
        let y = view.to_screen(Point::new(0.0, v)).y;
        painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
        if v > 0.0 && v < VALUE_MAX {
            painter.text(
                Pos2::new(rect.min.x - 4.0, y),
                Align2::RIGHT_CENTER,
                format!("{:.0}%", v),
                font.clone(),
                LABEL_COLOR,
            );
        }
    }
}

fn paint_curve(painter: &egui::Painter, session: &EditingSession) {
    let view = session.view();
    let screen: Vec<Pos2> = session
        .points()
        .into_iter()
        .map(|p| view.to_screen(p))
        .collect();
    if screen.is_empty() {
        return;
    }

    if screen.len() > 1 {
        painter.add(Shape::line(screen.clone(), Stroke::new(2.0, LINE_COLOR)));
    }

    let store = session.store();
    for (i, pos) in screen.into_iter().enumerate() {
        let color = if store.is_selected(i) {
            SELECTED_COLOR
        } else {
            POINT_COLOR
        };
        painter.circle_filled(pos, POINT_RADIUS, color);
    }
}
