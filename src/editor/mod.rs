//! Editing session
//!
//! [`EditingSession`] is the single owner of everything an editing session
//! mutates: the [`CurveStore`], the active [`ViewState`], the in-progress
//! pointer gestures and the transient banners. The frontend translates raw
//! input into [`EditorEvent`]s and feeds them in one at a time; every event
//! runs to completion before the next one.
//!
//! # Pointer Gestures
//!
//! - Primary press on a point starts dragging it; anywhere else inserts
//! - Primary drag moves the dragged point (tracked by id across re-sorts)
//! - Secondary press/drag/release spans a selection rectangle
//!
//! # Budget Readout
//!
//! [`EditingSession::budget`] is computed from the current curve and the
//! current tolerance, cached on the store revision and the tolerance so the
//! readout can never lag behind either.

pub mod banner;

pub use banner::{ExportNotice, Transient, CAPACITY_WARNING_SECS, EXPORT_NOTICE_SECS};

use std::cell::Cell;
use std::path::Path;

use egui::{Pos2, Rect};

use crate::curve::mapper::{DEFAULT_TIME_SCALE, TIME_SCALE_RANGE};
use crate::curve::simplify::DEFAULT_EPSILON;
use crate::curve::{wave, CurveStore, ViewState, WaveParams};
use crate::error::{CurveError, Result};
use crate::export::{display_file_name, firmware, ExportSink};
use crate::types::{clamp_param, Point, PointId};

/// Normalized input from the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Primary button went down over the plot
    PointerPressed(Pos2),
    /// Primary button moved while held
    PointerDragged(Pos2),
    /// Primary button released
    PointerReleased,
    /// Secondary button went down: start a selection rectangle
    RegionSelectStart(Pos2),
    /// Secondary button moved while held
    RegionSelectDrag(Pos2),
    /// Secondary button released: select what the rectangle covers
    RegionSelectEnd,
    /// Remove every selected point
    DeleteSelected,
    /// Remove the point under the pointer, if any
    DeleteNearest(Pos2),
    /// Splice a sine wave from the span start to the right edge
    GenerateWave(WaveParams),
    /// Clear the curve
    Reset,
    /// Change the seconds spanned by the plot (clamped to 0.1..=10)
    SetTimeScale(f32),
    /// Change the simplification tolerance (clamped to 0.0..=2.0)
    SetEpsilon(f32),
}

/// What handling an event did to the curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorStatus {
    /// Nothing about the curve changed
    Unchanged,
    /// The curve or the selection changed
    Changed,
    /// A growth operation was refused; the budget warning was raised
    CapacityExceeded,
}

/// Point counts for the memory budget readout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    /// Points on the editable curve
    pub points: usize,
    /// Points the exported table would hold
    pub simplified: usize,
    /// Maximum table size
    pub limit: usize,
}

impl Budget {
    /// Fraction of the table in use, for progress displays
    pub fn usage(&self) -> f32 {
        if self.limit == 0 {
            return 1.0;
        }
        self.simplified as f32 / self.limit as f32
    }
}

#[derive(Debug, Clone, Copy)]
struct BudgetCache {
    revision: u64,
    epsilon_bits: u32,
    simplified: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RegionSelect {
    start: Pos2,
    end: Pos2,
}

/// One curve editing session
#[derive(Debug)]
pub struct EditingSession {
    store: CurveStore,
    view: ViewState,
    dragging: Option<PointId>,
    region: Option<RegionSelect>,
    capacity_warning: Transient<()>,
    export_notice: Transient<ExportNotice>,
    budget_cache: Cell<Option<BudgetCache>>,
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new(ViewState::default().time_scale, DEFAULT_EPSILON)
    }
}

impl EditingSession {
    /// Start an empty session
    pub fn new(time_scale: f32, epsilon: f32) -> Self {
        Self::with_store(CurveStore::new(epsilon), time_scale)
    }

    /// Start a session around an existing store
    pub fn with_store(store: CurveStore, time_scale: f32) -> Self {
        let view = ViewState {
            time_scale: clamp_param(time_scale, TIME_SCALE_RANGE, DEFAULT_TIME_SCALE),
            ..ViewState::default()
        };
        Self {
            store,
            view,
            dragging: None,
            region: None,
            capacity_warning: Transient::default(),
            export_notice: Transient::default(),
            budget_cache: Cell::new(None),
        }
    }

    // ==================== Accessors ====================

    pub fn store(&self) -> &CurveStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn time_scale(&self) -> f32 {
        self.view.time_scale
    }

    pub fn epsilon(&self) -> f32 {
        self.store.epsilon()
    }

    /// Ordered curve points for drawing
    pub fn points(&self) -> Vec<Point> {
        self.store.points()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Index of the point being dragged, if a drag is in progress
    pub fn dragged_index(&self) -> Option<usize> {
        self.dragging.and_then(|id| self.store.index_of(id))
    }

    /// The selection rectangle being drawn, in screen space
    pub fn selection_rect(&self) -> Option<Rect> {
        self.region.map(|r| Rect::from_two_pos(r.start, r.end))
    }

    /// Whether the budget warning is showing
    pub fn capacity_warning(&self) -> bool {
        self.capacity_warning.is_active()
    }

    /// The export banner, while it is showing
    pub fn export_notice(&self) -> Option<&ExportNotice> {
        self.export_notice.current()
    }

    /// Points, simplified points and limit for the budget readout
    pub fn budget(&self) -> Budget {
        let revision = self.store.revision();
        let epsilon_bits = self.store.epsilon().to_bits();
        let simplified = match self.budget_cache.get() {
            Some(c) if c.revision == revision && c.epsilon_bits == epsilon_bits => c.simplified,
            _ => {
                let simplified = self.store.simplified_len();
                self.budget_cache.set(Some(BudgetCache {
                    revision,
                    epsilon_bits,
                    simplified,
                }));
                simplified
            }
        };
        Budget {
            points: self.store.len(),
            simplified,
            limit: self.store.capacity(),
        }
    }

    // ==================== Frame Updates ====================

    /// Adopt this frame's plot rectangle (the time scale is kept)
    pub fn set_plot_rect(&mut self, rect: Rect) {
        self.view = ViewState::new(rect, self.view.time_scale);
    }

    /// Count down the transient banners by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.capacity_warning.tick(dt);
        self.export_notice.tick(dt);
    }

    // ==================== Events ====================

    /// Apply one input event
    pub fn handle(&mut self, event: EditorEvent) -> EditorStatus {
        match event {
            EditorEvent::PointerPressed(pos) => self.pointer_pressed(pos),
            EditorEvent::PointerDragged(pos) => self.pointer_dragged(pos),
            EditorEvent::PointerReleased => {
                self.dragging = None;
                EditorStatus::Unchanged
            }
            EditorEvent::RegionSelectStart(pos) => {
                self.region = Some(RegionSelect {
                    start: pos,
                    end: pos,
                });
                EditorStatus::Unchanged
            }
            EditorEvent::RegionSelectDrag(pos) => {
                if let Some(region) = self.region.as_mut() {
                    region.end = pos;
                }
                EditorStatus::Unchanged
            }
            EditorEvent::RegionSelectEnd => match self.region.take() {
                Some(region) if !self.view.is_degenerate() => {
                    self.store.select_region(region.start, region.end, &self.view);
                    EditorStatus::Changed
                }
                _ => EditorStatus::Unchanged,
            },
            EditorEvent::DeleteSelected => {
                if !self.store.has_selection() {
                    return EditorStatus::Unchanged;
                }
                self.store.delete_selected();
                self.drop_stale_drag();
                EditorStatus::Changed
            }
            EditorEvent::DeleteNearest(pos) => {
                if self.view.is_degenerate() {
                    return EditorStatus::Unchanged;
                }
                match self.store.hit_test(pos, &self.view) {
                    Some(index) => {
                        self.store.delete_indices([index]);
                        self.drop_stale_drag();
                        EditorStatus::Changed
                    }
                    None => EditorStatus::Unchanged,
                }
            }
            EditorEvent::GenerateWave(params) => {
                let result = wave::generate_to_end(&mut self.store, &params, self.view.time_scale);
                match result {
                    Ok(_) => {
                        self.dragging = None;
                        EditorStatus::Changed
                    }
                    Err(e) => self.rejected(e),
                }
            }
            EditorEvent::Reset => {
                self.store.reset();
                self.dragging = None;
                self.region = None;
                tracing::debug!("Curve reset");
                EditorStatus::Changed
            }
            EditorEvent::SetTimeScale(time_scale) => {
                self.view.time_scale =
                    clamp_param(time_scale, TIME_SCALE_RANGE, DEFAULT_TIME_SCALE);
                EditorStatus::Unchanged
            }
            EditorEvent::SetEpsilon(epsilon) => {
                self.store.set_epsilon(epsilon);
                EditorStatus::Unchanged
            }
        }
    }

    /// Remove the single point nearest `pos` within the pick radius
    pub fn delete_nearest(&mut self, pos: Pos2) -> bool {
        self.handle(EditorEvent::DeleteNearest(pos)) == EditorStatus::Changed
    }

    fn pointer_pressed(&mut self, pos: Pos2) -> EditorStatus {
        if self.view.is_degenerate() {
            return EditorStatus::Unchanged;
        }
        if let Some(index) = self.store.hit_test(pos, &self.view) {
            self.dragging = self.store.id_at(index);
            return EditorStatus::Unchanged;
        }
        let point = self.view.to_data(pos);
        match self.store.try_insert(point, self.view.time_scale) {
            Ok(_) => EditorStatus::Changed,
            Err(e) => self.rejected(e),
        }
    }

    fn pointer_dragged(&mut self, pos: Pos2) -> EditorStatus {
        if self.view.is_degenerate() {
            return EditorStatus::Unchanged;
        }
        let Some(index) = self.dragged_index() else {
            return EditorStatus::Unchanged;
        };
        let target = self.view.to_data(pos);
        match self.store.move_point(index, target, self.view.time_scale) {
            Some(_) => EditorStatus::Changed,
            None => EditorStatus::Unchanged,
        }
    }

    fn rejected(&mut self, err: CurveError) -> EditorStatus {
        if err.is_capacity_exceeded() {
            self.capacity_warning.raise((), CAPACITY_WARNING_SECS);
            EditorStatus::CapacityExceeded
        } else {
            tracing::debug!("Ignored curve edit: {}", err);
            EditorStatus::Unchanged
        }
    }

    fn drop_stale_drag(&mut self) {
        if self.dragged_index().is_none() {
            self.dragging = None;
        }
    }

    // ==================== Export ====================

    /// Sketch text for the current curve at the current tolerance
    pub fn export_text(&self) -> Result<String> {
        if self.store.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        firmware::render(&self.store.simplified())
    }

    /// Render the sketch and write it through `sink`
    ///
    /// Raises the success or failure banner. An empty curve is a silent
    /// no-op: nothing is written and no banner is raised.
    pub fn export_to(&mut self, sink: &dyn ExportSink, path: &Path) -> Result<String> {
        let text = self.export_text()?;
        match sink.write(path, &text) {
            Ok(()) => {
                let file_name = display_file_name(path);
                tracing::info!("Exported sketch to {:?}", path);
                self.export_notice.raise(
                    ExportNotice::Succeeded {
                        file_name: file_name.clone(),
                    },
                    EXPORT_NOTICE_SECS,
                );
                Ok(file_name)
            }
            Err(e) => {
                tracing::warn!("Export failed: {}", e);
                self.export_notice.raise(
                    ExportNotice::Failed {
                        reason: e.to_string(),
                    },
                    EXPORT_NOTICE_SECS,
                );
                Err(e)
            }
        }
    }
}
