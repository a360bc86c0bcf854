//! The canonical editable curve
//!
//! [`CurveStore`] is the only mutator of the curve. It keeps points sorted
//! by time after every mutation and gates every growth operation on the
//! firmware table budget: the candidate curve is simplified with the
//! current tolerance and rejected if the simplified form would not fit.
//! Simplification is never applied to the stored points themselves.
//!
//! # Ordering
//!
//! Points with equal time keep their relative order (the sort is stable).
//! A newly inserted point lands after existing points at the same time.
//!
//! # Identity
//!
//! Every stored point carries a [`PointId`]. Indices shift whenever the
//! curve is re-sorted; ids do not, so drag gestures and the selection are
//! tracked by id and resolved to indices on demand.

use std::collections::BTreeSet;

use egui::{Pos2, Rect};

use super::mapper::ViewState;
use super::simplify::{simplified_len, simplify, DEFAULT_EPSILON, EPSILON_RANGE};
use super::{FIRMWARE_POINT_LIMIT, POINT_RADIUS};
use crate::error::{CurveError, Result};
use crate::types::{clamp_param, Point, PointId};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    id: PointId,
    point: Point,
}

/// Result of a successful insertion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inserted {
    pub id: PointId,
    pub index: usize,
    /// The point as stored, after clamping
    pub point: Point,
}

/// Owner of the curve points and the point selection
#[derive(Debug, Clone)]
pub struct CurveStore {
    entries: Vec<Entry>,
    selection: BTreeSet<PointId>,
    epsilon: f32,
    capacity: usize,
    next_id: u64,
    revision: u64,
}

impl Default for CurveStore {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

impl CurveStore {
    /// Create an empty store with the given simplification tolerance
    pub fn new(epsilon: f32) -> Self {
        Self {
            entries: Vec::new(),
            selection: BTreeSet::new(),
            epsilon: clamp_param(epsilon, EPSILON_RANGE, DEFAULT_EPSILON),
            capacity: FIRMWARE_POINT_LIMIT,
            next_id: 0,
            revision: 0,
        }
    }

    /// Override the simplified-point budget
    pub fn with_capacity_limit(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    // ==================== Queries ====================

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The curve points in time order
    pub fn points(&self) -> Vec<Point> {
        self.entries.iter().map(|e| e.point).collect()
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.entries.get(index).map(|e| e.point)
    }

    pub fn last(&self) -> Option<Point> {
        self.entries.last().map(|e| e.point)
    }

    pub fn id_at(&self, index: usize) -> Option<PointId> {
        self.entries.get(index).map(|e| e.id)
    }

    /// Current index of the point with the given id
    pub fn index_of(&self, id: PointId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Set the simplification tolerance, clamped to its allowed range
    pub fn set_epsilon(&mut self, epsilon: f32) {
        self.epsilon = clamp_param(epsilon, EPSILON_RANGE, DEFAULT_EPSILON);
    }

    /// Maximum number of points the simplified curve may hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Counter bumped by every mutation of the points
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The curve as it would be exported with the current tolerance
    pub fn simplified(&self) -> Vec<Point> {
        simplify(&self.points(), self.epsilon)
    }

    pub fn simplified_len(&self) -> usize {
        simplified_len(&self.points(), self.epsilon)
    }

    // ==================== Mutations ====================

    /// Insert a point, unless the simplified curve would exceed the budget
    ///
    /// The point is clamped into `[0, time_scale] x [0, 100]` first. On
    /// rejection the store is left untouched.
    pub fn try_insert(&mut self, point: Point, time_scale: f32) -> Result<Inserted> {
        if !point.is_finite() {
            return Err(CurveError::NonFinitePoint);
        }
        let point = point.clamped(time_scale);
        let id = PointId(self.next_id);

        let mut candidate = self.entries.clone();
        candidate.push(Entry { id, point });
        sort_entries(&mut candidate);
        self.check_capacity(&candidate)?;

        self.next_id += 1;
        self.commit(candidate);
        let index = self.index_of(id).unwrap_or_default();
        tracing::debug!("Inserted point {} {} at index {}", id, point, index);
        Ok(Inserted { id, index, point })
    }

    /// Move the point at `index` and return its index after re-sorting
    ///
    /// Out-of-range indices and non-finite targets are ignored and yield
    /// `None`. Moving never changes the point count, so no budget check.
    pub fn move_point(&mut self, index: usize, point: Point, time_scale: f32) -> Option<usize> {
        if !point.is_finite() {
            return None;
        }
        let entry = self.entries.get_mut(index)?;
        entry.point = point.clamped(time_scale);
        let id = entry.id;
        sort_entries(&mut self.entries);
        self.revision += 1;
        self.index_of(id)
    }

    /// Remove the points at the given indices
    ///
    /// Indices outside the curve are ignored. The selection is cleared.
    /// Returns the number of points removed.
    pub fn delete_indices<I>(&mut self, indices: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let mut indices: Vec<usize> = indices
            .into_iter()
            .filter(|&i| i < self.entries.len())
            .collect();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.dedup();

        for &i in &indices {
            self.entries.remove(i);
        }
        self.selection.clear();
        if !indices.is_empty() {
            self.revision += 1;
            tracing::debug!("Deleted {} points", indices.len());
        }
        indices.len()
    }

    /// Remove every selected point
    pub fn delete_selected(&mut self) -> usize {
        let indices = self.selected_indices();
        self.delete_indices(indices)
    }

    /// Replace every point at or after `span_start` with `samples`
    ///
    /// The spliced curve goes through the same budget check as an insert.
    /// The selection is cleared on success.
    pub fn splice_from(&mut self, span_start: f32, samples: &[Point]) -> Result<usize> {
        let mut candidate: Vec<Entry> = self
            .entries
            .iter()
            .copied()
            .filter(|e| e.point.x < span_start)
            .collect();
        let mut next_id = self.next_id;
        candidate.extend(samples.iter().map(|&point| {
            let id = PointId(next_id);
            next_id += 1;
            Entry { id, point }
        }));
        sort_entries(&mut candidate);
        self.check_capacity(&candidate)?;

        self.next_id = next_id;
        self.commit(candidate);
        self.selection.clear();
        Ok(samples.len())
    }

    /// Remove all points and the selection
    pub fn reset(&mut self) {
        self.entries.clear();
        self.selection.clear();
        self.revision += 1;
    }

    // ==================== Picking & Selection ====================

    /// Index of the closest point within the pick radius of `pointer`
    ///
    /// Distances are measured in screen space; a point qualifies when its
    /// squared distance is below `(2 * POINT_RADIUS)^2`. Ties go to the
    /// earlier point.
    pub fn hit_test(&self, pointer: Pos2, view: &ViewState) -> Option<usize> {
        let limit = (2.0 * POINT_RADIUS) * (2.0 * POINT_RADIUS);
        let mut best: Option<(usize, f32)> = None;
        for (i, entry) in self.entries.iter().enumerate() {
            let dist = view.to_screen(entry.point).distance_sq(pointer);
            if dist < limit && best.is_none_or(|(_, d)| dist < d) {
                best = Some((i, dist));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Select every point whose screen position lies in the rectangle
    /// spanned by `a` and `b` (corner order does not matter, edges count)
    pub fn select_region(&mut self, a: Pos2, b: Pos2, view: &ViewState) -> usize {
        let rect = Rect::from_two_pos(a, b);
        self.selection = self
            .entries
            .iter()
            .filter(|e| {
                let p = view.to_screen(e.point);
                p.x >= rect.min.x && p.x <= rect.max.x && p.y >= rect.min.y && p.y <= rect.max.y
            })
            .map(|e| e.id)
            .collect();
        self.selection.len()
    }

    /// Indices of the selected points, ascending
    pub fn selected_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| self.selection.contains(&e.id))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .is_some_and(|e| self.selection.contains(&e.id))
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ==================== Internals ====================

    fn check_capacity(&self, candidate: &[Entry]) -> Result<()> {
        let points: Vec<Point> = candidate.iter().map(|e| e.point).collect();
        let simplified = simplified_len(&points, self.epsilon);
        if simplified > self.capacity {
            tracing::warn!(
                "Rejected curve change: {} simplified points exceed limit of {}",
                simplified,
                self.capacity
            );
            return Err(CurveError::CapacityExceeded {
                simplified,
                limit: self.capacity,
            });
        }
        Ok(())
    }

    fn commit(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        // Drop selected ids that no longer exist
        let live: BTreeSet<PointId> = self.entries.iter().map(|e| e.id).collect();
        self.selection.retain(|id| live.contains(id));
        self.revision += 1;
    }
}

fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.point.cmp_x(&b.point));
}
