//! Ramer–Douglas–Peucker curve simplification
//!
//! The same simplification drives both the live memory-budget readout and
//! the exported firmware tables, so the count shown while editing is the
//! count that gets written.
//!
//! The algorithm is a pure recursive divide-and-conquer over an ordered
//! slice. It always keeps the first and last point, and it is idempotent:
//! simplifying an already simplified curve with the same tolerance returns
//! it unchanged.

use crate::types::Point;

/// Default simplification tolerance
pub const DEFAULT_EPSILON: f32 = 0.5;

/// Allowed range for the simplification tolerance
pub const EPSILON_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

/// Distance from `p` to the chord `a`-`b`
///
/// The projection is clamped onto the segment, and a zero-length chord
/// falls back to the distance to its single location.
pub fn chord_distance(p: &Point, a: &Point, b: &Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dx == 0.0 && dy == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / (dx * dx + dy * dy)).clamp(0.0, 1.0);
    p.distance(&Point::new(a.x + t * dx, a.y + t * dy))
}

/// Simplify an ordered point sequence with tolerance `epsilon`
pub fn simplify(points: &[Point], epsilon: f32) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut out = Vec::with_capacity(points.len().min(64));
    out.push(points[0]);
    simplify_into(points, epsilon, &mut out);
    out
}

/// Number of points [`simplify`] would keep, without keeping them
pub fn simplified_len(points: &[Point], epsilon: f32) -> usize {
    if points.len() < 3 {
        return points.len();
    }
    1 + count_kept(points, epsilon)
}

/// Index and distance of the interior point farthest from the chord
///
/// Strict `>` keeps the first index on exact ties.
fn farthest_interior(points: &[Point]) -> (usize, f32) {
    let first = &points[0];
    let last = &points[points.len() - 1];
    let mut max_dist = 0.0;
    let mut index = 0;
    for (i, p) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let d = chord_distance(p, first, last);
        if d > max_dist {
            index = i;
            max_dist = d;
        }
    }
    (index, max_dist)
}

/// Appends everything after `points[0]` that survives simplification.
fn simplify_into(points: &[Point], epsilon: f32, out: &mut Vec<Point>) {
    if points.len() < 3 {
        out.extend_from_slice(&points[1..]);
        return;
    }
    let (index, max_dist) = farthest_interior(points);
    if max_dist > epsilon {
        // The junction point ends the left half and starts the right one
        simplify_into(&points[..=index], epsilon, out);
        simplify_into(&points[index..], epsilon, out);
    } else {
        out.push(points[points.len() - 1]);
    }
}

fn count_kept(points: &[Point], epsilon: f32) -> usize {
    if points.len() < 3 {
        return points.len() - 1;
    }
    let (index, max_dist) = farthest_interior(points);
    if max_dist > epsilon {
        count_kept(&points[..=index], epsilon) + count_kept(&points[index..], epsilon)
    } else {
        1
    }
}
