//! Test data builders for creating curves

use motor_curve_studio::{CurveStore, Point};

/// Builder for creating test curves
pub struct CurveBuilder {
    points: Vec<Point>,
    epsilon: f32,
    time_scale: f32,
}

impl CurveBuilder {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            epsilon: 0.0,
            time_scale: 10.0,
        }
    }

    pub fn epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn point(mut self, x: f32, y: f32) -> Self {
        self.points.push(Point::new(x, y));
        self
    }

    /// `count` points 10 ms apart alternating between 0 % and 100 %
    ///
    /// Every point is a corner, so at zero tolerance the simplified size
    /// equals `count`.
    pub fn zigzag(mut self, count: usize) -> Self {
        self.points.extend((0..count).map(|i| {
            let y = if i % 2 == 0 { 0.0 } else { 100.0 };
            Point::new(i as f32 * 0.01, y)
        }));
        self
    }

    pub fn points(&self) -> Vec<Point> {
        self.points.clone()
    }

    /// Insert every point through the budget gate
    pub fn build(self) -> CurveStore {
        let mut store = CurveStore::new(self.epsilon);
        for point in self.points {
            store
                .try_insert(point, self.time_scale)
                .expect("builder curve exceeds the point budget");
        }
        store
    }
}

impl Default for CurveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_builder() {
        let store = CurveBuilder::new().point(0.5, 10.0).point(0.1, 20.0).build();

        assert_eq!(store.len(), 2);
        assert_eq!(store.point(0), Some(Point::new(0.1, 20.0)));
    }
}
