// File: crates/linegraph-core/src/series.rs
// Summary: Point and Series model. A Series is never empty, so first/last are infallible.
// Notes:
// - x is expected to be non-decreasing; the x-domain is read from the first and
//   last points, not scanned. Out-of-order input is accepted but logged.

use crate::error::{GraphError, Result};

/// One sample: plotted at (x, y), labelled with `timestamp_ms` (epoch millis) in the date tooltip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: i64,
}

impl Point {
    pub const fn new(x: f64, y: f64, timestamp_ms: i64) -> Self {
        Self { x, y, timestamp_ms }
    }
}

impl From<(f64, f64, i64)> for Point {
    fn from((x, y, timestamp_ms): (f64, f64, i64)) -> Self {
        Self { x, y, timestamp_ms }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    /// Validate and wrap `points`: rejects an empty vector and NaN/infinite coordinates.
    pub fn try_new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(GraphError::EmptySeries);
        }
        if let Some(index) = points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GraphError::NonFiniteValue { index });
        }
        if let Some(i) = points.windows(2).position(|w| w[1].x < w[0].x) {
            log::warn!(
                "series x values decrease at index {} ({} -> {}); domain still uses first/last",
                i + 1,
                points[i].x,
                points[i + 1].x
            );
        }
        Ok(Self { points })
    }

    /// Convenience for `(x, y, timestamp_ms)` triples.
    pub fn from_triples(data: impl IntoIterator<Item = (f64, f64, i64)>) -> Result<Self> {
        Self::try_new(data.into_iter().map(Point::from).collect())
    }

    pub fn first(&self) -> &Point {
        &self.points[0]
    }

    pub fn last(&self) -> &Point {
        &self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept so `len` has its usual companion.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// True (min, max) scan over every y value, seeded with the first point.
    pub fn y_extent(&self) -> (f64, f64) {
        let seed = self.first().y;
        self.points
            .iter()
            .fold((seed, seed), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)))
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl TryFrom<Vec<Point>> for Series {
    type Error = GraphError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::try_new(points)
    }
}
