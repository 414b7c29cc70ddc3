use serde_json::Value;

/// A 2D coordinate read from a `{"x": .., "y": ..}` JSON object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Missing fields, non-numeric fields and non-object values all read
    /// as coordinate 0. Point extraction never fails.
    pub fn from_value(value: &Value) -> Self {
        let coord = |key| value.get(key).and_then(Value::as_f64).unwrap_or(0.0);

        Point {
            x: coord("x"),
            y: coord("y"),
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Indices of the points that survive deduplication, in input order.
///
/// A candidate is compared against every point already accepted, not just
/// its predecessor, so near-duplicates separated by pruned points still get
/// caught. Sequences of two or fewer points pass through whole.
pub(crate) fn retained_indices(points: &[Point], tolerance: f64) -> Vec<usize> {
    if points.len() <= 2 {
        return (0..points.len()).collect();
    }

    // The first point is always kept
    let mut kept = vec![0];

    for (index, &point) in points.iter().enumerate().skip(1) {
        let duplicate = kept
            .iter()
            .any(|&existing| point.distance(points[existing]) < tolerance);

        if !duplicate {
            kept.push(index);
        }
    }

    // A closing vertex within tolerance of the first point is redundant
    if kept.len() >= 3 && points[kept[kept.len() - 1]].distance(points[kept[0]]) < tolerance {
        kept.pop();
    }

    kept
}

/// Remove near-duplicate and wrap-around duplicate points from a closed
/// polygon. Returns a new sequence; the input is never mutated.
pub fn dedupe(polygon: &[Point], tolerance: f64) -> Vec<Point> {
    retained_indices(polygon, tolerance)
        .into_iter()
        .map(|index| polygon[index])
        .collect()
}
