use log::info;
use serde_json::Value;

use crate::geometry::{retained_indices, Point};

/// Key whose array values are treated as polygons, at any nesting depth.
const POLYGON_KEY: &str = "polygon";

/// Recursively clean every polygon array in the document.
///
/// Returns the transformed document and the total number of points removed
/// from its subtree. Arrays under a `"polygon"` key are deduplicated and
/// replaced; all other containers are descended into; scalars pass through.
/// A `"polygon"` key holding anything but an array is left untouched.
pub fn clean_tree(node: Value, tolerance: f64) -> (Value, usize) {
    match node {
        Value::Object(entries) => {
            let mut removed = 0;
            let rebuilt = entries
                .into_iter()
                .map(|(key, value)| {
                    let (processed, count) = match value {
                        Value::Array(items) if key == POLYGON_KEY => {
                            let (cleaned, count) = clean_polygon(items, tolerance);
                            (Value::Array(cleaned), count)
                        }
                        other => clean_tree(other, tolerance),
                    };
                    removed += count;
                    (key, processed)
                })
                .collect();

            (Value::Object(rebuilt), removed)
        }
        Value::Array(items) => {
            let mut removed = 0;
            let rebuilt = items
                .into_iter()
                .map(|item| {
                    let (processed, count) = clean_tree(item, tolerance);
                    removed += count;
                    processed
                })
                .collect();

            (Value::Array(rebuilt), removed)
        }
        scalar => (scalar, 0),
    }
}

/// Deduplicate one polygon array, keeping the original JSON values of the
/// surviving elements so that fields beyond x/y stay intact.
fn clean_polygon(items: Vec<Value>, tolerance: f64) -> (Vec<Value>, usize) {
    let points: Vec<Point> = items.iter().map(Point::from_value).collect();
    let keep = retained_indices(&points, tolerance);
    let removed = items.len() - keep.len();

    if removed == 0 {
        return (items, 0);
    }

    info!(
        "Removed {} duplicate points from polygon (was {}, now {})",
        removed,
        items.len(),
        keep.len()
    );

    let mut keep = keep.into_iter().peekable();
    let cleaned = items
        .into_iter()
        .enumerate()
        .filter(|(index, _)| {
            if keep.peek() == Some(index) {
                keep.next();
                true
            } else {
                false
            }
        })
        .map(|(_, item)| item)
        .collect();

    (cleaned, removed)
}
