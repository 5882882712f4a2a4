//! Perimeter pattern - the drone flies the boundary ring and nothing else.

use crate::geometry::{GeoPoint, Segment, is_closed};

/// Perimeter missions have no coverage overlay.
pub fn perimeter_lines() -> Vec<Segment> {
    Vec::new()
}

/// The boundary ring, in boundary order, closed.
pub fn perimeter_flight_path(boundary: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut path = boundary.to_vec();
    if path.len() > 1 && !is_closed(&path) {
        path.push(path[0]);
    }
    path
}
