//! Grid pattern - a denser square overlay flown as a lawn-mower sweep in
//! columns from the west edge to the east.

use crate::geometry::{Bounds, GeoPoint, Segment};
use super::util::{band_offsets, horizontal_lines, serpentine, vertical_lines};

/// `line_count` horizontal lines followed by `line_count` vertical lines.
/// No diagonals.
pub fn grid_lines(bounds: &Bounds, line_count: usize) -> Vec<Segment> {
    let mut lines = horizontal_lines(bounds, line_count);
    lines.extend(vertical_lines(bounds, line_count));
    lines
}

/// Lawn-mower sweep over `columns` bands of the east-west extent.
///
/// Column `i` sits at `west + i * width / columns`. Even columns fly south
/// to north, odd columns north to south. The path ends on the east edge
/// level with the last column's end, giving `2 * columns + 1` points.
pub fn lawn_mower_flight_path(bounds: &Bounds, columns: usize) -> Vec<GeoPoint> {
    let columns = columns.max(1);
    let offsets = band_offsets(bounds.west, bounds.width(), columns);

    let mut path = serpentine(&offsets, |lng| {
        (GeoPoint::new(bounds.south, lng), GeoPoint::new(bounds.north, lng))
    });

    let final_lat = if columns % 2 == 0 { bounds.south } else { bounds.north };
    path.push(GeoPoint::new(final_lat, bounds.east));
    path
}
