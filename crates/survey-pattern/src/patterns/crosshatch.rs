//! Crosshatch pattern - horizontal, vertical and diagonal overlay lines,
//! flown as a west/east zigzag that climbs from the south edge to the north.

use crate::geometry::{Bounds, GeoPoint, Segment};
use super::util::{band_offsets, diagonals, horizontal_lines, serpentine, vertical_lines};

/// `line_count` horizontal lines, `line_count` vertical lines, then the two
/// diagonals (SW to NE, NW to SE).
pub fn crosshatch_lines(bounds: &Bounds, line_count: usize) -> Vec<Segment> {
    let mut lines = horizontal_lines(bounds, line_count);
    lines.extend(vertical_lines(bounds, line_count));
    lines.extend(diagonals(bounds));
    lines
}

/// Zigzag sweep over `rows` bands of the north-south extent.
///
/// Band `i` sits at `south + i * height / rows`. Even bands fly west to
/// east, odd bands east to west. The path ends on the north edge above the
/// last band's end, giving `2 * rows + 1` points.
pub fn zigzag_flight_path(bounds: &Bounds, rows: usize) -> Vec<GeoPoint> {
    let rows = rows.max(1);
    let offsets = band_offsets(bounds.south, bounds.height(), rows);

    let mut path = serpentine(&offsets, |lat| {
        (GeoPoint::new(lat, bounds.west), GeoPoint::new(lat, bounds.east))
    });

    let final_lng = if rows % 2 == 0 { bounds.west } else { bounds.east };
    path.push(GeoPoint::new(bounds.north, final_lng));
    path
}
