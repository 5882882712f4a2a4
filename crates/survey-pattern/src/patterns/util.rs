//! Shared utilities for pattern generation.
//!
//! Overlay lines and sweep bands are both "split an extent into even steps";
//! they differ only in whether the far edge is included.

use crate::geometry::{Bounds, GeoPoint, Segment};

/// `count` evenly spaced values from `start` to `end`, both ends included.
///
/// Spacing is `(end - start) / (count - 1)`. One value is the degenerate case
/// and yields the midpoint, so a single overlay line becomes a centerline.
pub fn evenly_spaced(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![(start + end) / 2.0],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Leading edge of each of `bands` equal bands over `[start, start + extent)`.
///
/// The far edge is not included; sweeps append their own terminating point.
pub fn band_offsets(start: f64, extent: f64, bands: usize) -> Vec<f64> {
    let bands = bands.max(1);
    let step = extent / bands as f64;
    (0..bands).map(|i| start + i as f64 * step).collect()
}

/// `count` west-to-east lines from the south edge to the north edge.
pub fn horizontal_lines(bounds: &Bounds, count: usize) -> Vec<Segment> {
    evenly_spaced(bounds.south, bounds.north, count)
        .into_iter()
        .map(|lat| Segment::new(GeoPoint::new(lat, bounds.west), GeoPoint::new(lat, bounds.east)))
        .collect()
}

/// `count` south-to-north lines from the west edge to the east edge.
pub fn vertical_lines(bounds: &Bounds, count: usize) -> Vec<Segment> {
    evenly_spaced(bounds.west, bounds.east, count)
        .into_iter()
        .map(|lng| Segment::new(GeoPoint::new(bounds.south, lng), GeoPoint::new(bounds.north, lng)))
        .collect()
}

/// The two full diagonals: SW to NE, then NW to SE.
pub fn diagonals(bounds: &Bounds) -> [Segment; 2] {
    [
        Segment::new(bounds.south_west(), bounds.north_east()),
        Segment::new(bounds.north_west(), bounds.south_east()),
    ]
}

/// Boustrophedon ordering: even bands run `near -> far`, odd bands reversed.
///
/// `endpoints(offset)` returns the `(near, far)` ends of the band at `offset`.
pub fn serpentine<F>(offsets: &[f64], endpoints: F) -> Vec<GeoPoint>
where
    F: Fn(f64) -> (GeoPoint, GeoPoint),
{
    let mut points = Vec::with_capacity(offsets.len() * 2 + 1);

    for (i, &offset) in offsets.iter().enumerate() {
        let (near, far) = endpoints(offset);
        if i % 2 == 0 {
            points.push(near);
            points.push(far);
        } else {
            points.push(far);
            points.push(near);
        }
    }

    points
}
