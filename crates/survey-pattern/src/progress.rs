//! Map mission completion onto a waypoint for the drone marker.
//!
//! This picks the waypoint at or before the given progress and does not
//! interpolate between waypoints. Dashboards compare marker positions against
//! stored waypoints, so the discrete behavior is kept.

use crate::geometry::GeoPoint;

/// Waypoint index for `completion_percentage` on a path of `len` points.
///
/// `floor((len - 1) * pct / 100)`, with the percentage clamped to 0..=100
/// and NaN treated as 0. `None` for paths with fewer than two points.
pub fn progress_index(len: usize, completion_percentage: f64) -> Option<usize> {
    if len < 2 {
        return None;
    }

    let pct = if completion_percentage.is_nan() {
        0.0
    } else {
        completion_percentage.clamp(0.0, 100.0)
    };

    let last = len - 1;
    let index = ((last as f64) * pct / 100.0).floor() as usize;
    Some(index.min(last))
}

/// Approximate drone position at `completion_percentage` along `flight_path`.
///
/// Returns `None` when the path is degenerate (empty or a single point); the
/// caller shows no marker in that case.
pub fn progress_to_position(flight_path: &[GeoPoint], completion_percentage: f64) -> Option<GeoPoint> {
    progress_index(flight_path.len(), completion_percentage).map(|i| flight_path[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> Vec<GeoPoint> {
        (0..n).map(|i| GeoPoint::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn endpoints() {
        let p = path(11);
        assert_eq!(progress_to_position(&p, 0.0), Some(p[0]));
        assert_eq!(progress_to_position(&p, 100.0), Some(p[10]));
    }

    #[test]
    fn floors_between_waypoints() {
        let p = path(11);
        // (11 - 1) * 42 / 100 = 4.2
        assert_eq!(progress_index(p.len(), 42.0), Some(4));
        // (11 - 1) * 65 / 100 = 6.5
        assert_eq!(progress_index(p.len(), 65.0), Some(6));
        assert_eq!(progress_index(p.len(), 99.9), Some(9));
    }

    #[test]
    fn out_of_range_is_clamped() {
        let p = path(5);
        assert_eq!(progress_to_position(&p, -20.0), Some(p[0]));
        assert_eq!(progress_to_position(&p, 250.0), Some(p[4]));
        assert_eq!(progress_to_position(&p, f64::NAN), Some(p[0]));
        assert_eq!(progress_to_position(&p, f64::INFINITY), Some(p[4]));
    }

    #[test]
    fn monotonic_in_percentage() {
        let len = 13;
        let mut previous = 0;
        for step in 0..=1000 {
            let index = progress_index(len, step as f64 / 10.0).unwrap();
            assert!(index >= previous, "index went backwards at {}%", step as f64 / 10.0);
            assert!(index < len);
            previous = index;
        }
        assert_eq!(previous, len - 1);
    }

    #[test]
    fn degenerate_paths_have_no_position() {
        assert_eq!(progress_to_position(&[], 50.0), None);
        assert_eq!(progress_to_position(&path(1), 50.0), None);
        assert_eq!(progress_index(0, 0.0), None);
    }
}
