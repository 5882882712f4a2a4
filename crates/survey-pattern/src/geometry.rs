//! Core geometry types for survey patterns.
//!
//! Latitude and longitude are treated as a flat Cartesian plane: `lng` is the
//! x axis, `lat` is the y axis, and distances are measured in degrees. There
//! is no geodesic correction anywhere in this crate. Downstream consumers
//! store and compare these exact numbers, so keep it that way.
//!
//! ## Rust Lesson #1: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Copy` = a `GeoPoint` is two floats, copying it is cheaper than borrowing
//! - `Serialize`/`Deserialize` = serde generates the JSON mapping for us

use serde::{Deserialize, Serialize};

/// A geographic point. `lat` is north/south, `lng` is east/west.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

/// Axis-aligned extents of a survey region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Flat-plane distance in degrees.
    #[inline]
    pub fn distance(&self, other: GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        (dlat * dlat + dlng * dlng).sqrt()
    }

    /// Both coordinates are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl Segment {
    #[inline]
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self { start, end }
    }
}

impl Bounds {
    /// Build bounds from two opposite corners, in any order.
    pub fn from_corners(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            south: a.lat.min(b.lat),
            west: a.lng.min(b.lng),
            north: a.lat.max(b.lat),
            east: a.lng.max(b.lng),
        }
    }

    /// Square of half-size `offset` around `center`.
    pub fn around(center: GeoPoint, offset: f64) -> Self {
        Self {
            south: center.lat - offset,
            west: center.lng - offset,
            north: center.lat + offset,
            east: center.lng + offset,
        }
    }

    /// Bounding box of a point sequence, `None` when it is empty.
    ///
    /// ## Rust Lesson #2: Option<T>
    ///
    /// There is no `null` bounding box. An empty slice has no extents, and
    /// the caller is forced by the type to handle that case.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let south = points.iter().map(|p| p.lat).fold(f64::INFINITY, f64::min);
        let north = points.iter().map(|p| p.lat).fold(f64::NEG_INFINITY, f64::max);
        let west = points.iter().map(|p| p.lng).fold(f64::INFINITY, f64::min);
        let east = points.iter().map(|p| p.lng).fold(f64::NEG_INFINITY, f64::max);

        Some(Self { south, west, north, east })
    }

    /// East-west extent in degrees.
    #[inline]
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// North-south extent in degrees.
    #[inline]
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    #[inline]
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// True when the region has no area (zero extent on either axis).
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[inline]
    pub fn south_west(&self) -> GeoPoint {
        GeoPoint::new(self.south, self.west)
    }

    #[inline]
    pub fn south_east(&self) -> GeoPoint {
        GeoPoint::new(self.south, self.east)
    }

    #[inline]
    pub fn north_east(&self) -> GeoPoint {
        GeoPoint::new(self.north, self.east)
    }

    #[inline]
    pub fn north_west(&self) -> GeoPoint {
        GeoPoint::new(self.north, self.west)
    }

    /// Closed boundary ring: SW, SE, NE, NW, then SW again.
    pub fn ring(&self) -> Vec<GeoPoint> {
        let sw = self.south_west();
        vec![sw, self.south_east(), self.north_east(), self.north_west(), sw]
    }
}

/// Total flat-plane length of a polyline, in degrees.
pub fn path_length(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// True when the ring's first and last points coincide.
pub fn is_closed(ring: &[GeoPoint]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => ring.len() > 1 && first == last,
        _ => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================
