//! Boundary derivation: turn whatever geometry a location has into the
//! closed SW, SE, NE, NW, SW ring every pattern starts from.

use crate::config::PatternConfig;
use crate::geometry::{Bounds, GeoPoint};
use crate::survey::Recovery;

/// The geometry a survey area was described with.
///
/// ## Rust Lesson #3: Enums with Data
///
/// Each variant carries exactly the data that case needs. A `Center` has
/// one point, `Corners` has two, and `Missing` has nothing, so there is no
/// way to build a "center with a stray end corner".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingArea {
    /// Square of half-size `offset` around a point.
    Center(GeoPoint),
    /// Two opposite corners of an axis-aligned rectangle.
    Corners { start: GeoPoint, end: GeoPoint },
    /// No geometry available.
    Missing,
}

/// A derived ring plus the substitution made to get it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedBoundary {
    pub bounds: Bounds,
    pub ring: Vec<GeoPoint>,
    pub recovery: Option<Recovery>,
}

/// Derive the survey region for `area`.
///
/// Never fails: missing or non-finite input becomes the configured default
/// region, and a corner pair with no area is expanded around its midpoint.
pub fn derive_boundary(area: &BoundingArea, config: &PatternConfig) -> DerivedBoundary {
    let (bounds, recovery) = match *area {
        BoundingArea::Center(center) if center.is_finite() => {
            (Bounds::around(center, config.offset), None)
        }
        BoundingArea::Corners { start, end } if start.is_finite() && end.is_finite() => {
            let bounds = Bounds::from_corners(start, end);
            if bounds.is_collapsed() {
                (
                    Bounds::around(bounds.center(), config.offset),
                    Some(Recovery::ExpandedCollapsedArea),
                )
            } else {
                (bounds, None)
            }
        }
        _ => (config.default_region, Some(Recovery::DefaultRegion)),
    };

    DerivedBoundary {
        bounds,
        ring: bounds.ring(),
        recovery,
    }
}
