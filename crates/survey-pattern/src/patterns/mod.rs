//! Survey pattern generators.
//!
//! Each pattern turns the survey bounds into an overlay of coverage lines
//! (display only) and a flight path (the ordered waypoints the drone flies).

pub mod util;

mod crosshatch;
mod grid;
mod perimeter;

pub use crosshatch::{crosshatch_lines, zigzag_flight_path};
pub use grid::{grid_lines, lawn_mower_flight_path};
pub use perimeter::{perimeter_flight_path, perimeter_lines};

use serde::{Deserialize, Serialize};

use crate::config::PatternConfig;
use crate::geometry::{Bounds, GeoPoint, Segment};
use crate::parameters::{DEFAULT_OVERLAP, SurveyParameters};

/// Available pattern types. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Perimeter,
    Crosshatch,
    Grid,
}

/// Flight defaults that travel with a generated pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternMetadata {
    pub pattern_type: PatternType,
    /// Coverage-density hint for display; does not drive line or band counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_spacing_hint: Option<f64>,
    /// Meters
    pub suggested_altitude: f64,
    /// Meters per second
    pub suggested_speed: f64,
}

/// Overlay lines plus flight path for one pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternLayout {
    pub internal_lines: Vec<Segment>,
    pub flight_path: Vec<GeoPoint>,
}

impl PatternType {
    /// Pattern used when a mission type is not recognized.
    pub const FALLBACK: PatternType = PatternType::Crosshatch;

    /// Get all available patterns.
    pub fn all() -> &'static [PatternType] {
        &[PatternType::Perimeter, PatternType::Crosshatch, PatternType::Grid]
    }

    /// Mission-type token for this pattern.
    pub fn name(&self) -> &'static str {
        match self {
            PatternType::Perimeter => "perimeter",
            PatternType::Crosshatch => "crosshatch",
            PatternType::Grid => "grid",
        }
    }

    /// Parse a mission-type token. Case-sensitive, like the stored records.
    pub fn from_name(name: &str) -> Option<PatternType> {
        match name {
            "perimeter" => Some(PatternType::Perimeter),
            "crosshatch" => Some(PatternType::Crosshatch),
            "grid" => Some(PatternType::Grid),
            _ => None,
        }
    }

    /// Parse a token, falling back to crosshatch for anything unknown.
    pub fn from_name_or_fallback(name: &str) -> PatternType {
        Self::from_name(name).unwrap_or(Self::FALLBACK)
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            PatternType::Perimeter => "Flies the boundary of the area",
            PatternType::Crosshatch => "Covers the area in a crisscross pattern",
            PatternType::Grid => "Systematic pattern with parallel lines",
        }
    }

    /// Altitude, speed and spacing defaults for this pattern.
    pub fn metadata(&self) -> PatternMetadata {
        let (line_spacing_hint, suggested_altitude, suggested_speed) = match self {
            PatternType::Perimeter => (None, 30.0, 5.0),
            PatternType::Crosshatch => (Some(25.0), 40.0, 4.0),
            PatternType::Grid => (Some(20.0), 35.0, 3.0),
        };
        PatternMetadata {
            pattern_type: *self,
            line_spacing_hint,
            suggested_altitude,
            suggested_speed,
        }
    }

    /// Survey parameters a new mission of this type starts with.
    pub fn default_parameters(&self) -> SurveyParameters {
        let metadata = self.metadata();
        SurveyParameters {
            altitude: metadata.suggested_altitude,
            overlap: DEFAULT_OVERLAP,
            speed: metadata.suggested_speed,
        }
    }

    /// Generate overlay lines and flight path for a boundary ring.
    ///
    /// This is the main entry point for pattern generation. Lines and sweeps
    /// cover the ring's bounding box; an empty ring gives an empty layout.
    pub fn generate(&self, boundary: &[GeoPoint], config: &PatternConfig) -> PatternLayout {
        let Some(bounds) = Bounds::from_points(boundary) else {
            return PatternLayout {
                internal_lines: Vec::new(),
                flight_path: Vec::new(),
            };
        };

        match self {
            PatternType::Perimeter => PatternLayout {
                internal_lines: perimeter_lines(),
                flight_path: perimeter_flight_path(boundary),
            },
            PatternType::Crosshatch => PatternLayout {
                internal_lines: crosshatch_lines(&bounds, config.crosshatch_lines),
                flight_path: zigzag_flight_path(&bounds, config.crosshatch_rows),
            },
            PatternType::Grid => PatternLayout {
                internal_lines: grid_lines(&bounds, config.grid_lines),
                flight_path: lawn_mower_flight_path(&bounds, config.grid_columns),
            },
        }
    }
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
